use chrono::{DateTime, NaiveDateTime, Utc};

pub struct FormatHelper;

impl FormatHelper {
    /// Reads the leading integer the way SonarQube debt strings are written (`"10min"` → 10).
    ///
    /// The digit run is read as `f64`, so arbitrarily long values lose precision instead of failing.
    pub fn parse_leading_int(value: &str) -> Option<f64> {
        let trimmed = value.trim_start();
        let (sign, digits) = match trimmed.as_bytes().first() {
            Some(b'-') => (-1.0, &trimmed[1..]),
            Some(b'+') => (1.0, &trimmed[1..]),
            _ => (1.0, trimmed),
        };
        let end = digits
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(digits.len());
        if end == 0 {
            return None;
        }
        digits[..end].parse::<f64>().ok().map(|n| n * sign)
    }

    /// Accepts RFC 3339 as well as SonarQube's `2024-03-01T10:00:00+0100` form.
    pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
        let value = value.trim();
        if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
            return Some(parsed.with_timezone(&Utc));
        }
        for format in ["%Y-%m-%dT%H:%M:%S%z", "%Y-%m-%dT%H:%M:%S%.f%z"] {
            if let Ok(parsed) = DateTime::parse_from_str(value, format) {
                return Some(parsed.with_timezone(&Utc));
            }
        }
        NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
            .ok()
            .map(|naive| naive.and_utc())
    }

    /// Component keys look like `project:path/to/file`; only the path part is kept.
    pub fn file_name(component: &str) -> &str {
        component.rsplit(':').next().unwrap_or(component)
    }

    /// Parent directory name, or the whole name for top-level files.
    pub fn module_name(file_name: &str) -> &str {
        let parts: Vec<&str> = file_name.split('/').collect();
        if parts.len() > 1 {
            parts[parts.len() - 2]
        } else {
            parts[0]
        }
    }

    pub fn format_module_name(name: &str) -> String {
        name.replace(['-', '_'], " ")
            .split(' ')
            .map(Self::capitalize)
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn capitalize(word: &str) -> String {
        let mut chars = word.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Floor-divided relative time, no rounding.
    pub fn time_ago(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
        let diff_ms = (now - date).num_milliseconds();
        let diff_mins = diff_ms.div_euclid(60_000);
        let diff_hours = diff_mins.div_euclid(60);
        let diff_days = diff_hours.div_euclid(24);

        if diff_mins < 60 {
            format!("{} minutes ago", diff_mins)
        } else if diff_hours < 24 {
            format!("{} hours ago", diff_hours)
        } else if diff_days == 1 {
            "1 day ago".to_string()
        } else {
            format!("{} days ago", diff_days)
        }
    }

    pub fn round_to_tenth(value: f64) -> f64 {
        (value * 10.0).round() / 10.0
    }

    pub fn sequential_id(prefix: &str, n: usize) -> String {
        format!("{}-{:03}", prefix, n)
    }
}
