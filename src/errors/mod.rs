use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum VelocityError {
    // Configuration errors
    #[error("{service} not configured")]
    ConfigurationError {
        service: String,
        missing: Vec<String>,
    },
    #[error("Configuration file error at '{path}': {reason}")]
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    // Upstream service errors
    #[error("{message}")]
    UpstreamError {
        service: String,
        status: Option<u16>,
        message: String,
    },

    // Network/API errors
    #[error("Network error during {operation}: {reason}")]
    NetworkError {
        operation: String,
        url: Option<String>,
        reason: String,
    },

    // Parser errors
    #[error("Parse error in {content_type}: {reason}")]
    ParseError {
        content_type: String,
        reason: String,
    },

    // System errors
    #[error("System error during {operation}: {reason}")]
    SystemError {
        operation: String,
        reason: String,
    },
}

impl VelocityError {
    pub fn config_error(service: &str, missing: &[&str]) -> Self {
        Self::ConfigurationError {
            service: service.to_string(),
            missing: missing.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn upstream_error(service: &str, status: Option<u16>, message: &str) -> Self {
        Self::UpstreamError {
            service: service.to_string(),
            status,
            message: message.to_string(),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::ConfigurationError { .. })
    }

    /// HTTP status the dashboard API answers with for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::ConfigurationError { .. } => 400,
            _ => 500,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SystemError { .. } => ErrorSeverity::Critical,
            Self::ConfigurationFileError { .. } => ErrorSeverity::High,
            Self::UpstreamError { .. } => ErrorSeverity::Medium,
            Self::NetworkError { .. } => ErrorSeverity::Medium,
            Self::ParseError { .. } => ErrorSeverity::Medium,
            Self::ConfigurationError { .. } => ErrorSeverity::Low,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigurationError { missing, .. } if !missing.is_empty() => {
                format!("{} (missing: {})\n💡 Set the values in config.toml or the environment", self, missing.join(", "))
            }
            Self::NetworkError { url: Some(url), .. } => format!("{} (URL: {})", self, url),
            Self::UpstreamError { status: Some(status), service, .. } => {
                format!("{}\n💡 {} answered with HTTP {}", self, service, status)
            }
            _ => self.to_string(),
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for velocityiq operations
pub type VelocityResult<T> = Result<T, VelocityError>;

/// Error handler for consistent error processing
pub struct ErrorHandler;

impl ErrorHandler {
    /// Handle error with appropriate logging and user feedback
    pub fn handle_error(error: &VelocityError) {
        let severity = error.severity();

        log::error!("[{}] {}", severity.name(), error.technical_details());
        eprintln!("{} {}", severity.emoji(), error.user_message());
    }
}

impl From<std::io::Error> for VelocityError {
    fn from(error: std::io::Error) -> Self {
        VelocityError::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for VelocityError {
    fn from(error: serde_json::Error) -> Self {
        VelocityError::ParseError {
            content_type: "JSON".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for VelocityError {
    fn from(error: toml::de::Error) -> Self {
        VelocityError::ParseError {
            content_type: "TOML".to_string(),
            reason: error.message().to_string(),
        }
    }
}

impl From<reqwest::Error> for VelocityError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            return VelocityError::ParseError {
                content_type: "JSON".to_string(),
                reason: error.to_string(),
            };
        }
        VelocityError::NetworkError {
            operation: "HTTP request".to_string(),
            url: error.url().map(|u| u.to_string()),
            reason: error.to_string(),
        }
    }
}
