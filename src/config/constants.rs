pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_SERVER_PORT: u16 = 8080;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

pub const CONFIG_DIR_NAME: &str = "velocityiq";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const SONARQUBE_URL_ENV: &str = "SONARQUBE_URL";
pub const SONARQUBE_TOKEN_ENV: &str = "SONARQUBE_TOKEN";
pub const SONARQUBE_PROJECT_KEY_ENV: &str = "SONARQUBE_PROJECT_KEY";
pub const SONARQUBE_ORGANIZATION_ENV: &str = "SONARQUBE_ORGANIZATION";
pub const GITHUB_REPO_OWNER_ENV: &str = "GITHUB_REPO_OWNER";
pub const GITHUB_REPO_NAME_ENV: &str = "GITHUB_REPO_NAME";
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";
pub const PORT_ENV: &str = "VELOCITYIQ_PORT";

/// Upstream page size; both pipelines read a single page.
pub const PAGE_SIZE: u32 = 500;

pub const SONAR_MEASURE_KEYS: &str = "bugs,vulnerabilities,code_smells,coverage,duplicated_lines_density,complexity";

pub const CONFIDENCE_MIN: u8 = 75;
pub const CONFIDENCE_MAX: u8 = 94;

pub const ROOT_FOLDER: &str = "root";
pub const UNKNOWN_COMPONENT: &str = "Unknown";

