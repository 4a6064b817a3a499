#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubCredentials {
    pub api_url: String,
    pub owner: String,
    pub repo: String,
    pub token: String,
}
