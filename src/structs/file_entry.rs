use crate::structs::github::github_content::GitHubContent;
use crate::structs::sonarqube::sonar_component::SonarComponent;

/// A file known to the configured file source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    pub path: String,
}

impl FileEntry {
    pub fn new(path: &str) -> Self {
        let name = path.rsplit('/').next().unwrap_or(path);
        Self {
            name: name.to_string(),
            path: path.to_string(),
        }
    }

    /// Everything before the last `/`, or `None` for top-level files.
    pub fn folder(&self) -> Option<&str> {
        self.path.rsplit_once('/').map(|(folder, _)| folder)
    }

    pub fn from_sonar(component: SonarComponent) -> Option<Self> {
        let path = component
            .path
            .filter(|p| !p.is_empty())
            .or_else(|| component.name.clone())?;
        Some(Self {
            name: component.name.unwrap_or_else(|| path.clone()),
            path,
        })
    }

    /// Directory and submodule entries are skipped.
    pub fn from_github(content: GitHubContent) -> Option<Self> {
        if content.content_type.as_deref().is_some_and(|t| t != "file") {
            return None;
        }
        let path = content
            .path
            .filter(|p| !p.is_empty())
            .or_else(|| content.name.clone())?;
        Some(Self {
            name: content.name.unwrap_or_else(|| path.clone()),
            path,
        })
    }
}
