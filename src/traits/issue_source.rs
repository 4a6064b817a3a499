use async_trait::async_trait;
use crate::errors::VelocityResult;
use crate::structs::issue::Issue;

/// Something that can list the unresolved issues of the configured project.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IssueSource: Send + Sync {
    async fn fetch_issues(&self) -> VelocityResult<Vec<Issue>>;
}
