use async_trait::async_trait;
use crate::errors::VelocityResult;
use crate::structs::file_entry::FileEntry;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FileTreeSource: Send + Sync {
    async fn fetch_files(&self) -> VelocityResult<Vec<FileEntry>>;
}
