pub mod github_content;
