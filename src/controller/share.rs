use crate::error::ShareError;
use async_trait::async_trait;

pub const SHARE_TITLE: &str = "Daily Philosophical Thought";

/// Whatever the surface offers for sending text elsewhere.
#[async_trait]
pub trait ShareTarget: Send + Sync {
    async fn share(&self, title: &str, text: &str) -> Result<(), ShareError>;
    async fn copy_to_clipboard(&self, text: &str) -> Result<(), ShareError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    Copied,
    Failed,
    NothingToShare,
}
