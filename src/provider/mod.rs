use crate::error::ProviderError;
use crate::types::Thought;
use async_trait::async_trait;

mod fallback;
mod gemini;
pub use fallback::*;
pub use gemini::*;

/// Source of freshly generated wisdom statements.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    async fn fetch_primary_statement(&self) -> Result<String, ProviderError>;

    /// Modern Standard Arabic rendering of `source`.
    async fn fetch_translated_statement(&self, source: &str) -> Result<String, ProviderError>;

    /// Cheap round trip to check the backend answers at all.
    async fn ping(&self) -> Result<String, ProviderError>;
}

/// Generates a primary statement and then its translation.
pub async fn generate_thought(provider: &dyn QuoteProvider) -> Result<Thought, ProviderError> {
    let primary = provider.fetch_primary_statement().await?;
    let arabic = provider.fetch_translated_statement(&primary).await?;
    Ok(Thought::new(primary, arabic))
}

const QUOTE_MARKS: [char; 4] = ['"', '\'', '“', '”'];

/// Strips wrapping quotes and `**` emphasis from model output.
pub fn clean_statement(raw: &str) -> Result<String, ProviderError> {
    let mut text = raw.trim();
    if let Some(rest) = text.strip_prefix(&QUOTE_MARKS[..]) {
        text = rest;
    }
    if let Some(rest) = text.strip_suffix(&QUOTE_MARKS[..]) {
        text = rest;
    }

    let cleaned = text.replace("**", "").trim().to_string();
    if cleaned.is_empty() {
        return Err(ProviderError::EmptyResponse);
    }
    Ok(cleaned)
}
