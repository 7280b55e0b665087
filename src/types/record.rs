use serde::{Deserialize, Serialize};

/// The single cached quote, stored as
/// `{ thought, date, lastRegenerated, isArabic }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRecord {
    pub thought: String,
    /// Local calendar day the text was generated on, `YYYY-MM-DD`.
    pub date: String,
    /// Epoch milliseconds of the last write.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_regenerated: Option<i64>,
    #[serde(default)]
    pub is_arabic: bool,
}

impl QuoteRecord {
    pub fn new(thought: String, date: String, last_regenerated: i64, is_arabic: bool) -> Self {
        Self {
            thought,
            date,
            last_regenerated: Some(last_regenerated),
            is_arabic,
        }
    }
}
