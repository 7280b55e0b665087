//! Single-slot daily cache and the regeneration cooldown gate.
//!
//! The gate only looks at wall-clock time since the last write. It does not
//! reset when a new calendar day begins; replacing stale text is the job of
//! the load flow.

use crate::error::StorageError;
use crate::types::QuoteRecord;
use std::sync::Arc;
use std::time::Duration;

mod clock;
mod store;
pub use clock::*;
pub use store::*;

pub const STORAGE_KEY: &str = "dailyThought";

pub const REGENERATION_COOLDOWN: Duration = Duration::from_secs(10);

pub struct DailyCache {
    store: Box<dyn Storage>,
    clock: Arc<dyn Clock>,
}

impl DailyCache {
    pub fn new(store: Box<dyn Storage>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Reads the stored record. Missing, unreadable and unparseable payloads
    /// all come back as `None`.
    pub fn load(&self) -> Option<QuoteRecord> {
        let raw = match self.store.get(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                log::error!("Failed to read stored thought: {}", e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(record) => Some(record),
            Err(e) => {
                log::error!("Error parsing stored thought: {}", e);
                None
            }
        }
    }

    pub fn is_fresh(&self, record: &QuoteRecord) -> bool {
        record.date == self.clock.today()
    }

    /// Builds the record `save` would write right now.
    pub fn fresh_record(&self, text: &str, is_arabic: bool) -> QuoteRecord {
        QuoteRecord::new(text.to_string(), self.clock.today(), self.clock.now_ms(), is_arabic)
    }

    pub fn save(&self, text: &str, is_arabic: bool) -> Result<QuoteRecord, StorageError> {
        let record = self.fresh_record(text, is_arabic);
        self.write(&record)?;
        Ok(record)
    }

    /// Rewrites only the language flag of the stored record.
    pub fn set_language_preference(&self, is_arabic: bool) -> Result<QuoteRecord, StorageError> {
        let raw = self.store.get(STORAGE_KEY)?.ok_or(StorageError::Missing)?;
        let mut record: QuoteRecord = serde_json::from_str(&raw)?;
        record.is_arabic = is_arabic;
        self.write(&record)?;
        Ok(record)
    }

    pub fn can_regenerate(&self, record: Option<&QuoteRecord>) -> bool {
        match record.and_then(|r| r.last_regenerated) {
            None => true,
            Some(last) => {
                self.clock.now_ms().saturating_sub(last) >= REGENERATION_COOLDOWN.as_millis() as i64
            }
        }
    }

    pub fn time_until_regeneration(&self, record: Option<&QuoteRecord>) -> Duration {
        let Some(last) = record.and_then(|r| r.last_regenerated) else {
            return Duration::ZERO;
        };
        let elapsed = self.clock.now_ms().saturating_sub(last);
        let remaining = (REGENERATION_COOLDOWN.as_millis() as i64).saturating_sub(elapsed);
        Duration::from_millis(remaining.max(0) as u64)
    }

    fn write(&self, record: &QuoteRecord) -> Result<(), StorageError> {
        let json = serde_json::to_string(record)?;
        self.store.set(STORAGE_KEY, &json)
    }
}
