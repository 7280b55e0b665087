//! Orchestrates one quote-viewing session: load, regenerate, share and the
//! language toggle, on top of the cache and the provider.

use crate::cache::DailyCache;
use crate::error::{ShareError, StorageError};
use crate::provider::{fallback_thought, generate_thought, QuoteProvider};
use crate::types::{QuoteRecord, Thought, THOUGHT_SEPARATOR};
use rand::rngs::StdRng;
use std::sync::Arc;
use std::time::Duration;

mod countdown;
mod share;
pub use countdown::*;
pub use share::*;

/// Pause between dropping the old thought and showing the new one.
pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready { fallback: bool },
    Regenerating,
    Blocked { remaining: Duration },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegenerateOutcome {
    Regenerated { fallback: bool },
    Blocked { remaining: Duration },
    Busy,
}

/// Non-blocking messages for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    ApiError,
    WaitBeforeRegenerating(Duration),
    CopiedToClipboard,
    NoThoughtData,
    LanguageUpdateFailed,
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::ApiError => {
                "⚠️ API Error: using a fallback thought instead. Please check your API key.".to_string()
            }
            Notice::WaitBeforeRegenerating(remaining) => format!(
                "⏳ Please wait {} before generating a new thought.",
                format_remaining(*remaining)
            ),
            Notice::CopiedToClipboard => "📋 The thought has been copied for you.".to_string(),
            Notice::NoThoughtData => {
                "Please generate a thought first before changing the language.".to_string()
            }
            Notice::LanguageUpdateFailed => {
                "Failed to update language preference. Please try again.".to_string()
            }
        }
    }
}

pub struct ThoughtController {
    cache: DailyCache,
    provider: Arc<dyn QuoteProvider>,
    rng: StdRng,
    transition: Duration,
    phase: Phase,
    thought: Option<Thought>,
    is_arabic: bool,
    api_error: bool,
    /// Record the cooldown is measured against.
    gate_record: Option<QuoteRecord>,
    countdown: Countdown,
    notices: Vec<Notice>,
}

impl ThoughtController {
    pub fn new(cache: DailyCache, provider: Arc<dyn QuoteProvider>, rng: StdRng) -> Self {
        Self {
            cache,
            provider,
            rng,
            transition: DEFAULT_TRANSITION,
            phase: Phase::Loading,
            thought: None,
            is_arabic: false,
            api_error: false,
            gate_record: None,
            countdown: Countdown::default(),
            notices: Vec::new(),
        }
    }

    pub fn with_transition(mut self, transition: Duration) -> Self {
        self.transition = transition;
        self
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn thought(&self) -> Option<&Thought> {
        self.thought.as_ref()
    }

    pub fn is_arabic(&self) -> bool {
        self.is_arabic
    }

    pub fn api_error(&self) -> bool {
        self.api_error
    }

    pub fn provider(&self) -> &Arc<dyn QuoteProvider> {
        &self.provider
    }

    pub fn countdown_remaining(&self) -> Duration {
        self.countdown.remaining()
    }

    /// Whether the regenerate control should be enabled right now.
    pub fn can_regenerate(&self) -> bool {
        matches!(self.phase, Phase::Ready { .. } | Phase::Blocked { .. }) && !self.countdown.is_active()
    }

    /// Both variants joined for display, Arabic first if preferred.
    pub fn display_text(&self) -> String {
        self.thought
            .as_ref()
            .map(|t| t.ordered(self.is_arabic).join(THOUGHT_SEPARATOR))
            .unwrap_or_default()
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Starts a fresh session: today's cached thought if there is one,
    /// otherwise a newly generated (or fallback) thought.
    pub async fn load(&mut self) {
        self.phase = Phase::Loading;
        self.api_error = false;
        self.countdown.clear();

        let stored = self.cache.load();
        let cached = stored
            .as_ref()
            .filter(|record| self.cache.is_fresh(record) && !record.thought.is_empty());

        if let Some(record) = cached {
            log::info!("Using today's cached thought from {}", record.date);
            self.thought = Some(Thought::parse(&record.thought));
            self.is_arabic = record.is_arabic;
            self.phase = Phase::Ready { fallback: false };
        } else {
            self.is_arabic = false;
            let (thought, fallback) = match generate_thought(self.provider.as_ref()).await {
                Ok(thought) => (thought, false),
                Err(e) => {
                    log::error!("Error loading thought: {}", e);
                    self.api_error = true;
                    self.notices.push(Notice::ApiError);
                    (fallback_thought(&mut self.rng), true)
                }
            };
            self.persist(&thought, false);
            self.thought = Some(thought);
            self.phase = Phase::Ready { fallback };
        }

        // The gate looks at what was stored before this load, not at the
        // write we may just have made.
        self.gate_record = stored;
        if !self.cache.can_regenerate(self.gate_record.as_ref()) {
            let remaining = self.cache.time_until_regeneration(self.gate_record.as_ref());
            log::info!("Regeneration cooling down for {}", format_remaining(remaining));
            self.countdown.start(remaining);
        }
    }

    /// Runs the first load of a session; later calls are no-ops.
    pub async fn ensure_loaded(&mut self) {
        if self.phase == Phase::Loading {
            self.load().await;
        }
    }

    /// One countdown step. Returns what is left; at zero regeneration is
    /// enabled again.
    pub fn tick(&mut self) -> Duration {
        let remaining = self.countdown.tick();
        match self.phase {
            Phase::Blocked { .. } if remaining.is_zero() => {
                self.phase = Phase::Ready { fallback: self.api_error };
            }
            Phase::Blocked { .. } => self.phase = Phase::Blocked { remaining },
            _ => {}
        }
        remaining
    }

    pub async fn request_regenerate(&mut self) -> RegenerateOutcome {
        if matches!(self.phase, Phase::Loading | Phase::Regenerating) {
            return RegenerateOutcome::Busy;
        }

        if !self.cache.can_regenerate(self.gate_record.as_ref()) {
            let remaining = self.cache.time_until_regeneration(self.gate_record.as_ref());
            log::info!("Regeneration blocked for another {}", format_remaining(remaining));
            self.countdown.start(remaining);
            self.phase = Phase::Blocked { remaining };
            self.notices.push(Notice::WaitBeforeRegenerating(remaining));
            return RegenerateOutcome::Blocked { remaining };
        }

        self.phase = Phase::Regenerating;

        let (thought, fallback) = if self.api_error {
            (fallback_thought(&mut self.rng), true)
        } else {
            match generate_thought(self.provider.as_ref()).await {
                Ok(thought) => (thought, false),
                Err(e) => {
                    log::error!("Error regenerating thought: {}", e);
                    self.api_error = true;
                    self.notices.push(Notice::ApiError);
                    (fallback_thought(&mut self.rng), true)
                }
            }
        };

        self.thought = None;
        if !self.transition.is_zero() {
            tokio::time::sleep(self.transition).await;
        }

        // A regenerated thought is stored as English-first; the session keeps
        // showing it in the order the reader picked.
        let record = self.persist(&thought, false);
        self.gate_record = Some(record);
        self.thought = Some(thought);
        self.countdown.start(crate::cache::REGENERATION_COOLDOWN);
        self.phase = Phase::Ready { fallback };

        RegenerateOutcome::Regenerated { fallback }
    }

    pub async fn share(&mut self, target: &dyn ShareTarget) -> ShareOutcome {
        let text = self.display_text();
        if text.is_empty() {
            return ShareOutcome::NothingToShare;
        }

        match target.share(SHARE_TITLE, &text).await {
            Ok(()) => ShareOutcome::Shared,
            Err(ShareError::Unsupported) => match target.copy_to_clipboard(&text).await {
                Ok(()) => {
                    self.notices.push(Notice::CopiedToClipboard);
                    ShareOutcome::Copied
                }
                Err(e) => {
                    log::error!("Error copying thought: {}", e);
                    ShareOutcome::Failed
                }
            },
            Err(e) => {
                log::error!("Error sharing: {}", e);
                ShareOutcome::Failed
            }
        }
    }

    /// Stores the language preference and reloads the session to apply it.
    pub async fn set_language(&mut self, is_arabic: bool) -> Result<(), StorageError> {
        match self.cache.set_language_preference(is_arabic) {
            Ok(_) => {
                self.load().await;
                Ok(())
            }
            Err(StorageError::Missing) => {
                self.notices.push(Notice::NoThoughtData);
                Err(StorageError::Missing)
            }
            Err(e) => {
                log::error!("Error updating language preference: {}", e);
                self.notices.push(Notice::LanguageUpdateFailed);
                Err(e)
            }
        }
    }

    /// A failed write is logged and the session carries on with the unsaved
    /// record.
    fn persist(&self, thought: &Thought, is_arabic: bool) -> QuoteRecord {
        let text = thought.combined();
        match self.cache.save(&text, is_arabic) {
            Ok(record) => record,
            Err(e) => {
                log::error!("Failed to save thought: {}", e);
                self.cache.fresh_record(&text, is_arabic)
            }
        }
    }
}
