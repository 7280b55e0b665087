use std::time::Duration;

pub const TICK: Duration = Duration::from_secs(1);

/// One-second resolution countdown behind the "Wait Ns" label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Countdown {
    remaining: Duration,
}

impl Countdown {
    pub fn start(&mut self, from: Duration) {
        self.remaining = from;
    }

    pub fn clear(&mut self) {
        self.remaining = Duration::ZERO;
    }

    /// Advances one tick and returns what is left.
    pub fn tick(&mut self) -> Duration {
        self.remaining = self.remaining.saturating_sub(TICK);
        self.remaining
    }

    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    pub fn is_active(&self) -> bool {
        !self.remaining.is_zero()
    }
}

/// Whole seconds left, rounded up: 6.2s reads as `7s`.
pub fn format_remaining(remaining: Duration) -> String {
    let ms = remaining.as_millis();
    format!("{}s", (ms + 999) / 1000)
}
