mod record;
pub use record::*;

/// Separator between the two language variants of a packed thought.
pub const THOUGHT_SEPARATOR: &str = "\n\n";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thought {
    pub primary: String,
    pub arabic: String,
}

impl Thought {
    pub fn new(primary: impl Into<String>, arabic: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            arabic: arabic.into(),
        }
    }

    /// Splits a stored thought at the first separator. Text without one is
    /// all primary.
    pub fn parse(packed: &str) -> Self {
        match packed.split_once(THOUGHT_SEPARATOR) {
            Some((primary, arabic)) => Self::new(primary, arabic),
            None => Self::new(packed, ""),
        }
    }

    pub fn combined(&self) -> String {
        format!("{}{}{}", self.primary, THOUGHT_SEPARATOR, self.arabic)
    }

    /// Variants in display order, skipping an empty Arabic half.
    pub fn ordered(&self, arabic_first: bool) -> Vec<&str> {
        let mut parts = vec![self.primary.as_str()];
        if !self.arabic.is_empty() {
            if arabic_first {
                parts.insert(0, self.arabic.as_str());
            } else {
                parts.push(self.arabic.as_str());
            }
        }
        parts
    }
}
