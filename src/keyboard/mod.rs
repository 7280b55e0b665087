use crate::controller::{format_remaining, Phase, ThoughtController};
use std::time::Duration;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

pub const REGENERATE_DATA: &str = "regenerate";
pub const SHARE_DATA: &str = "share";
pub const ENGLISH_DATA: &str = "lang_en";
pub const ARABIC_DATA: &str = "lang_ar";
/// Callback of a disabled button.
pub const NOOP_DATA: &str = "noop";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegenerateButton {
    Enabled,
    Waiting(Duration),
    Generating,
}

impl RegenerateButton {
    pub fn for_controller(controller: &ThoughtController) -> Self {
        match controller.phase() {
            Phase::Loading | Phase::Regenerating => RegenerateButton::Generating,
            _ if controller.can_regenerate() => RegenerateButton::Enabled,
            _ => RegenerateButton::Waiting(controller.countdown_remaining()),
        }
    }

    pub fn label(&self) -> String {
        match self {
            RegenerateButton::Enabled => "🔄 New Thought".to_string(),
            RegenerateButton::Waiting(remaining) => format!("⏳ Wait {}", format_remaining(*remaining)),
            RegenerateButton::Generating => "⏳ Generating...".to_string(),
        }
    }
}

pub fn create_keyboard(regenerate: RegenerateButton, is_arabic: bool) -> InlineKeyboardMarkup {
    let regenerate_data = match regenerate {
        RegenerateButton::Enabled => REGENERATE_DATA,
        _ => NOOP_DATA,
    };

    let mark = |selected: bool, label: &str| {
        if selected {
            format!("✅ {}", label)
        } else {
            label.to_string()
        }
    };

    let keyboard = vec![
        vec![
            InlineKeyboardButton::callback(regenerate.label(), regenerate_data.to_string()),
            InlineKeyboardButton::callback("📤 Share".to_string(), SHARE_DATA.to_string()),
        ],
        vec![
            InlineKeyboardButton::callback(mark(!is_arabic, "English"), ENGLISH_DATA.to_string()),
            InlineKeyboardButton::callback(mark(is_arabic, "العربية"), ARABIC_DATA.to_string()),
        ],
    ];

    InlineKeyboardMarkup::new(keyboard)
}

pub fn keyboard_for(controller: &ThoughtController) -> InlineKeyboardMarkup {
    create_keyboard(RegenerateButton::for_controller(controller), controller.is_arabic())
}

/// What a tap on a disabled regenerate button gets back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisabledButtonReply {
    Wait(Duration),
    /// The cooldown is over but this message still shows a stale label.
    Reenable(InlineKeyboardMarkup),
}

pub fn disabled_button_reply(controller: &ThoughtController) -> DisabledButtonReply {
    let remaining = controller.countdown_remaining();
    if remaining.is_zero() {
        DisabledButtonReply::Reenable(keyboard_for(controller))
    } else {
        DisabledButtonReply::Wait(remaining)
    }
}
