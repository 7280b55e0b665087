use crate::controller::ShareTarget;
use crate::error::ShareError;
use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

const SHARE_URL: &str = "https://t.me/share/url";

/// Longest share link Telegram reliably accepts on a button.
const MAX_SHARE_URL_LEN: usize = 2048;

/// Shares through Telegram's share link, or posts the bare text so it can
/// be copied.
pub struct TelegramShare {
    pub bot: Bot,
    pub chat_id: ChatId,
}

impl TelegramShare {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }
}

pub fn share_link(text: &str) -> Option<reqwest::Url> {
    let url = reqwest::Url::parse_with_params(SHARE_URL, &[("url", text)]).ok()?;
    if url.as_str().len() > MAX_SHARE_URL_LEN {
        return None;
    }
    Some(url)
}

#[async_trait]
impl ShareTarget for TelegramShare {
    async fn share(&self, title: &str, text: &str) -> Result<(), ShareError> {
        let link = share_link(text).ok_or(ShareError::Unsupported)?;
        let markup = InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::url(
            "📤 Send to a chat".to_string(),
            link,
        )]]);

        if let Err(e) = self
            .bot
            .send_message(self.chat_id, title.to_string())
            .reply_markup(markup)
            .await
        {
            log::warn!("Share button rejected, falling back to plain text: {}", e);
            return Err(ShareError::Unsupported);
        }
        Ok(())
    }

    async fn copy_to_clipboard(&self, text: &str) -> Result<(), ShareError> {
        self.bot
            .send_message(self.chat_id, text.to_string())
            .await
            .map(|_| ())
            .map_err(|e| ShareError::Failed(e.to_string()))
    }
}
