mod callback;
mod command;
mod countdown;
mod share;

pub use callback::*;
pub use command::*;
pub use countdown::*;
pub use share::*;

use crate::controller::{Notice, ThoughtController};
use crate::keyboard::keyboard_for;
use crate::state::BotState;
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;
use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardMarkup, MessageId};

/// How long a handler waits for a generation in progress.
pub const LOCK_WAIT: Duration = Duration::from_secs(5);

pub const BUSY_MESSAGE: &str = "Sorry, a thought is being generated. Please try again in a few moments.";

/// Message body for the current thought.
pub fn thought_text(controller: &ThoughtController) -> String {
    let text = controller.display_text();
    if text.is_empty() {
        "…".to_string()
    } else {
        text
    }
}

pub async fn send_notices(
    bot: &Bot,
    chat_id: ChatId,
    notices: Vec<Notice>,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    for notice in notices {
        bot.send_message(chat_id, notice.message()).await?;
    }
    Ok(())
}

/// Sends the thought with its keyboard, plus any pending notices, and keeps
/// the countdown label moving if one is running.
pub async fn show_thought(
    bot: &Bot,
    chat_id: ChatId,
    controller: &mut ThoughtController,
    state: &Arc<BotState>,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    send_notices(bot, chat_id, controller.take_notices()).await?;

    let sent = bot
        .send_message(chat_id, thought_text(controller))
        .reply_markup(keyboard_for(controller))
        .await?;

    if !controller.countdown_remaining().is_zero() {
        let ticker = spawn_countdown(bot.clone(), chat_id, sent.id, state.clone());
        state.replace_countdown(Some(ticker)).await;
    }
    Ok(())
}

/// Relabels a message's buttons. Failures such as "message is not
/// modified" are only logged.
pub async fn refresh_keyboard(bot: &Bot, chat_id: ChatId, message_id: MessageId, markup: InlineKeyboardMarkup) {
    if let Err(e) = bot
        .edit_message_reply_markup(chat_id, message_id)
        .reply_markup(markup)
        .await
    {
        log::warn!("Failed to update keyboard on message {}: {}", message_id.0, e);
    }
}
