use crate::controller::{format_remaining, Notice, RegenerateOutcome, ShareOutcome};
use crate::handlers::*;
use crate::keyboard::{
    create_keyboard, disabled_button_reply, keyboard_for, DisabledButtonReply, RegenerateButton, ARABIC_DATA,
    ENGLISH_DATA, NOOP_DATA, REGENERATE_DATA, SHARE_DATA,
};
use crate::BotState;
use std::error::Error;
use std::sync::Arc;
use teloxide::dispatching::DpHandlerDescription;
use teloxide::prelude::*;
use teloxide::types::CallbackQuery;

pub fn callback_handler(
    state: Arc<BotState>,
) -> dptree::Handler<'static, DependencyMap, Result<(), Box<dyn Error + Send + Sync>>, DpHandlerDescription>
{
    Update::filter_callback_query()
        .endpoint(move |bot: Bot, q: CallbackQuery| {
            let state = state.clone();
            async move {
                handle_callback_query(bot, q, state).await
            }
        })
}

pub async fn handle_callback_query(
    bot: Bot,
    query: CallbackQuery,
    state: Arc<BotState>,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let mut answer: Option<String> = None;

    if let (Some(message), Some(data)) = (query.message, query.data) {
        let chat_id = message.chat.id;

        let mut controller = match state.acquire_controller(LOCK_WAIT).await {
            Ok(guard) => guard,
            Err(e) => {
                log::error!("Failed to acquire controller lock: {}", e);
                bot.answer_callback_query(query.id).text(BUSY_MESSAGE).await?;
                return Ok(());
            }
        };

        match data.as_str() {
            REGENERATE_DATA => {
                if controller.can_regenerate() {
                    let generating = create_keyboard(RegenerateButton::Generating, controller.is_arabic());
                    refresh_keyboard(&bot, chat_id, message.id, generating).await;
                }

                match controller.request_regenerate().await {
                    RegenerateOutcome::Regenerated { .. } => {
                        bot.edit_message_text(chat_id, message.id, thought_text(&controller))
                            .reply_markup(keyboard_for(&controller))
                            .await?;
                        let ticker = spawn_countdown(bot.clone(), chat_id, message.id, state.clone());
                        state.replace_countdown(Some(ticker)).await;
                    }
                    RegenerateOutcome::Blocked { remaining } => {
                        // Shown as the callback answer instead of a chat message
                        let others: Vec<Notice> = controller
                            .take_notices()
                            .into_iter()
                            .filter(|n| !matches!(n, Notice::WaitBeforeRegenerating(_)))
                            .collect();
                        send_notices(&bot, chat_id, others).await?;
                        answer = Some(Notice::WaitBeforeRegenerating(remaining).message());
                        refresh_keyboard(&bot, chat_id, message.id, keyboard_for(&controller)).await;
                        let ticker = spawn_countdown(bot.clone(), chat_id, message.id, state.clone());
                        state.replace_countdown(Some(ticker)).await;
                    }
                    RegenerateOutcome::Busy => {
                        answer = Some(BUSY_MESSAGE.to_string());
                    }
                }
            }
            NOOP_DATA => match disabled_button_reply(&controller) {
                DisabledButtonReply::Wait(remaining) => {
                    answer = Some(format!("Wait {}", format_remaining(remaining)));
                }
                DisabledButtonReply::Reenable(markup) => {
                    refresh_keyboard(&bot, chat_id, message.id, markup).await;
                }
            },
            SHARE_DATA => {
                let target = TelegramShare::new(bot.clone(), chat_id);
                answer = match controller.share(&target).await {
                    ShareOutcome::Shared => Some("Ready to share".to_string()),
                    ShareOutcome::Failed => Some("Sharing didn't work this time.".to_string()),
                    ShareOutcome::Copied | ShareOutcome::NothingToShare => None,
                };
            }
            ENGLISH_DATA | ARABIC_DATA => {
                let is_arabic = data == ARABIC_DATA;
                if controller.set_language(is_arabic).await.is_ok() {
                    bot.edit_message_text(chat_id, message.id, thought_text(&controller))
                        .reply_markup(keyboard_for(&controller))
                        .await?;
                    if !controller.countdown_remaining().is_zero() {
                        let ticker = spawn_countdown(bot.clone(), chat_id, message.id, state.clone());
                        state.replace_countdown(Some(ticker)).await;
                    }
                }
            }
            other => {
                log::warn!("Unknown callback data: {}", other);
            }
        }

        send_notices(&bot, chat_id, controller.take_notices()).await?;
    }

    match answer {
        Some(text) => bot.answer_callback_query(query.id).text(text).await?,
        None => bot.answer_callback_query(query.id).await?,
    };
    Ok(())
}
