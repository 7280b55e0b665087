use crate::controller::{RegenerateOutcome, ShareOutcome};
use crate::handlers::*;
use crate::{BotState, Command};
use std::error::Error;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    state: Arc<BotState>,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let chat_id = msg.chat.id;

    if let Command::Help = cmd {
        bot.send_message(chat_id, Command::descriptions().to_string())
            .await?;
        return Ok(());
    }

    let mut controller = match state.acquire_controller(LOCK_WAIT).await {
        Ok(guard) => guard,
        Err(e) => {
            log::error!("Failed to acquire controller lock: {}", e);
            bot.send_message(chat_id, BUSY_MESSAGE).await?;
            return Ok(());
        }
    };

    match cmd {
        Command::Start => {
            bot.send_message(
                chat_id,
                "
                \n 🌅 A new wisdom thought every day, in English and Arabic.
                \n 🔄 Use /new for a fresh thought (once every 10 seconds).
                \n 📤 Use /share to pass it on.
                \n 🌐 Use /english or /arabic to choose which comes first.
                \n ❓ Use /help for additional guidance.
                "
            )
            .await?;
            controller.load().await;
            show_thought(&bot, chat_id, &mut controller, &state).await?;
        }
        Command::Thought => {
            controller.ensure_loaded().await;
            show_thought(&bot, chat_id, &mut controller, &state).await?;
        }
        Command::New => {
            controller.ensure_loaded().await;
            match controller.request_regenerate().await {
                RegenerateOutcome::Regenerated { .. } => {
                    show_thought(&bot, chat_id, &mut controller, &state).await?;
                }
                RegenerateOutcome::Blocked { .. } => {
                    send_notices(&bot, chat_id, controller.take_notices()).await?;
                }
                RegenerateOutcome::Busy => {
                    bot.send_message(chat_id, BUSY_MESSAGE).await?;
                }
            }
        }
        Command::Share => {
            controller.ensure_loaded().await;
            let target = TelegramShare::new(bot.clone(), chat_id);
            if controller.share(&target).await == ShareOutcome::Failed {
                bot.send_message(chat_id, "Sharing didn't work this time.").await?;
            }
            send_notices(&bot, chat_id, controller.take_notices()).await?;
        }
        Command::English | Command::Arabic => {
            let is_arabic = matches!(cmd, Command::Arabic);
            if controller.set_language(is_arabic).await.is_ok() {
                show_thought(&bot, chat_id, &mut controller, &state).await?;
            } else {
                send_notices(&bot, chat_id, controller.take_notices()).await?;
            }
        }
        Command::Ping => {
            let reply = match controller.provider().ping().await {
                Ok(response) => format!("API Test Successful. Response: {}", response),
                Err(e) => format!("API Test Failed: {}", e),
            };
            bot.send_message(chat_id, reply).await?;
        }
        Command::Help => {}
    }
    Ok(())
}
