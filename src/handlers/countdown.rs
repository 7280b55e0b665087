use crate::controller::TICK;
use crate::handlers::refresh_keyboard;
use crate::keyboard::keyboard_for;
use crate::state::BotState;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::MessageId;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

pub fn spawn_countdown(bot: Bot, chat_id: ChatId, message_id: MessageId, state: Arc<BotState>) -> JoinHandle<()> {
    tokio::spawn(async move {
        run_countdown(bot, chat_id, message_id, state).await;
    })
}

/// Ticks the controller's countdown once a second and relabels the
/// regenerate button, until it reaches zero.
pub async fn run_countdown(bot: Bot, chat_id: ChatId, message_id: MessageId, state: Arc<BotState>) {
    let mut interval = interval(TICK);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately
    interval.tick().await;

    loop {
        interval.tick().await;

        let (remaining, markup) = {
            let mut controller = state.controller.lock().await;
            let remaining = controller.tick();
            (remaining, keyboard_for(&controller))
        };

        refresh_keyboard(&bot, chat_id, message_id, markup).await;

        if remaining.is_zero() {
            log::info!("Regeneration available again");
            break;
        }
    }
}
