use std::error::Error;
use std::sync::Arc;
use teloxide::prelude::*;

use daily_wisdom_bot::{callback_handler, command_handler, BotState, Command, Config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    pretty_env_logger::init();
    log::info!("Starting daily wisdom bot...");

    let config = Config::from_env();
    log::info!(
        "Using model {} with thoughts stored in {}",
        config.gemini_model,
        config.store_dir.display()
    );

    // Token comes from TELOXIDE_TOKEN
    let bot = Bot::from_env();

    let state = Arc::new(BotState::from_config(&config));

    let handler = dptree::entry()
        .branch(Update::filter_message().filter_command::<Command>().endpoint(
            |bot: Bot, msg: Message, cmd: Command, state: Arc<BotState>| async move {
                command_handler(bot, msg, cmd, state.clone()).await
            },
        ))
        .branch(callback_handler(state.clone()));

    log::info!("Starting command dispatching...");

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
