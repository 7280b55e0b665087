use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Available commands:")]

pub enum Command {
    #[command(description = "Start the bot and show today's thought")]
    Start,
    #[command(description = "Show the current thought")]
    Thought,
    #[command(description = "Generate a new thought")]
    New,
    #[command(description = "Share the current thought")]
    Share,
    #[command(description = "Show English first")]
    English,
    #[command(description = "Show Arabic first")]
    Arabic,
    #[command(description = "Check the Gemini API connection")]
    Ping,
    #[command(description = "Show help message")]
    Help,
}
