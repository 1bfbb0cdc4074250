use teloxide::{prelude::*, utils::command::BotCommands};

use crate::application::words::WordService;
use crate::interfaces::bot::State;
use crate::interfaces::bot::handlers::collections::send_collections_menu;

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;
type MyDialogue = Dialogue<State, teloxide::dispatching::dialogue::InMemStorage<State>>;

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Supported commands:")]
pub enum Command {
    #[command(description = "Show the word collections.")]
    Start,
    #[command(description = "Abandon the form you are filling in.")]
    Cancel,
    #[command(description = "Show this help text.")]
    Help,
}

pub async fn start(
    bot: Bot,
    dialogue: MyDialogue,
    msg: Message,
    cmd: Command,
    service: WordService,
) -> HandlerResult {
    match cmd {
        Command::Start | Command::Cancel => {
            send_collections_menu(&bot, msg.chat.id, &service, &dialogue).await?;
        }
        Command::Help => {
            bot.send_message(msg.chat.id, Command::descriptions().to_string())
                .await?;
        }
    }
    Ok(())
}
