use teloxide::prelude::*;

use crate::application::words::WordService;
use crate::interfaces::bot::{BotSettings, State};

use super::{admin, collections};

type MyDialogue = Dialogue<State, teloxide::dispatching::dialogue::InMemStorage<State>>;
type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

pub async fn text_handler(
    bot: Bot,
    msg: Message,
    dialogue: MyDialogue,
    service: WordService,
    settings: BotSettings,
) -> HandlerResult {
    let text = match msg.text() {
        Some(text) => text,
        None => return Ok(()),
    };
    let Some(user_id) = msg.from().map(|user| user.id) else {
        return Ok(());
    };
    let state = match dialogue.get().await? {
        Some(state) if state.is_waiting_for_text() => state,
        _ => return Ok(()),
    };
    // Replies from anyone but the user who opened the form are ordinary chat.
    if state.is_held_by_other(user_id) {
        return Ok(());
    }

    log::info!("[TEXT] Form reply from ChatID: {}", msg.chat.id);

    match state {
        State::ReceiveCollectionName {
            owner,
            menu_message_id,
            prompt_message_id,
        } => {
            collections::receive_collection_name(
                &bot,
                &msg,
                &dialogue,
                &service,
                settings,
                owner,
                text,
                menu_message_id,
                prompt_message_id,
            )
            .await?;
        }
        State::ReceiveWord {
            collection,
            menu_message_id,
            prompt_message_id,
            ..
        } => {
            collections::receive_word(
                &bot,
                &msg,
                &dialogue,
                &service,
                settings,
                text,
                &collection,
                menu_message_id,
                prompt_message_id,
            )
            .await?;
        }
        State::AdminReceivePassword {
            owner,
            collection,
            menu_message_id,
            prompt_message_id,
        } => {
            admin::receive_password(
                &bot,
                &msg,
                &dialogue,
                &service,
                settings,
                owner,
                text,
                &collection,
                menu_message_id,
                prompt_message_id,
            )
            .await?;
        }
        _ => {}
    }
    Ok(())
}
