use teloxide::prelude::*;

use crate::application::words::WordService;
use crate::interfaces::bot::{Notice, State};

use super::{admin, collections};

type MyDialogue = Dialogue<State, teloxide::dispatching::dialogue::InMemStorage<State>>;
type HandlerError = Box<dyn std::error::Error + Send + Sync>;
type HandlerResult = Result<(), HandlerError>;

/// Splits a handler outcome into the notice to answer with and the error to
/// propagate afterwards. A failed handler still gets an answer.
fn answer_for<E>(outcome: Result<Option<Notice>, E>) -> (Option<Notice>, Option<E>) {
    match outcome {
        Ok(notice) => (notice, None),
        Err(err) => (
            Some(Notice::alert("⚠️ Something went wrong. Please try again.")),
            Some(err),
        ),
    }
}

pub async fn callback_handler(
    q: CallbackQuery,
    bot: Bot,
    dialogue: MyDialogue,
    service: WordService,
) -> HandlerResult {
    let Some(message) = q.message.clone() else {
        bot.answer_callback_query(q.id).await?;
        return Ok(());
    };
    let chat_id = message.chat.id;
    let user_id = q.from.id;
    let data = q.data.clone().unwrap_or_default();

    log::info!(
        "[CALLBACK] Data: '{}' from ChatID: {} UserID: {}",
        data,
        chat_id,
        user_id
    );

    let state = dialogue.get().await?.unwrap_or_default();
    if state.is_held_by_other(user_id) {
        log::warn!(
            "[CALLBACK] UserID: {} pressed a button held by another user in ChatID: {}",
            user_id,
            chat_id
        );
        bot.answer_callback_query(q.id)
            .text("Someone else is using this menu. Send /start to open your own.")
            .show_alert(true)
            .await?;
        return Ok(());
    }

    let outcome = if admin::is_admin_callback(&data) {
        admin::handle_admin_callback(
            &bot, &dialogue, &service, chat_id, user_id, message.id, &data, state,
        )
        .await
    } else {
        collections::handle_collection_callback(
            &bot, &dialogue, &service, chat_id, user_id, message.id, &data, state,
        )
        .await
    };

    let (notice, failure) = answer_for(outcome);
    let mut answer = bot.answer_callback_query(q.id);
    if let Some(notice) = notice {
        answer = answer.text(notice.text).show_alert(notice.alert);
    }
    let answered = answer.await;

    if let Some(err) = failure {
        log::error!("[CALLBACK] '{}' failed in ChatID: {}: {}", data, chat_id, err);
        return Err(err);
    }
    answered?;
    Ok(())
}
