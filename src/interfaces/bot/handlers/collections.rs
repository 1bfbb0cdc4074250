use teloxide::prelude::*;
use teloxide::types::{MessageId, ParseMode, UserId};

use crate::application::words::{
    CollectionSummary, ErrorKind, MAX_NAME_CHARS, WordService, normalize_name,
};
use crate::interfaces::bot::{
    BotSettings, CB_ADD_PREFIX, CB_CREATE, CB_CREATE_CONFIRM, CB_MAIN_MENU, CB_PAGE_PREFIX,
    Notice, State, collections_menu_keyboard, collections_menu_text, create_confirmation_keyboard,
    create_confirmation_text, edit_menu, page_count, parse_indexed, send_cleanup_msg, short_title,
};

type MyDialogue = Dialogue<State, teloxide::dispatching::dialogue::InMemStorage<State>>;
type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;
type CallbackResult = Result<Option<Notice>, Box<dyn std::error::Error + Send + Sync>>;

fn names_of(summaries: &[CollectionSummary]) -> Vec<String> {
    summaries.iter().map(|summary| summary.name.clone()).collect()
}

pub async fn send_collections_menu(
    bot: &Bot,
    chat_id: ChatId,
    service: &WordService,
    dialogue: &MyDialogue,
) -> HandlerResult {
    let summaries = service.overview().await;
    bot.send_message(
        chat_id,
        collections_menu_text(&summaries, 0, service.is_connected()),
    )
    .parse_mode(ParseMode::MarkdownV2)
    .reply_markup(collections_menu_keyboard(&summaries, 0))
    .await?;
    dialogue
        .update(State::CollectionsMenu {
            collections: names_of(&summaries),
            page: 0,
        })
        .await?;
    Ok(())
}

/// Re-fetches every collection and redraws the menu in place.
pub async fn render_collections_menu(
    bot: &Bot,
    chat_id: ChatId,
    message_id: MessageId,
    service: &WordService,
    dialogue: &MyDialogue,
    page: usize,
) -> HandlerResult {
    let summaries = service.overview().await;
    let page = page.min(page_count(summaries.len()) - 1);
    edit_menu(
        bot,
        chat_id,
        message_id,
        collections_menu_text(&summaries, page, service.is_connected()),
        collections_menu_keyboard(&summaries, page),
    )
    .await?;
    dialogue
        .update(State::CollectionsMenu {
            collections: names_of(&summaries),
            page,
        })
        .await?;
    Ok(())
}

pub async fn stale_menu(
    bot: &Bot,
    chat_id: ChatId,
    message_id: MessageId,
    service: &WordService,
    dialogue: &MyDialogue,
) -> CallbackResult {
    render_collections_menu(bot, chat_id, message_id, service, dialogue, 0).await?;
    Ok(Some(Notice::toast("This menu was out of date and has been refreshed.")))
}

pub async fn handle_collection_callback(
    bot: &Bot,
    dialogue: &MyDialogue,
    service: &WordService,
    chat_id: ChatId,
    user_id: UserId,
    message_id: MessageId,
    data: &str,
    state: State,
) -> CallbackResult {
    if data == CB_MAIN_MENU {
        render_collections_menu(bot, chat_id, message_id, service, dialogue, 0).await?;
        return Ok(None);
    }

    if let Some(page) = parse_indexed(data, CB_PAGE_PREFIX) {
        render_collections_menu(bot, chat_id, message_id, service, dialogue, page).await?;
        return Ok(None);
    }

    if data == CB_CREATE {
        let prompt = bot
            .send_message(
                chat_id,
                "✏️ Enter new collection name (e.g., Video Games, Science, Disney Movies).",
            )
            .await?;
        dialogue
            .update(State::ReceiveCollectionName {
                owner: user_id,
                menu_message_id: message_id,
                prompt_message_id: prompt.id,
            })
            .await?;
        return Ok(None);
    }

    if data == CB_CREATE_CONFIRM {
        let State::ConfirmCreateCollection { name, .. } = state else {
            return stale_menu(bot, chat_id, message_id, service, dialogue).await;
        };
        let notice = match service.create_collection(&name).await {
            Ok(id) => Notice::toast(format!(
                "✅ Collection '{}' was created successfully!",
                short_title(&id)
            )),
            Err(err) if err.kind() == ErrorKind::Unavailable => Notice::alert(err.user_message()),
            Err(err) => Notice::alert(format!("❌ {}", err.user_message())),
        };
        render_collections_menu(bot, chat_id, message_id, service, dialogue, 0).await?;
        return Ok(Some(notice));
    }

    if let Some(index) = parse_indexed(data, CB_ADD_PREFIX) {
        let collection = match &state {
            State::CollectionsMenu { collections, .. } => collections.get(index).cloned(),
            _ => None,
        };
        let Some(collection) = collection else {
            return stale_menu(bot, chat_id, message_id, service, dialogue).await;
        };
        let prompt = bot
            .send_message(
                chat_id,
                format!(
                    "✏️ Type a word to add to '{}'.",
                    short_title(&collection)
                ),
            )
            .await?;
        dialogue
            .update(State::ReceiveWord {
                owner: user_id,
                collection,
                menu_message_id: message_id,
                prompt_message_id: prompt.id,
            })
            .await?;
        return Ok(None);
    }

    log::warn!("Unhandled callback data '{}' from ChatID: {}", data, chat_id);
    Ok(None)
}

pub async fn receive_collection_name(
    bot: &Bot,
    msg: &Message,
    dialogue: &MyDialogue,
    service: &WordService,
    settings: BotSettings,
    owner: UserId,
    text: &str,
    menu_message_id: MessageId,
    prompt_message_id: MessageId,
) -> HandlerResult {
    let chat_id = msg.chat.id;
    bot.delete_message(chat_id, prompt_message_id).await.ok();
    bot.delete_message(chat_id, msg.id).await.ok();

    let name = normalize_name(text);
    let problem = if name.is_empty() {
        Some("⚠️ Please enter a collection name.".to_string())
    } else if name.chars().count() > MAX_NAME_CHARS {
        Some(format!(
            "⚠️ Collection names can be at most {} characters.",
            MAX_NAME_CHARS
        ))
    } else {
        None
    };
    if let Some(problem) = problem {
        send_cleanup_msg(bot, chat_id, &problem, settings.toast_ttl).await?;
        render_collections_menu(bot, chat_id, menu_message_id, service, dialogue, 0).await?;
        return Ok(());
    }

    edit_menu(
        bot,
        chat_id,
        menu_message_id,
        create_confirmation_text(&name),
        create_confirmation_keyboard(),
    )
    .await?;
    dialogue
        .update(State::ConfirmCreateCollection {
            owner,
            name: text.trim().to_string(),
        })
        .await?;
    Ok(())
}

pub async fn receive_word(
    bot: &Bot,
    msg: &Message,
    dialogue: &MyDialogue,
    service: &WordService,
    settings: BotSettings,
    text: &str,
    collection: &str,
    menu_message_id: MessageId,
    prompt_message_id: MessageId,
) -> HandlerResult {
    let chat_id = msg.chat.id;
    bot.delete_message(chat_id, prompt_message_id).await.ok();
    bot.delete_message(chat_id, msg.id).await.ok();

    let status = match service.add_word(collection, text).await {
        Ok(outcome) if outcome.is_added() => format!("✅ {}", outcome),
        Ok(outcome) => format!("ℹ️ {}", outcome),
        Err(err) => format!("⚠️ {}", err.user_message()),
    };
    send_cleanup_msg(bot, chat_id, &status, settings.toast_ttl).await?;

    render_collections_menu(bot, chat_id, menu_message_id, service, dialogue, 0).await?;
    Ok(())
}
