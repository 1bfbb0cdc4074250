use teloxide::prelude::*;
use teloxide::types::{MessageId, ParseMode, UserId};

use crate::application::words::WordService;
use crate::interfaces::bot::{
    BotSettings, CB_ADMIN, CB_ADMIN_DELETE, CB_ADMIN_DELETE_CONFIRM, CB_ADMIN_PAGE_PREFIX,
    CB_ADMIN_PANEL, CB_ADMIN_SELECT_PREFIX, CB_ADMIN_VIEW, Notice, State, admin_panel_keyboard,
    admin_panel_text, admin_select_keyboard, admin_select_text, delete_confirmation_keyboard,
    delete_confirmation_text, edit_menu, page_count, parse_indexed, send_cleanup_msg, short_title,
    word_listing_messages,
};

use super::collections::{render_collections_menu, stale_menu};

type MyDialogue = Dialogue<State, teloxide::dispatching::dialogue::InMemStorage<State>>;
type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;
type CallbackResult = Result<Option<Notice>, Box<dyn std::error::Error + Send + Sync>>;

pub fn is_admin_callback(data: &str) -> bool {
    data.starts_with("adm_")
}

async fn show_admin_select(
    bot: &Bot,
    chat_id: ChatId,
    message_id: MessageId,
    dialogue: &MyDialogue,
    collections: Vec<String>,
    page: usize,
) -> HandlerResult {
    let page = page.min(page_count(collections.len()) - 1);
    edit_menu(
        bot,
        chat_id,
        message_id,
        admin_select_text(),
        admin_select_keyboard(&collections, page),
    )
    .await?;
    dialogue
        .update(State::AdminSelectCollection { collections, page })
        .await?;
    Ok(())
}

async fn show_admin_panel(
    bot: &Bot,
    chat_id: ChatId,
    message_id: MessageId,
    dialogue: &MyDialogue,
    service: &WordService,
    owner: UserId,
    collection: String,
    password: String,
) -> HandlerResult {
    let word_count = service.word_count(&collection).await;
    edit_menu(
        bot,
        chat_id,
        message_id,
        admin_panel_text(&collection, word_count),
        admin_panel_keyboard(),
    )
    .await?;
    dialogue
        .update(State::AdminPanel {
            owner,
            collection,
            password,
        })
        .await?;
    Ok(())
}

pub async fn handle_admin_callback(
    bot: &Bot,
    dialogue: &MyDialogue,
    service: &WordService,
    chat_id: ChatId,
    user_id: UserId,
    message_id: MessageId,
    data: &str,
    state: State,
) -> CallbackResult {
    if data == CB_ADMIN {
        let collections = service.list_collections().await;
        if collections.is_empty() {
            return Ok(Some(Notice::alert("No collections to manage.")));
        }
        show_admin_select(bot, chat_id, message_id, dialogue, collections, 0).await?;
        return Ok(None);
    }

    if let Some(page) = parse_indexed(data, CB_ADMIN_PAGE_PREFIX) {
        let State::AdminSelectCollection { collections, .. } = state else {
            return stale_menu(bot, chat_id, message_id, service, dialogue).await;
        };
        show_admin_select(bot, chat_id, message_id, dialogue, collections, page).await?;
        return Ok(None);
    }

    if let Some(index) = parse_indexed(data, CB_ADMIN_SELECT_PREFIX) {
        let collection = match &state {
            State::AdminSelectCollection { collections, .. } => collections.get(index).cloned(),
            _ => None,
        };
        let Some(collection) = collection else {
            return stale_menu(bot, chat_id, message_id, service, dialogue).await;
        };
        let prompt = bot
            .send_message(
                chat_id,
                format!(
                    "🔑 Enter the admin password to manage '{}'. Your reply will be deleted.",
                    short_title(&collection)
                ),
            )
            .await?;
        dialogue
            .update(State::AdminReceivePassword {
                owner: user_id,
                collection,
                menu_message_id: message_id,
                prompt_message_id: prompt.id,
            })
            .await?;
        return Ok(None);
    }

    match (data, state) {
        (
            CB_ADMIN_PANEL,
            State::AdminConfirmDelete {
                owner,
                collection,
                password,
            },
        ) => {
            show_admin_panel(
                bot, chat_id, message_id, dialogue, service, owner, collection, password,
            )
            .await?;
            Ok(None)
        }
        (
            CB_ADMIN_VIEW,
            State::AdminPanel {
                collection,
                password,
                ..
            },
        ) => {
            match service.view_words(&collection, &password).await {
                Ok(listing) => {
                    for text in word_listing_messages(&collection, &listing) {
                        bot.send_message(chat_id, text)
                            .parse_mode(ParseMode::MarkdownV2)
                            .await?;
                    }
                    Ok(None)
                }
                Err(err) => Ok(Some(Notice::alert(err.user_message()))),
            }
        }
        (
            CB_ADMIN_DELETE,
            State::AdminPanel {
                owner,
                collection,
                password,
            },
        ) => {
            edit_menu(
                bot,
                chat_id,
                message_id,
                delete_confirmation_text(&collection),
                delete_confirmation_keyboard(),
            )
            .await?;
            dialogue
                .update(State::AdminConfirmDelete {
                    owner,
                    collection,
                    password,
                })
                .await?;
            Ok(None)
        }
        (
            CB_ADMIN_DELETE_CONFIRM,
            State::AdminConfirmDelete {
                collection,
                password,
                ..
            },
        ) => {
            if !service.verify_admin_secret(&password) {
                log::warn!("Delete of '{}' rejected: incorrect password", collection);
                return Ok(Some(Notice::alert("Incorrect password.")));
            }
            match service.delete_collection(&collection).await {
                Ok(()) => {
                    render_collections_menu(bot, chat_id, message_id, service, dialogue, 0)
                        .await?;
                    Ok(Some(Notice::toast(format!("Deleted '{}'.", short_title(&collection)))))
                }
                Err(err) => Ok(Some(Notice::alert(err.user_message()))),
            }
        }
        _ => stale_menu(bot, chat_id, message_id, service, dialogue).await,
    }
}

pub async fn receive_password(
    bot: &Bot,
    msg: &Message,
    dialogue: &MyDialogue,
    service: &WordService,
    settings: BotSettings,
    owner: UserId,
    text: &str,
    collection: &str,
    menu_message_id: MessageId,
    prompt_message_id: MessageId,
) -> HandlerResult {
    let chat_id = msg.chat.id;
    bot.delete_message(chat_id, prompt_message_id).await.ok();
    bot.delete_message(chat_id, msg.id).await.ok();

    if !service.verify_admin_secret(text) {
        log::warn!(
            "Admin password rejected for '{}' from ChatID: {}",
            collection,
            chat_id
        );
        send_cleanup_msg(bot, chat_id, "❌ Incorrect password.", settings.toast_ttl).await?;
        render_collections_menu(bot, chat_id, menu_message_id, service, dialogue, 0).await?;
        return Ok(());
    }

    show_admin_panel(
        bot,
        chat_id,
        menu_message_id,
        dialogue,
        service,
        owner,
        collection.to_string(),
        text.to_string(),
    )
    .await?;
    Ok(())
}
