use std::time::Duration;

use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardMarkup, MessageId, ParseMode};
use teloxide::{ApiError, RequestError};
use tokio::time::sleep;

use crate::application::words::truncate_chars;
use crate::interfaces::bot::escape_markdown;

/// `answerCallbackQuery` accepts at most this many characters.
pub const NOTICE_MAX_CHARS: usize = 200;

/// Text for the answer to a callback query: a toast, or a modal alert.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub alert: bool,
}

impl Notice {
    pub fn toast(text: impl AsRef<str>) -> Self {
        Self {
            text: truncate_chars(text.as_ref(), NOTICE_MAX_CHARS),
            alert: false,
        }
    }

    pub fn alert(text: impl AsRef<str>) -> Self {
        Self {
            text: truncate_chars(text.as_ref(), NOTICE_MAX_CHARS),
            alert: true,
        }
    }
}

/// Sends a short-lived message that deletes itself after `ttl`.
pub async fn send_cleanup_msg(
    bot: &Bot,
    chat_id: ChatId,
    text: &str,
    ttl: Duration,
) -> Result<(), RequestError> {
    let sanitized = escape_markdown(text);
    let sent = bot
        .send_message(chat_id, sanitized)
        .parse_mode(ParseMode::MarkdownV2)
        .await?;
    let bot_clone = bot.clone();
    let message_id = sent.id;
    tokio::spawn(async move {
        sleep(ttl).await;
        let _ = bot_clone.delete_message(chat_id, message_id).await;
    });
    Ok(())
}

/// Replaces a menu message in place. Re-rendering identical content is not an error.
pub async fn edit_menu(
    bot: &Bot,
    chat_id: ChatId,
    message_id: MessageId,
    text: String,
    keyboard: InlineKeyboardMarkup,
) -> Result<(), RequestError> {
    match bot
        .edit_message_text(chat_id, message_id, text)
        .parse_mode(ParseMode::MarkdownV2)
        .reply_markup(keyboard)
        .await
    {
        Ok(_) | Err(RequestError::Api(ApiError::MessageNotModified)) => Ok(()),
        Err(err) => Err(err),
    }
}
