use crate::application::words::{
    CollectionSummary, WordListing, display_title, truncate_chars,
};

use super::keyboards::{page_count, page_range};

/// Telegram rejects messages above this many characters.
pub const MESSAGE_MAX_CHARS: usize = 4096;
/// Budget for the escaped words inside one listing code block.
pub const LISTING_CHUNK_CHARS: usize = 3500;
/// Collection titles are cut to this length wherever they are echoed back.
pub const TITLE_MAX_CHARS: usize = 40;

/// Display title cut down for menus, buttons and notices.
pub fn short_title(name: &str) -> String {
    truncate_chars(&display_title(name), TITLE_MAX_CHARS)
}

pub fn escape_markdown(text: &str) -> String {
    text.replace("\\", "\\\\")
        .replace("_", "\\_")
        .replace("*", "\\*")
        .replace("[", "\\[")
        .replace("]", "\\]")
        .replace("(", "\\(")
        .replace(")", "\\)")
        .replace("~", "\\~")
        .replace("`", "\\`")
        .replace(">", "\\>")
        .replace("#", "\\#")
        .replace("+", "\\+")
        .replace("-", "\\-")
        .replace("=", "\\=")
        .replace("|", "\\|")
        .replace("{", "\\{")
        .replace("}", "\\}")
        .replace(".", "\\.")
        .replace("!", "\\!")
}

/// Escaping for text inside a MarkdownV2 ``` block.
pub fn escape_code(text: &str) -> String {
    text.replace("\\", "\\\\").replace("`", "\\`")
}

pub fn word_count_label(count: usize) -> String {
    if count == 1 {
        "1 word".to_string()
    } else {
        format!("{} words", count)
    }
}

pub fn collections_menu_text(summaries: &[CollectionSummary], page: usize, connected: bool) -> String {
    let mut text = "🎨 *Skribbl\\.io Word Collector*\n".to_string();
    text.push_str(&format!(
        "_{}_\n\n",
        escape_markdown(
            "A simple tool to collaboratively create custom word lists for games like Skribbl.io."
        )
    ));

    if !connected {
        text.push_str(&escape_markdown(
            "⚠️ The database is unavailable. Lists are empty and changes will fail.",
        ));
        text.push_str("\n\n");
    }

    text.push_str("*Existing Collections*\n");
    if summaries.is_empty() {
        text.push_str(&escape_markdown(
            "No collections found. Create one below to get started!",
        ));
        return text;
    }

    for summary in &summaries[page_range(summaries.len(), page)] {
        text.push_str(&format!(
            "• *{}* {}\n",
            escape_markdown(&short_title(&summary.name)),
            escape_markdown(&format!("({})", word_count_label(summary.word_count)))
        ));
    }

    let pages = page_count(summaries.len());
    if pages > 1 {
        text.push_str(&escape_markdown(&format!(
            "\nPage {} of {}",
            page.min(pages - 1) + 1,
            pages
        )));
        text.push('\n');
    }
    text.push_str(&escape_markdown("\nTap a collection to add a word."));
    text
}

pub fn create_confirmation_text(name: &str) -> String {
    format!(
        "🆕 *Create a New Collection*\n\n{}",
        escape_markdown(&format!(
            "Create the collection '{}'? Confirm below if you're sure.",
            short_title(name)
        ))
    )
}

pub fn admin_select_text() -> String {
    format!(
        "👑 *Admin Zone*\n\n{}",
        escape_markdown("Select a collection to manage:")
    )
}

pub fn admin_panel_text(collection: &str, word_count: usize) -> String {
    format!(
        "👑 *Admin Zone \\- {}*\n\n{}",
        escape_markdown(&short_title(collection)),
        escape_markdown(&format!(
            "{} in this collection. Choose an action.",
            word_count_label(word_count)
        ))
    )
}

pub fn delete_confirmation_text(collection: &str) -> String {
    format!(
        "🗑️ *Delete Collection*\n\n{}",
        escape_markdown(&format!(
            "Confirm deletion of '{}'. This cannot be undone.",
            short_title(collection)
        ))
    )
}

/// Packs words into comma-separated code-block bodies of at most `limit`
/// characters, measured after code escaping. Breaks only between words unless
/// a single word is longer than `limit`.
pub fn chunk_word_list(words: &[String], limit: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in words {
        let escaped = escape_code(word);
        let word_len = escaped.chars().count();
        let needed = if current.is_empty() { word_len } else { word_len + 2 };

        if current_len + needed > limit && !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }

        if word_len > limit {
            for c in word.chars() {
                let piece = escape_code(&c.to_string());
                let piece_len = piece.chars().count();
                if current_len + piece_len > limit {
                    chunks.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                current.push_str(&piece);
                current_len += piece_len;
            }
            continue;
        }

        if !current.is_empty() {
            current.push_str(", ");
            current_len += 2;
        }
        current.push_str(&escaped);
        current_len += word_len;
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

/// MarkdownV2 messages for the admin "view words" action.
pub fn word_listing_messages(collection: &str, listing: &WordListing) -> Vec<String> {
    match listing {
        WordListing::Words(words) => {
            let heading = format!(
                "📋 *{}* {}\n{}",
                escape_markdown(&short_title(collection)),
                escape_markdown(&format!("({})", word_count_label(words.len()))),
                escape_markdown("Copy words from here:")
            );
            let mut messages = vec![heading];
            messages.extend(
                chunk_word_list(words, LISTING_CHUNK_CHARS)
                    .into_iter()
                    .map(|chunk| format!("```\n{}\n```", chunk)),
            );
            messages
        }
        WordListing::Empty(_) | WordListing::Missing(_) => {
            let notice = truncate_chars(&format!("ℹ️ {}", listing), LISTING_CHUNK_CHARS);
            vec![escape_markdown(&notice)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markdown_specials() {
        assert_eq!(escape_markdown("a.b-c!"), "a\\.b\\-c\\!");
        assert_eq!(escape_markdown("(x)"), "\\(x\\)");
    }

    #[test]
    fn escapes_code_blocks() {
        assert_eq!(escape_code("a`b\\c"), "a\\`b\\\\c");
    }

    #[test]
    fn word_count_labels() {
        assert_eq!(word_count_label(0), "0 words");
        assert_eq!(word_count_label(1), "1 word");
        assert_eq!(word_count_label(7), "7 words");
    }

    #[test]
    fn menu_text_lists_titles_and_counts() {
        let summaries = vec![
            CollectionSummary {
                name: "video games".into(),
                word_count: 2,
            },
            CollectionSummary {
                name: "science".into(),
                word_count: 1,
            },
        ];
        let text = collections_menu_text(&summaries, 0, true);
        assert!(text.contains("*Video Games* \\(2 words\\)"));
        assert!(text.contains("*Science* \\(1 word\\)"));
        assert!(!text.contains("unavailable"));
        assert!(!text.contains("Page"));
    }

    #[test]
    fn menu_text_for_empty_and_offline() {
        let text = collections_menu_text(&[], 0, false);
        assert!(text.contains("No collections found"));
        assert!(text.contains("database is unavailable"));
    }

    #[test]
    fn menu_text_shows_page_footer() {
        let summaries: Vec<CollectionSummary> = (0..10)
            .map(|i| CollectionSummary {
                name: format!("c{}", i),
                word_count: 0,
            })
            .collect();
        let text = collections_menu_text(&summaries, 1, true);
        assert!(text.contains("Page 2 of 2"));
        assert!(text.contains("*C8*"));
        assert!(!text.contains("*C0*"));
    }

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn chunking_breaks_between_words() {
        let chunks = chunk_word_list(&words(&["alpha", "beta", "gamma", "delta"]), 12);
        assert_eq!(chunks, vec!["alpha, beta", "gamma, delta"]);
    }

    #[test]
    fn chunking_keeps_short_lists_whole() {
        assert_eq!(
            chunk_word_list(&words(&["luigi", "mario"]), 100),
            vec!["luigi, mario"]
        );
    }

    #[test]
    fn chunking_splits_oversized_words() {
        let chunks = chunk_word_list(&words(&["abcdefgh", "ij"]), 3);
        assert_eq!(chunks, vec!["abc", "def", "gh", "ij"]);
    }

    #[test]
    fn chunking_measures_escaped_length() {
        let chunks = chunk_word_list(&words(&["a\\b", "c`d"]), 5);
        assert_eq!(chunks, vec!["a\\\\b", "c\\`d"]);
        // Escape pairs are never split across chunks.
        let chunks = chunk_word_list(&words(&["\\\\\\"]), 4);
        assert_eq!(chunks, vec!["\\\\\\\\", "\\\\"]);
    }

    #[test]
    fn long_names_keep_the_menu_under_the_message_limit() {
        let summaries: Vec<CollectionSummary> = (0..20)
            .map(|i| CollectionSummary {
                name: format!("{}{}", "a.".repeat(1500), i),
                word_count: 123_456,
            })
            .collect();
        let text = collections_menu_text(&summaries, 0, false);
        assert!(text.chars().count() <= MESSAGE_MAX_CHARS);

        let long = "x-".repeat(2000);
        for text in [
            create_confirmation_text(&long),
            admin_panel_text(&long, 3),
            delete_confirmation_text(&long),
        ] {
            assert!(text.chars().count() <= MESSAGE_MAX_CHARS);
        }
    }

    #[test]
    fn backslash_heavy_words_stay_under_the_message_limit() {
        let listing = WordListing::Words(vec!["\\".repeat(3000), "mario".into()]);
        let messages = word_listing_messages("art", &listing);
        assert!(messages.len() > 2);
        for message in &messages {
            assert!(message.chars().count() <= MESSAGE_MAX_CHARS);
        }
    }

    #[test]
    fn short_title_truncates() {
        assert_eq!(short_title("video games"), "Video Games");
        let title = short_title(&"z".repeat(100));
        assert_eq!(title.chars().count(), TITLE_MAX_CHARS);
        assert!(title.ends_with('…'));
    }

    #[test]
    fn listing_messages_wrap_words_in_code_block() {
        let listing = WordListing::Words(vec!["luigi".into(), "mario".into()]);
        let messages = word_listing_messages("video games", &listing);
        assert_eq!(messages.len(), 2);
        assert!(messages[0].contains("*Video Games*"));
        assert_eq!(messages[1], "```\nluigi, mario\n```");
    }

    #[test]
    fn empty_listing_is_a_single_notice() {
        let messages = word_listing_messages("art", &WordListing::Empty("art".into()));
        assert_eq!(messages, vec!["ℹ️ The 'art' collection is empty\\."]);
    }
}
