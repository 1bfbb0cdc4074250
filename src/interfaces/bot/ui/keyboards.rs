use std::ops::Range;

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::application::words::CollectionSummary;

use super::menu::short_title;

pub const ITEMS_PER_PAGE: usize = 8;

pub const CB_MAIN_MENU: &str = "main_menu";
pub const CB_CREATE: &str = "col_create";
pub const CB_CREATE_CONFIRM: &str = "col_create_confirm";
pub const CB_ADD_PREFIX: &str = "col_add:";
pub const CB_PAGE_PREFIX: &str = "col_page:";
pub const CB_ADMIN: &str = "adm_zone";
pub const CB_ADMIN_SELECT_PREFIX: &str = "adm_sel:";
pub const CB_ADMIN_PAGE_PREFIX: &str = "adm_page:";
pub const CB_ADMIN_PANEL: &str = "adm_panel";
pub const CB_ADMIN_VIEW: &str = "adm_view";
pub const CB_ADMIN_DELETE: &str = "adm_del";
pub const CB_ADMIN_DELETE_CONFIRM: &str = "adm_del_confirm";

pub fn page_count(len: usize) -> usize {
    len.div_ceil(ITEMS_PER_PAGE).max(1)
}

/// Index range shown on `page`, clamped to the last page.
pub fn page_range(len: usize, page: usize) -> Range<usize> {
    let page = page.min(page_count(len) - 1);
    let start = page * ITEMS_PER_PAGE;
    let end = (start + ITEMS_PER_PAGE).min(len);
    start..end
}

pub fn parse_indexed(data: &str, prefix: &str) -> Option<usize> {
    data.strip_prefix(prefix)?.parse::<usize>().ok()
}

fn nav_row(prefix: &str, len: usize, page: usize) -> Vec<InlineKeyboardButton> {
    let mut row = Vec::new();
    if page > 0 {
        row.push(InlineKeyboardButton::callback(
            "< Prev",
            format!("{}{}", prefix, page - 1),
        ));
    }
    if page + 1 < page_count(len) {
        row.push(InlineKeyboardButton::callback(
            "Next >",
            format!("{}{}", prefix, page + 1),
        ));
    }
    row
}

pub fn collections_menu_keyboard(
    summaries: &[CollectionSummary],
    page: usize,
) -> InlineKeyboardMarkup {
    let mut buttons: Vec<Vec<InlineKeyboardButton>> = Vec::new();
    let range = page_range(summaries.len(), page);
    let offset = range.start;

    for (chunk_index, chunk) in summaries[range].chunks(2).enumerate() {
        let row = chunk
            .iter()
            .enumerate()
            .map(|(i, summary)| {
                let index = offset + chunk_index * 2 + i;
                InlineKeyboardButton::callback(
                    format!("➕ {} ({})", short_title(&summary.name), summary.word_count),
                    format!("{}{}", CB_ADD_PREFIX, index),
                )
            })
            .collect();
        buttons.push(row);
    }

    let nav = nav_row(CB_PAGE_PREFIX, summaries.len(), page);
    if !nav.is_empty() {
        buttons.push(nav);
    }

    buttons.push(vec![
        InlineKeyboardButton::callback("🆕 Create Collection", CB_CREATE),
        InlineKeyboardButton::callback("👑 Admin Zone", CB_ADMIN),
    ]);
    InlineKeyboardMarkup::new(buttons)
}

pub fn create_confirmation_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![InlineKeyboardButton::callback(
            "✅ I'm sure, create it",
            CB_CREATE_CONFIRM,
        )],
        vec![InlineKeyboardButton::callback("❌ Cancel", CB_MAIN_MENU)],
    ])
}

pub fn admin_select_keyboard(collections: &[String], page: usize) -> InlineKeyboardMarkup {
    let mut buttons: Vec<Vec<InlineKeyboardButton>> = Vec::new();
    let range = page_range(collections.len(), page);

    for index in range {
        buttons.push(vec![InlineKeyboardButton::callback(
            short_title(&collections[index]),
            format!("{}{}", CB_ADMIN_SELECT_PREFIX, index),
        )]);
    }

    let nav = nav_row(CB_ADMIN_PAGE_PREFIX, collections.len(), page);
    if !nav.is_empty() {
        buttons.push(nav);
    }

    buttons.push(vec![InlineKeyboardButton::callback("← Back", CB_MAIN_MENU)]);
    InlineKeyboardMarkup::new(buttons)
}

pub fn admin_panel_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![InlineKeyboardButton::callback(
            "📋 View Words as List",
            CB_ADMIN_VIEW,
        )],
        vec![InlineKeyboardButton::callback(
            "🗑️ Delete Collection",
            CB_ADMIN_DELETE,
        )],
        vec![InlineKeyboardButton::callback("← Back", CB_MAIN_MENU)],
    ])
}

pub fn delete_confirmation_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![InlineKeyboardButton::callback(
            "🗑️ Delete Collection Permanently",
            CB_ADMIN_DELETE_CONFIRM,
        )],
        vec![InlineKeyboardButton::callback("❌ Cancel", CB_ADMIN_PANEL)],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use teloxide::types::InlineKeyboardButtonKind;

    fn callback_data(button: &InlineKeyboardButton) -> &str {
        match &button.kind {
            InlineKeyboardButtonKind::CallbackData(data) => data,
            other => panic!("unexpected button kind: {:?}", other),
        }
    }

    fn summaries(n: usize) -> Vec<CollectionSummary> {
        (0..n)
            .map(|i| CollectionSummary {
                name: format!("set {}", i),
                word_count: i,
            })
            .collect()
    }

    #[test]
    fn page_range_clamps() {
        assert_eq!(page_range(0, 0), 0..0);
        assert_eq!(page_range(3, 0), 0..3);
        assert_eq!(page_range(20, 1), 8..16);
        assert_eq!(page_range(20, 2), 16..20);
        assert_eq!(page_range(20, 9), 16..20);
    }

    #[test]
    fn parse_indexed_requires_prefix_and_number() {
        assert_eq!(parse_indexed("col_add:12", CB_ADD_PREFIX), Some(12));
        assert_eq!(parse_indexed("col_add:x", CB_ADD_PREFIX), None);
        assert_eq!(parse_indexed("adm_sel:1", CB_ADD_PREFIX), None);
    }

    #[test]
    fn menu_buttons_use_absolute_indices() {
        let markup = collections_menu_keyboard(&summaries(10), 1);
        let rows = &markup.inline_keyboard;

        assert_eq!(rows[0].len(), 2);
        assert_eq!(rows[0][0].text, "➕ Set 8 (8)");
        assert_eq!(callback_data(&rows[0][0]), "col_add:8");
        assert_eq!(callback_data(&rows[0][1]), "col_add:9");

        assert_eq!(callback_data(&rows[1][0]), "col_page:0");
        assert_eq!(rows[1].len(), 1);

        let last = rows.last().unwrap();
        assert_eq!(callback_data(&last[0]), CB_CREATE);
        assert_eq!(callback_data(&last[1]), CB_ADMIN);
    }

    #[test]
    fn empty_menu_still_offers_create_and_admin() {
        let markup = collections_menu_keyboard(&[], 0);
        assert_eq!(markup.inline_keyboard.len(), 1);
    }

    #[test]
    fn callback_data_fits_telegram_limit() {
        let markup = collections_menu_keyboard(&summaries(3), 0);
        for row in &markup.inline_keyboard {
            for button in row {
                assert!(callback_data(button).len() <= 64);
            }
        }
    }

    #[test]
    fn admin_select_lists_titles() {
        let names = vec!["video games".to_string(), "disney-movies".to_string()];
        let markup = admin_select_keyboard(&names, 0);
        let rows = &markup.inline_keyboard;
        assert_eq!(rows[0][0].text, "Video Games");
        assert_eq!(callback_data(&rows[1][0]), "adm_sel:1");
        assert_eq!(callback_data(&rows[2][0]), CB_MAIN_MENU);
    }
}
