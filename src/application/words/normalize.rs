/// Longest collection identifier accepted, in characters.
pub const MAX_NAME_CHARS: usize = 64;
/// Longest word accepted, in characters.
pub const MAX_WORD_CHARS: usize = 64;

/// Stored identifier of a collection: trimmed and lowercased.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

pub fn normalize_word(word: &str) -> String {
    word.trim().to_lowercase()
}

/// `video games` -> `Video Games`, `disney-movies` -> `Disney Movies`.
///
/// Every letter that follows a non-letter starts a new word, so
/// `rock'n'roll` becomes `Rock'N'Roll`.
pub fn display_title(name: &str) -> String {
    let mut title = String::with_capacity(name.len());
    let mut in_word = false;
    for c in name.chars().map(|c| if c == '-' { ' ' } else { c }) {
        if c.is_alphabetic() {
            if in_word {
                title.extend(c.to_lowercase());
            } else {
                title.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            title.push(c);
            in_word = false;
        }
    }
    title
}

pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Cuts `text` to at most `max_chars` characters, marking the cut with `…`.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_trimmed_and_lowercased() {
        assert_eq!(normalize_name("  Video Games "), "video games");
        assert_eq!(normalize_name("   "), "");
    }

    #[test]
    fn words_are_trimmed_and_lowercased() {
        assert_eq!(normalize_word(" MaRiO\t"), "mario");
        assert_eq!(normalize_word(""), "");
    }

    #[test]
    fn display_title_handles_dashes_and_spaces() {
        assert_eq!(display_title("video games"), "Video Games");
        assert_eq!(display_title("disney-movies"), "Disney Movies");
        assert_eq!(display_title("science"), "Science");
    }

    #[test]
    fn display_title_keeps_repeated_spaces() {
        assert_eq!(display_title("a  b"), "A  B");
    }

    #[test]
    fn display_title_starts_words_after_any_non_letter() {
        assert_eq!(display_title("rock'n'roll"), "Rock'N'Roll");
        assert_eq!(display_title("top 10s"), "Top 10S");
        assert_eq!(display_title("über-cool"), "Über Cool");
    }

    #[test]
    fn capitalize_only_touches_first_char() {
        assert_eq!(capitalize("mario kart"), "Mario kart");
        assert_eq!(capitalize("über"), "Über");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn truncate_chars_marks_the_cut() {
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("abcdef", 4), "abc…");
        assert_eq!(truncate_chars("ééééé", 3).chars().count(), 3);
    }
}
