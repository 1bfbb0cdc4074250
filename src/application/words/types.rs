use std::collections::HashSet;
use std::fmt;

use super::normalize::capitalize;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Collection {
    pub words: HashSet<String>,
}

impl Collection {
    /// Words ordered case-insensitively, ties broken by the raw value so output is stable.
    pub fn sorted_words(&self) -> Vec<String> {
        let mut words: Vec<String> = self.words.iter().cloned().collect();
        words.sort_by(|a, b| {
            a.to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b))
        });
        words
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectionSummary {
    pub name: String,
    pub word_count: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AddWordOutcome {
    Added(String),
    AlreadyPresent(String),
}

impl AddWordOutcome {
    pub fn is_added(&self) -> bool {
        matches!(self, AddWordOutcome::Added(_))
    }
}

impl fmt::Display for AddWordOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddWordOutcome::Added(word) => write!(f, "Success! Added '{}'.", capitalize(word)),
            AddWordOutcome::AlreadyPresent(word) => {
                write!(f, "'{}' is already in this collection.", capitalize(word))
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WordListing {
    Words(Vec<String>),
    Empty(String),
    Missing(String),
}

impl fmt::Display for WordListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordListing::Words(words) => write!(f, "{}", words.join(", ")),
            WordListing::Empty(name) => write!(f, "The '{}' collection is empty.", name),
            WordListing::Missing(name) => write!(f, "Collection '{}' does not exist.", name),
        }
    }
}
