use std::sync::Arc;

use futures::future::join_all;

use super::error::{StoreError, WordsError};
use super::normalize::{MAX_NAME_CHARS, MAX_WORD_CHARS, normalize_name, normalize_word};
use super::store::{CollectionStore, SetAddition};
use super::types::{AddWordOutcome, CollectionSummary, WordListing};
use crate::application::auth::AdminVerifier;

/// Data-access operations behind every bot action.
///
/// Reads degrade to empty results when the store is missing or failing; writes
/// surface `WordsError::Unavailable`. Nothing is retried.
#[derive(Clone)]
pub struct WordService {
    store: Option<Arc<dyn CollectionStore>>,
    verifier: Arc<dyn AdminVerifier>,
}

fn checked_name(name: &str) -> Result<String, WordsError> {
    let name = normalize_name(name);
    if name.is_empty() {
        return Err(WordsError::EmptyName);
    }
    if name.chars().count() > MAX_NAME_CHARS {
        return Err(WordsError::NameTooLong(MAX_NAME_CHARS));
    }
    Ok(name)
}

fn store_failure(operation: &str, err: StoreError) -> WordsError {
    log::error!("store.{} failed: {}", operation, err);
    WordsError::Unavailable(err)
}

impl WordService {
    pub fn new(store: Option<Arc<dyn CollectionStore>>, verifier: Arc<dyn AdminVerifier>) -> Self {
        Self { store, verifier }
    }

    pub fn is_connected(&self) -> bool {
        self.store.is_some()
    }

    fn store(&self) -> Result<&Arc<dyn CollectionStore>, StoreError> {
        self.store.as_ref().ok_or(StoreError::NotConfigured)
    }

    pub fn verify_admin_secret(&self, input: &str) -> bool {
        self.verifier.verify_admin_secret(input)
    }

    pub async fn create_collection(&self, name: &str) -> Result<String, WordsError> {
        let name = checked_name(name)?;
        let store = self.store()?;
        let inserted = store
            .insert_if_absent(&name)
            .await
            .map_err(|e| store_failure("insert_if_absent", e))?;
        if inserted {
            log::info!("collection.created name='{}'", name);
            Ok(name)
        } else {
            Err(WordsError::CollectionExists(name))
        }
    }

    pub async fn list_collections(&self) -> Vec<String> {
        let Ok(store) = self.store() else {
            return Vec::new();
        };
        match store.list_names().await {
            Ok(mut names) => {
                names.sort();
                names
            }
            Err(e) => {
                log::error!("store.list_names failed: {}", e);
                Vec::new()
            }
        }
    }

    pub async fn word_count(&self, name: &str) -> usize {
        let name = normalize_name(name);
        let Ok(store) = self.store() else {
            return 0;
        };
        if name.is_empty() {
            return 0;
        }
        match store.word_count(&name).await {
            Ok(count) => count,
            Err(e) => {
                log::error!("store.word_count failed for '{}': {}", name, e);
                0
            }
        }
    }

    /// Every collection with its word count, in list order.
    pub async fn overview(&self) -> Vec<CollectionSummary> {
        let names = self.list_collections().await;
        let counts = join_all(names.iter().map(|name| self.word_count(name))).await;
        names
            .into_iter()
            .zip(counts)
            .map(|(name, word_count)| CollectionSummary { name, word_count })
            .collect()
    }

    pub async fn add_word(&self, name: &str, word: &str) -> Result<AddWordOutcome, WordsError> {
        let word = normalize_word(word);
        if word.is_empty() {
            return Err(WordsError::EmptyWord);
        }
        if word.chars().count() > MAX_WORD_CHARS {
            return Err(WordsError::WordTooLong(MAX_WORD_CHARS));
        }
        let name = checked_name(name)?;
        let store = self.store()?;
        let addition = store
            .add_to_set(&name, &word)
            .await
            .map_err(|e| store_failure("add_to_set", e))?;
        match addition {
            SetAddition::Added => {
                log::info!("word.added collection='{}' word='{}'", name, word);
                Ok(AddWordOutcome::Added(word))
            }
            SetAddition::AlreadyPresent => Ok(AddWordOutcome::AlreadyPresent(word)),
            SetAddition::MissingCollection => Err(WordsError::CollectionMissing(name)),
        }
    }

    /// Removing a collection that does not exist is not an error.
    pub async fn delete_collection(&self, name: &str) -> Result<(), WordsError> {
        let name = normalize_name(name);
        if name.is_empty() {
            return Err(WordsError::EmptyName);
        }
        let store = self.store()?;
        store
            .delete_one(&name)
            .await
            .map_err(|e| store_failure("delete_one", e))?;
        log::info!("collection.deleted name='{}'", name);
        Ok(())
    }

    pub async fn view_words(&self, name: &str, password: &str) -> Result<WordListing, WordsError> {
        if !self.verify_admin_secret(password) {
            log::warn!("view_words rejected: incorrect admin password");
            return Err(WordsError::Unauthorized);
        }
        let name = normalize_name(name);
        let store = self.store()?;
        let found = store
            .find_one(&name)
            .await
            .map_err(|e| store_failure("find_one", e))?;
        Ok(match found {
            None => WordListing::Missing(name),
            Some(collection) if collection.words.is_empty() => WordListing::Empty(name),
            Some(collection) => WordListing::Words(collection.sorted_words()),
        })
    }
}
