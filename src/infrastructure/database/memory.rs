use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::application::words::{Collection, CollectionStore, SetAddition, StoreResult};

/// Process-local store used by the test suite.
#[derive(Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<String, HashSet<String>>>,
}

#[async_trait]
impl CollectionStore for MemoryStore {
    async fn find_one(&self, name: &str) -> StoreResult<Option<Collection>> {
        let collections = self.collections.lock().await;
        Ok(collections.get(name).map(|words| Collection {
            words: words.clone(),
        }))
    }

    async fn insert_if_absent(&self, name: &str) -> StoreResult<bool> {
        let mut collections = self.collections.lock().await;
        if collections.contains_key(name) {
            return Ok(false);
        }
        collections.insert(name.to_string(), HashSet::new());
        Ok(true)
    }

    async fn add_to_set(&self, name: &str, word: &str) -> StoreResult<SetAddition> {
        let mut collections = self.collections.lock().await;
        Ok(match collections.get_mut(name) {
            None => SetAddition::MissingCollection,
            Some(words) => {
                if words.insert(word.to_string()) {
                    SetAddition::Added
                } else {
                    SetAddition::AlreadyPresent
                }
            }
        })
    }

    async fn delete_one(&self, name: &str) -> StoreResult<()> {
        self.collections.lock().await.remove(name);
        Ok(())
    }

    async fn list_names(&self) -> StoreResult<Vec<String>> {
        Ok(self.collections.lock().await.keys().cloned().collect())
    }

    async fn word_count(&self, name: &str) -> StoreResult<usize> {
        Ok(self
            .collections
            .lock()
            .await
            .get(name)
            .map(HashSet::len)
            .unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_if_absent_keeps_existing_words() {
        let store = MemoryStore::default();
        assert!(store.insert_if_absent("art").await.unwrap());
        assert_eq!(
            store.add_to_set("art", "brush").await.unwrap(),
            SetAddition::Added
        );

        assert!(!store.insert_if_absent("art").await.unwrap());
        assert_eq!(store.word_count("art").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn add_to_set_reports_each_case() {
        let store = MemoryStore::default();
        assert_eq!(
            store.add_to_set("art", "brush").await.unwrap(),
            SetAddition::MissingCollection
        );
        store.insert_if_absent("art").await.unwrap();
        assert_eq!(
            store.add_to_set("art", "brush").await.unwrap(),
            SetAddition::Added
        );
        assert_eq!(
            store.add_to_set("art", "brush").await.unwrap(),
            SetAddition::AlreadyPresent
        );
    }
}
