use async_trait::async_trait;

use super::error::StoreResult;
use super::types::Collection;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SetAddition {
    Added,
    AlreadyPresent,
    MissingCollection,
}

/// Primitive document operations the word service is built on. Every method is
/// expected to be atomic on its own; callers never chain them into transactions.
#[async_trait]
pub trait CollectionStore: Send + Sync {
    async fn find_one(&self, name: &str) -> StoreResult<Option<Collection>>;

    /// Inserts an empty collection. Returns `false` without touching anything
    /// when the identifier is already taken.
    async fn insert_if_absent(&self, name: &str) -> StoreResult<bool>;

    async fn add_to_set(&self, name: &str, word: &str) -> StoreResult<SetAddition>;

    async fn delete_one(&self, name: &str) -> StoreResult<()>;

    /// All identifiers, in no particular order.
    async fn list_names(&self) -> StoreResult<Vec<String>>;

    async fn word_count(&self, name: &str) -> StoreResult<usize>;
}
