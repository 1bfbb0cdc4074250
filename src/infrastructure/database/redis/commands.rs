use std::collections::HashSet;

use async_trait::async_trait;
use redis::AsyncCommands;

use super::client::RedisStore;
use crate::application::words::{
    Collection, CollectionStore, SetAddition, StoreError, StoreResult,
};

#[async_trait]
impl CollectionStore for RedisStore {
    async fn find_one(&self, name: &str) -> StoreResult<Option<Collection>> {
        let mut conn = self.get_conn().await?;
        let (exists, words): (bool, Vec<String>) = redis::pipe()
            .atomic()
            .sismember(self.keys.index(), name)
            .smembers(self.keys.words(name))
            .query_async(&mut conn)
            .await?;

        if !exists {
            return Ok(None);
        }
        Ok(Some(Collection {
            words: words.into_iter().collect::<HashSet<_>>(),
        }))
    }

    async fn insert_if_absent(&self, name: &str) -> StoreResult<bool> {
        let mut conn = self.get_conn().await?;
        let added: i64 = conn.sadd(self.keys.index(), name).await?;
        Ok(added == 1)
    }

    async fn add_to_set(&self, name: &str, word: &str) -> StoreResult<SetAddition> {
        let mut conn = self.get_conn().await?;
        let reply: i64 = self
            .add_word_script
            .key(self.keys.index())
            .key(self.keys.words(name))
            .arg(name)
            .arg(word)
            .invoke_async(&mut conn)
            .await?;

        match reply {
            -1 => Ok(SetAddition::MissingCollection),
            0 => Ok(SetAddition::AlreadyPresent),
            1 => Ok(SetAddition::Added),
            other => Err(StoreError::UnexpectedReply(format!(
                "add-word script returned {}",
                other
            ))),
        }
    }

    async fn delete_one(&self, name: &str) -> StoreResult<()> {
        let mut conn = self.get_conn().await?;
        let _: () = redis::pipe()
            .atomic()
            .srem(self.keys.index(), name)
            .ignore()
            .del(self.keys.words(name))
            .ignore()
            .query_async(&mut conn)
            .await?;
        Ok(())
    }

    async fn list_names(&self) -> StoreResult<Vec<String>> {
        let mut conn = self.get_conn().await?;
        let names: Vec<String> = conn.smembers(self.keys.index()).await?;
        Ok(names)
    }

    async fn word_count(&self, name: &str) -> StoreResult<usize> {
        let mut conn = self.get_conn().await?;
        let count: usize = conn.scard(self.keys.words(name)).await?;
        Ok(count)
    }
}
