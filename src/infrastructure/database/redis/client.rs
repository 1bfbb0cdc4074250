use redis::aio::MultiplexedConnection;
use redis::{Client, Script};

use super::keys::KeySpace;
use super::types::RedisResult;

// KEYS[1] = index set, KEYS[2] = word set, ARGV[1] = collection id, ARGV[2] = word.
// Replies -1 when the collection does not exist, otherwise the SADD count.
const ADD_WORD_SCRIPT: &str = r"
if redis.call('SISMEMBER', KEYS[1], ARGV[1]) == 0 then
    return -1
end
return redis.call('SADD', KEYS[2], ARGV[2])
";

pub struct RedisStore {
    client: Client,
    pub(super) keys: KeySpace,
    pub(super) add_word_script: Script,
}

impl RedisStore {
    pub fn open(redis_url: &str, key_prefix: &str) -> RedisResult<Self> {
        let client = Client::open(redis_url)?;
        Ok(Self {
            client,
            keys: KeySpace::new(key_prefix),
            add_word_script: Script::new(ADD_WORD_SCRIPT),
        })
    }

    /// Opens the client and makes one round trip so a bad URL or a dead server
    /// shows up at start-up instead of on the first button press.
    pub async fn connect(redis_url: &str, key_prefix: &str) -> RedisResult<Self> {
        let store = Self::open(redis_url, key_prefix)?;
        store.ping().await?;
        Ok(store)
    }

    pub async fn ping(&self) -> RedisResult<()> {
        let mut conn = self.get_conn().await?;
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(())
    }

    pub(super) async fn get_conn(&self) -> RedisResult<MultiplexedConnection> {
        self.client.get_multiplexed_async_connection().await
    }
}
