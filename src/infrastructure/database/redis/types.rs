use redis::RedisError;

use crate::application::words::StoreError;

pub type RedisResult<T> = Result<T, RedisError>;

impl From<RedisError> for StoreError {
    fn from(err: RedisError) -> Self {
        StoreError::Backend(err.to_string())
    }
}
