#[cfg(test)]
pub mod memory;
pub mod redis;

pub use self::redis::RedisStore;
