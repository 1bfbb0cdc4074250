pub mod client;
pub mod commands;
pub mod keys;
pub mod types;

pub use client::RedisStore;
