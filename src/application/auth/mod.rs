pub mod admin;

pub use admin::{AdminVerifier, SharedSecret};
