pub mod admin;
pub mod callbacks;
pub mod collections;
pub mod start;
pub mod text;
