pub mod error;
pub mod normalize;
pub mod service;
pub mod store;
pub mod types;

pub use error::{ErrorKind, StoreError, StoreResult};
pub use normalize::{
    MAX_NAME_CHARS, display_title, normalize_name, truncate_chars,
};
pub use service::WordService;
pub use store::{CollectionStore, SetAddition};
pub use types::{Collection, CollectionSummary, WordListing};
