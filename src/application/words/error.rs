use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no database connection is configured")]
    NotConfigured,
    #[error("database error: {0}")]
    Backend(String),
    #[error("unexpected database reply: {0}")]
    UnexpectedReply(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Conflict,
    Authorization,
    Unavailable,
}

#[derive(Debug, Error)]
pub enum WordsError {
    #[error("Collection name cannot be empty.")]
    EmptyName,
    #[error("Word cannot be empty.")]
    EmptyWord,
    #[error("Collection name cannot be longer than {0} characters.")]
    NameTooLong(usize),
    #[error("Word cannot be longer than {0} characters.")]
    WordTooLong(usize),
    #[error("Collection '{0}' already exists.")]
    CollectionExists(String),
    #[error("Collection '{0}' does not exist.")]
    CollectionMissing(String),
    #[error("Incorrect password.")]
    Unauthorized,
    #[error("Could not connect to the database.")]
    Unavailable(#[from] StoreError),
}

impl WordsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            WordsError::EmptyName
            | WordsError::EmptyWord
            | WordsError::NameTooLong(_)
            | WordsError::WordTooLong(_) => ErrorKind::Validation,
            WordsError::CollectionExists(_) | WordsError::CollectionMissing(_) => {
                ErrorKind::Conflict
            }
            WordsError::Unauthorized => ErrorKind::Authorization,
            WordsError::Unavailable(_) => ErrorKind::Unavailable,
        }
    }

    /// Message shown to the user, prefixed the way failures are reported in the chat.
    pub fn user_message(&self) -> String {
        match self.kind() {
            ErrorKind::Validation | ErrorKind::Conflict => self.to_string(),
            ErrorKind::Authorization | ErrorKind::Unavailable => format!("Error: {}", self),
        }
    }
}
