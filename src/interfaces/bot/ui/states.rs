use teloxide::types::{MessageId, UserId};

/// What the chat is currently doing. Collections are captured by value so that
/// buttons can refer to them by index; callback data is capped at 64 bytes.
///
/// Form and admin states carry the user who opened them. In a group chat the
/// dialogue is shared, so only that user may answer the form or press the
/// admin buttons.
#[derive(Clone, Debug, Default)]
pub enum State {
    #[default]
    Start,
    CollectionsMenu {
        collections: Vec<String>,
        page: usize,
    },
    ReceiveCollectionName {
        owner: UserId,
        menu_message_id: MessageId,
        prompt_message_id: MessageId,
    },
    ConfirmCreateCollection {
        owner: UserId,
        name: String,
    },
    ReceiveWord {
        owner: UserId,
        collection: String,
        menu_message_id: MessageId,
        prompt_message_id: MessageId,
    },
    AdminSelectCollection {
        collections: Vec<String>,
        page: usize,
    },
    AdminReceivePassword {
        owner: UserId,
        collection: String,
        menu_message_id: MessageId,
        prompt_message_id: MessageId,
    },
    AdminPanel {
        owner: UserId,
        collection: String,
        password: String,
    },
    AdminConfirmDelete {
        owner: UserId,
        collection: String,
        password: String,
    },
}

impl State {
    pub fn is_waiting_for_text(&self) -> bool {
        matches!(
            self,
            State::ReceiveCollectionName { .. }
                | State::ReceiveWord { .. }
                | State::AdminReceivePassword { .. }
        )
    }

    pub fn owner(&self) -> Option<UserId> {
        match self {
            State::ReceiveCollectionName { owner, .. }
            | State::ConfirmCreateCollection { owner, .. }
            | State::ReceiveWord { owner, .. }
            | State::AdminReceivePassword { owner, .. }
            | State::AdminPanel { owner, .. }
            | State::AdminConfirmDelete { owner, .. } => Some(*owner),
            State::Start | State::CollectionsMenu { .. } | State::AdminSelectCollection { .. } => {
                None
            }
        }
    }

    /// True when `user` must not act on this state because someone else opened it.
    pub fn is_held_by_other(&self, user: UserId) -> bool {
        self.owner().is_some_and(|owner| owner != user)
    }
}
