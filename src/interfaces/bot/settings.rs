use std::time::Duration;

/// Presentation-only knobs handed to every handler as a dispatcher dependency.
#[derive(Clone, Copy, Debug)]
pub struct BotSettings {
    pub toast_ttl: Duration,
}
