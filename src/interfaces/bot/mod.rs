pub mod handlers;
pub mod settings;
pub mod ui;
pub mod utils;

pub use settings::BotSettings;
pub use ui::*;
pub use utils::*;
