pub mod keyboards;
pub mod menu;
pub mod states;

pub use keyboards::*;
pub use menu::*;
pub use states::State;
