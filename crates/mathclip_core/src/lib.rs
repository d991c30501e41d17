//! Mathclip core: pure state machine for clipboard watching decisions.
mod effect;
mod msg;
mod state;
mod update;

pub use effect::Effect;
pub use msg::Msg;
pub use state::WatchState;
pub use update::update;
