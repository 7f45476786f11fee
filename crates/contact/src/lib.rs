mod command;
mod delivery;
mod form;
mod types;

pub use command::*;
pub use delivery::*;
pub use form::*;
pub use types::*;
