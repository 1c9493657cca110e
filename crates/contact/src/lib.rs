mod command;
mod dispatch;
mod form;
mod input;
mod ledger;
mod payload;
mod types;

pub use command::*;
pub use dispatch::*;
pub use form::*;
pub use input::*;
pub use ledger::*;
pub use payload::*;
pub use types::*;
