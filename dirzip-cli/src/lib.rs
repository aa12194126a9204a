pub mod cli;
pub mod diag;
pub mod dispatch;

pub use cli::{falls_back_to_help, Cli};
pub use dispatch::{run, Command, DispatchError, Outcome, HELP_TEXT};
