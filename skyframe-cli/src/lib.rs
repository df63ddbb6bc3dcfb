pub mod cli;
pub mod commands;
pub mod error;

pub use cli::{Cli, Commands};
pub use commands::{execute, CommandOutput};
pub use error::{Error, Result};
