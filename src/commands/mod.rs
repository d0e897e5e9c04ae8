//! Subcommand implementations for the `tasktime` binary.

mod analyze;
mod init;
mod validate;

pub use analyze::{AnalyzeArgs, analyze};
pub use init::{InitArgs, init_config};
pub use validate::{ValidateArgs, validate_config};
