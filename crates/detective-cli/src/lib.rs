//! Detective Quest CLI library.
//!
//! This library drives a playthrough of the detective core: configuration,
//! case files, the interactive exploration loop, scripted replays, and
//! output formatting.

pub mod casefile;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod repl;

pub use casefile::{load_case, CaseFile};
pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
