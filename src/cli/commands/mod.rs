//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`chainrig show`, `chainrig check`)
//! - Shared environment-snapshot handling
//! - Consistent global flag handling

pub mod bootstrap;
pub mod check;
pub mod dispatcher;
pub mod networks;
pub mod show;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
