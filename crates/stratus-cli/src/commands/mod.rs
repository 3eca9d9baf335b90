//! Command handlers: one module per subcommand.
//!
//! Handlers translate arguments into core service calls and print results.
//! No template logic lives here.

pub mod check;
pub mod completions;
pub mod config;
pub mod init;
pub mod list;
pub mod render;
