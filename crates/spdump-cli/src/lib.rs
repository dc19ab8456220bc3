//! spdump library - expose modules for testing

pub mod commands;
pub mod common;
pub mod errors;
pub mod render;
pub mod swift;

pub use common::{GlobalOpts, OutputFormat};
pub use errors::CliError;
