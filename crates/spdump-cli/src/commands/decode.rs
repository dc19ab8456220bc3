use crate::common::OutputFormat;
use crate::errors::CliError;
use crate::render;
use clap::Parser;
use spdump_logger as logger;
use spdump_manifest::Manifest;
use std::fs;
use std::io::{IsTerminal, Read};
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct DecodeCommand {
    /// Path to dump-package JSON. If not provided, reads from stdin
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Read the manifest bytes from a file or stdin
pub fn read_input(file: Option<&PathBuf>) -> Result<Vec<u8>, CliError> {
    match file {
        Some(path) => {
            logger::debug(&format!("Reading manifest JSON from file: {}", path.display()));
            fs::read(path).map_err(|source| CliError::ReadInput {
                path: path.clone(),
                source,
            })
        }
        None => {
            let mut stdin = std::io::stdin();
            if stdin.is_terminal() {
                return Err(CliError::NoInput);
            }
            logger::debug("Reading manifest JSON from stdin");
            let mut bytes = Vec::new();
            stdin.read_to_end(&mut bytes)?;
            Ok(bytes)
        }
    }
}

pub fn handle_decode(cmd: &DecodeCommand) -> Result<String, CliError> {
    let bytes = read_input(cmd.file.as_ref())?;
    let manifest = Manifest::from_json(&bytes)?;
    logger::debug(&format!(
        "Decoded '{}' with {} dependencies",
        manifest.name,
        manifest.dependencies.len()
    ));
    render::render(&manifest, cmd.format)
}
