use crate::common::OutputFormat;
use crate::errors::CliError;
use crate::{render, swift};
use clap::Parser;
use spdump_config::Config;
use spdump_logger as logger;
use spdump_manifest::Manifest;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct DumpCommand {
    /// Package directory containing Package.swift
    #[arg(default_value = ".")]
    pub package_dir: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn handle_dump(cmd: &DumpCommand, config: &Config) -> Result<String, CliError> {
    let swift_path = config.resolve_swift()?;
    logger::debug(&format!("Using swift at {}", swift_path.display()));

    let bytes = swift::dump_package(&swift_path, &cmd.package_dir)?;
    let manifest = Manifest::from_json(&bytes)?;
    render::render(&manifest, cmd.format)
}
