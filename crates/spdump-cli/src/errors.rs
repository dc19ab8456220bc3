//! Error types for the spdump CLI

use spdump_config::ConfigError;
use spdump_manifest::ManifestError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to read {path}: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("No manifest input provided; pass a file or pipe JSON into `spdump decode`")]
    NoInput,

    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("`swift package dump-package` failed ({status}): {stderr}")]
    SwiftFailed { status: String, stderr: String },
}
