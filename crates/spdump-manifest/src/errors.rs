use smallvec::SmallVec;
use thiserror::Error;

use crate::target_dependency::ReferenceTag;

/// Errors returned by [`Manifest::from_json`](crate::Manifest::from_json)
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to decode manifest: {0}")]
    Decode(#[from] DecodeError),

    #[error("Failed to decode dependency #{index}: {source}")]
    Dependency {
        index: usize,
        #[source]
        source: DependencyError,
    },
}

/// Coarse classification of a [`ManifestError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The buffer is not JSON or does not have the manifest's shape
    Decode,
    /// A reference's positional payload is missing, short, or mistyped
    FieldExtraction,
}

impl ManifestError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ManifestError::Decode(_) => ErrorKind::Decode,
            ManifestError::Dependency { source, .. } => source.kind(),
        }
    }
}

/// The top-level buffer could not be decoded into a manifest
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("invalid JSON: {0}")]
    Syntax(#[source] serde_json::Error),

    #[error("expected a JSON object at the top level, found {found}")]
    NotAnObject { found: &'static str },

    #[error("unexpected manifest shape at `{path}`: {source}")]
    Shape {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A single entry of `dependencies` could not be decoded
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DependencyError {
    #[error("expected a tagged reference object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("reference carries more than one tag: {}", join_tags(.tags))]
    Ambiguous { tags: SmallVec<[ReferenceTag; 3]> },

    #[error("`{tag}` reference field `{field}`: {source}")]
    FieldExtraction {
        tag: ReferenceTag,
        field: &'static str,
        #[source]
        source: FieldExtractionError,
    },
}

impl DependencyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DependencyError::FieldExtraction { .. } => ErrorKind::FieldExtraction,
            DependencyError::NotAnObject { .. } | DependencyError::Ambiguous { .. } => {
                ErrorKind::Decode
            }
        }
    }
}

/// Failure to pull a required value out of a positional array payload
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldExtractionError {
    #[error("payload is null")]
    MissingPayload,

    #[error("expected an array payload, found {found}")]
    NotAnArray { found: &'static str },

    #[error("index {index} is out of range for an array of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("expected a string at index {index}, found {found}")]
    NotAString { index: usize, found: &'static str },
}

fn join_tags(tags: &[ReferenceTag]) -> String {
    tags.iter()
        .map(|tag| tag.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
