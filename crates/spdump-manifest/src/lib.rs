//! Swift package manifest decoding
//!
//! This crate decodes the JSON printed by `swift package dump-package` into
//! typed values for build-file generation. Dependency references use a
//! single-key tagged object whose value is a positional array; those are
//! decoded strictly, and any malformed reference fails the whole manifest.
//!
//! Decoding is pure: no I/O, no global state. Diagnostics are emitted as
//! `tracing` events and are silent unless the caller installs a subscriber.

pub mod errors;
pub mod jsonutils;
pub mod manifest;
pub mod target_dependency;
pub mod types;

pub use errors::{DecodeError, DependencyError, ErrorKind, FieldExtractionError, ManifestError};
pub use target_dependency::{
    ByNameReference, PositionalReference, ProductReference, ReferenceTag, TargetDependency,
    TargetReference,
};
pub use types::{Manifest, Platform, Product, Targets};
