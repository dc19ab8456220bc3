//! Manifest decoding
//!
//! Decoding runs in two passes: the known keys are decoded structurally,
//! tracking the path of any mismatch, then every `dependencies` entry is handed to
//! [`TargetDependency::from_value`]. Keeping the second pass out of serde
//! preserves the typed error for the failing entry.

use std::str::FromStr;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::errors::{DecodeError, ManifestError};
use crate::jsonutils::{self, null_as_default};
use crate::target_dependency::TargetDependency;
use crate::types::{Manifest, Platform, Product, Targets};

/// Known top-level keys; anything else is ignored
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawManifest {
    #[serde(deserialize_with = "null_as_default")]
    name: String,
    #[serde(deserialize_with = "null_as_default")]
    dependencies: Vec<Value>,
    #[serde(deserialize_with = "null_as_default")]
    platforms: Vec<Platform>,
    #[serde(deserialize_with = "null_as_default")]
    products: Vec<Product>,
    targets: Targets,
}

impl Manifest {
    /// Decode the JSON output of `swift package dump-package`
    pub fn from_json(bytes: &[u8]) -> Result<Self, ManifestError> {
        let value: Value = serde_json::from_slice(bytes).map_err(DecodeError::Syntax)?;
        if !value.is_object() {
            return Err(DecodeError::NotAnObject {
                found: jsonutils::kind_name(&value),
            }
            .into());
        }

        // Second read of the buffer keeps line/column in shape errors
        let mut deserializer = serde_json::Deserializer::from_slice(bytes);
        let raw: RawManifest =
            serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
                DecodeError::Shape {
                    path: e.path().to_string(),
                    source: e.into_inner(),
                }
            })?;

        let dependencies = raw
            .dependencies
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                TargetDependency::from_value(entry)
                    .map_err(|source| ManifestError::Dependency { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let manifest = Manifest {
            name: raw.name,
            dependencies,
            platforms: raw.platforms,
            products: raw.products,
            targets: raw.targets,
        };

        debug!(
            name = %manifest.name,
            dependencies = manifest.dependencies.len(),
            platforms = manifest.platforms.len(),
            products = manifest.products.len(),
            targets = manifest.targets.len(),
            "Decoded manifest"
        );

        Ok(manifest)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ManifestError> {
        Self::from_json(json.as_bytes())
    }

    /// Dependencies that reference a product, keyed by [`uniq_key`](crate::ProductReference::uniq_key)
    pub fn product_keys(&self) -> Vec<String> {
        self.dependencies
            .iter()
            .filter_map(TargetDependency::product)
            .map(|product| product.uniq_key())
            .collect()
    }

    /// Names used to import the dependencies, skipping empty ones
    pub fn import_names(&self) -> impl Iterator<Item = &str> {
        self.dependencies
            .iter()
            .map(TargetDependency::import_name)
            .filter(|name| !name.is_empty())
    }
}

impl FromStr for Manifest {
    type Err = ManifestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json_str(s)
    }
}
