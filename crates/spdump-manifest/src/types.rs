//! Manifest types as serialized by `swift package dump-package`
//!
//! Only the parts a build-file generator needs are typed. Every field falls
//! back to its default when absent or `null`, and unknown keys are ignored, so newer
//! toolchains that add fields keep decoding.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::jsonutils::null_as_default;
use crate::target_dependency::TargetDependency;

// =============================================================================
// MANIFEST
// =============================================================================

/// A Swift package manifest
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub name: String,
    pub dependencies: Vec<TargetDependency>,
    pub platforms: Vec<Platform>,
    pub products: Vec<Product>,
    pub targets: Targets,
}

// =============================================================================
// PLATFORM / PRODUCT
// =============================================================================

/// A supported platform declaration, e.g. `.macOS(.v10_15)`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Platform {
    #[serde(deserialize_with = "null_as_default")]
    pub platform_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
}

/// A product vended by the package
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub targets: Vec<String>,
    /// Product kind, e.g. `{"library": ["automatic"]}` or `{"executable": null}`
    #[serde(rename = "type")]
    pub product_type: Value,
}

impl Product {
    /// The top-level key of the product kind, e.g. `library` or `executable`
    pub fn kind(&self) -> Option<&str> {
        match &self.product_type {
            Value::Object(map) => map.keys().next().map(String::as_str),
            Value::String(kind) => Some(kind),
            _ => None,
        }
    }
}

// =============================================================================
// TARGETS - kept opaque
// =============================================================================

/// The package's targets, kept as raw JSON for downstream consumers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Targets(Value);

impl Targets {
    pub fn new(value: Value) -> Self {
        Targets(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Number of entries: array length or object key count
    pub fn len(&self) -> usize {
        match &self.0 {
            Value::Array(items) => items.len(),
            Value::Object(map) => map.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_platform_tolerates_extra_fields() {
        let platform: Result<Platform, _> = serde_json::from_value(json!({
            "platformName": "macos",
            "version": "10.15",
            "options": []
        }));
        assert_eq!(
            platform.ok(),
            Some(Platform {
                platform_name: "macos".to_string(),
                version: "10.15".to_string(),
            })
        );
    }

    #[test]
    fn test_product_kind() {
        let product: Result<Product, _> = serde_json::from_value(json!({
            "name": "MyLibrary",
            "targets": ["MyLibrary"],
            "type": {"library": ["automatic"]},
            "settings": []
        }));
        let Ok(product) = product else {
            panic!("product should decode");
        };
        assert_eq!(product.kind(), Some("library"));
        assert_eq!(product.targets, vec!["MyLibrary".to_string()]);
        assert_eq!(Product::default().kind(), None);
    }

    #[test]
    fn test_null_fields_fall_back_to_defaults() {
        let product: Result<Product, _> = serde_json::from_value(json!({
            "name": "MyLibrary",
            "targets": null,
            "type": null
        }));
        let Ok(product) = product else {
            panic!("product with null targets should decode");
        };
        assert_eq!(product.name, "MyLibrary");
        assert!(product.targets.is_empty());
        assert_eq!(product.kind(), None);

        let platform: Result<Platform, _> =
            serde_json::from_value(json!({"platformName": "linux", "version": null}));
        assert_eq!(
            platform.ok(),
            Some(Platform {
                platform_name: "linux".to_string(),
                version: String::new(),
            })
        );
    }

    #[test]
    fn test_targets_len() {
        assert_eq!(Targets::new(json!([{"name": "A"}, {"name": "B"}])).len(), 2);
        assert_eq!(Targets::new(json!({"A": {}})).len(), 1);
        assert!(Targets::default().is_empty());
    }
}
