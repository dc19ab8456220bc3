//! Tagged dependency references
//!
//! A target dependency is serialized as an object with a single key naming
//! the reference kind, whose value is a positional array:
//!
//! ```json
//! {"product": ["ArgumentParser", "swift-argument-parser", null, null]}
//! {"byName": ["Logging", null]}
//! {"target": ["Core", null]}
//! ```
//!
//! Only the leading string fields are consumed; trailing elements such as
//! module aliases or platform conditions are ignored.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::errors::{DependencyError, FieldExtractionError};
use crate::jsonutils;

/// The key that selects a reference variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceTag {
    Product,
    ByName,
    Target,
}

impl ReferenceTag {
    pub const ALL: [ReferenceTag; 3] = [
        ReferenceTag::Product,
        ReferenceTag::ByName,
        ReferenceTag::Target,
    ];

    /// JSON key for this tag
    pub fn as_str(self) -> &'static str {
        match self {
            ReferenceTag::Product => "product",
            ReferenceTag::ByName => "byName",
            ReferenceTag::Target => "target",
        }
    }
}

impl fmt::Display for ReferenceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reference to one of a target's dependencies
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TargetDependency {
    Product(ProductReference),
    ByName(ByNameReference),
    Target(TargetReference),
    /// None of the recognized tags were present
    #[default]
    Unspecified,
}

impl TargetDependency {
    /// Decode a single tagged reference object
    pub fn from_value(value: &Value) -> Result<Self, DependencyError> {
        let Value::Object(object) = value else {
            return Err(DependencyError::NotAnObject {
                found: jsonutils::kind_name(value),
            });
        };

        let present: SmallVec<[(ReferenceTag, &Value); 3]> = ReferenceTag::ALL
            .iter()
            .filter_map(|&tag| object.get(tag.as_str()).map(|payload| (tag, payload)))
            .collect();

        match present.as_slice() {
            [] => {
                debug!("Dependency carries no recognized reference tag");
                Ok(TargetDependency::Unspecified)
            }
            [(ReferenceTag::Product, payload)] => {
                ProductReference::from_payload(payload).map(TargetDependency::Product)
            }
            [(ReferenceTag::ByName, payload)] => {
                ByNameReference::from_payload(payload).map(TargetDependency::ByName)
            }
            [(ReferenceTag::Target, payload)] => {
                TargetReference::from_payload(payload).map(TargetDependency::Target)
            }
            _ => Err(DependencyError::Ambiguous {
                tags: present.iter().map(|(tag, _)| *tag).collect(),
            }),
        }
    }

    /// The tag of the populated variant, if any
    pub fn tag(&self) -> Option<ReferenceTag> {
        match self {
            TargetDependency::Product(_) => Some(ReferenceTag::Product),
            TargetDependency::ByName(_) => Some(ReferenceTag::ByName),
            TargetDependency::Target(_) => Some(ReferenceTag::Target),
            TargetDependency::Unspecified => None,
        }
    }

    pub fn product(&self) -> Option<&ProductReference> {
        match self {
            TargetDependency::Product(reference) => Some(reference),
            _ => None,
        }
    }

    pub fn by_name(&self) -> Option<&ByNameReference> {
        match self {
            TargetDependency::ByName(reference) => Some(reference),
            _ => None,
        }
    }

    pub fn target(&self) -> Option<&TargetReference> {
        match self {
            TargetDependency::Target(reference) => Some(reference),
            _ => None,
        }
    }

    pub fn is_unspecified(&self) -> bool {
        matches!(self, TargetDependency::Unspecified)
    }

    /// The name used to import the dependency.
    ///
    /// Product references yield the product name and by-name references the
    /// referenced name. Target references yield an empty string.
    pub fn import_name(&self) -> &str {
        match self {
            TargetDependency::Product(reference) => &reference.product_name,
            TargetDependency::ByName(reference) => &reference.name,
            TargetDependency::Target(_) | TargetDependency::Unspecified => "",
        }
    }
}

impl<'de> Deserialize<'de> for TargetDependency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        TargetDependency::from_value(&value).map_err(de::Error::custom)
    }
}

impl Serialize for TargetDependency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = usize::from(!self.is_unspecified());
        let mut map = serializer.serialize_map(Some(len))?;
        match self {
            TargetDependency::Product(reference) => map.serialize_entry(
                ReferenceTag::Product.as_str(),
                &[&reference.product_name, &reference.dependency_name],
            )?,
            TargetDependency::ByName(reference) => {
                map.serialize_entry(ReferenceTag::ByName.as_str(), &[&reference.name])?;
            }
            TargetDependency::Target(reference) => {
                map.serialize_entry(ReferenceTag::Target.as_str(), &[&reference.target_name])?;
            }
            TargetDependency::Unspecified => {}
        }
        map.end()
    }
}

/// A reference variant decoded from a positional array payload
pub trait PositionalReference: Sized {
    const TAG: ReferenceTag;

    /// Field names in array order, used in error messages
    const FIELDS: &'static [&'static str];

    /// Build the reference from the payload's elements
    fn from_fields(values: &[Value]) -> Result<Self, DependencyError>;

    fn from_payload(payload: &Value) -> Result<Self, DependencyError> {
        trace!(tag = %Self::TAG, %payload, "Decoding positional reference");
        let values = jsonutils::array_payload(payload)
            .map_err(|source| Self::extraction_error(0, source))?;
        Self::from_fields(values)
    }

    /// Required string field at `index`
    fn string_field(values: &[Value], index: usize) -> Result<String, DependencyError> {
        jsonutils::string_at_index(values, index)
            .map(str::to_owned)
            .map_err(|source| Self::extraction_error(index, source))
    }

    fn extraction_error(index: usize, source: FieldExtractionError) -> DependencyError {
        DependencyError::FieldExtraction {
            tag: Self::TAG,
            field: Self::FIELDS.get(index).copied().unwrap_or("<unnamed>"),
            source,
        }
    }
}

/// A reference to a product of a package dependency
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductReference {
    pub product_name: String,
    pub dependency_name: String,
}

impl ProductReference {
    /// A string usable as a map key for the product: `<dependency>-<product>`.
    ///
    /// Distinct references may format to the same key; no uniqueness is
    /// enforced here.
    pub fn uniq_key(&self) -> String {
        format!("{}-{}", self.dependency_name, self.product_name)
    }
}

impl PositionalReference for ProductReference {
    const TAG: ReferenceTag = ReferenceTag::Product;
    const FIELDS: &'static [&'static str] = &["productName", "dependencyName"];

    fn from_fields(values: &[Value]) -> Result<Self, DependencyError> {
        let product_name = Self::string_field(values, 0)?;
        let dependency_name = Self::string_field(values, 1)?;
        Ok(ProductReference {
            product_name,
            dependency_name,
        })
    }
}

/// A reference by name. The name is either a product or a target; resolving
/// which is left to the consumer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ByNameReference {
    pub name: String,
}

impl PositionalReference for ByNameReference {
    const TAG: ReferenceTag = ReferenceTag::ByName;
    const FIELDS: &'static [&'static str] = &["name"];

    fn from_fields(values: &[Value]) -> Result<Self, DependencyError> {
        Ok(ByNameReference {
            name: Self::string_field(values, 0)?,
        })
    }
}

/// A reference to a target in the same package
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetReference {
    pub target_name: String,
}

impl PositionalReference for TargetReference {
    const TAG: ReferenceTag = ReferenceTag::Target;
    const FIELDS: &'static [&'static str] = &["targetName"];

    fn from_fields(values: &[Value]) -> Result<Self, DependencyError> {
        Ok(TargetReference {
            target_name: Self::string_field(values, 0)?,
        })
    }
}
