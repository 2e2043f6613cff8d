//! Compendium ability document model.
//!
//! Documents arrive from external compendium packs as JSON records. Only the
//! fields the index builder consumes are modeled; everything else in the
//! source record is ignored during deserialization.

use serde::{Deserialize, Serialize};

/// Association between an ability document and a class.
///
/// The host stores these as positional `[tag, level]` pairs; they are
/// modeled here with named fields so callers never index into a tuple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassAssociation {
    /// Class tag the ability belongs to (e.g. `"fighter"`).
    pub tag: String,
    /// Class level at which the ability is gained.
    pub level: u32,
}

/// A tag attached to a racial or spell-like ability document.
///
/// The host stores tags as heterogeneous positional arrays where only the
/// first element (the tag string) is meaningful to the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureTag {
    /// Race (or creature-type) tag the ability belongs to.
    pub tag: String,
}

/// Optional association block on an ability document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AbilityAssociations {
    /// Classes this ability is granted by, in document order.
    #[serde(default)]
    pub classes: Vec<ClassAssociation>,
}

/// One document from a compendium pack.
///
/// A document with neither associations, tags, nor a unique id contributes
/// nothing to the index; that is normal, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityDocument {
    /// Storage id within the pack.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Stable cross-reference key, distinct from the storage id.
    #[serde(default)]
    pub unique_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub associations: Option<AbilityAssociations>,
    #[serde(default)]
    pub tags: Vec<FeatureTag>,
}

impl AbilityDocument {
    /// Class associations, or an empty slice when the block is absent.
    pub fn class_associations(&self) -> &[ClassAssociation] {
        self.associations
            .as_ref()
            .map(|a| a.classes.as_slice())
            .unwrap_or_default()
    }
}
