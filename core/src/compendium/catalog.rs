//! Pack catalog traits and pack-name classification.
//!
//! The host exposes its compendium store as an enumerable set of named packs;
//! each pack can fetch its full document list asynchronously. Which index a
//! pack feeds is decided purely by its name suffix, matching the naming
//! convention of the shipped compendiums.

use grimoire_types::AbilityDocument;
use thiserror::Error;

/// Failure while reading one pack's documents.
///
/// Always recovered locally: the failing pack contributes nothing and the
/// rebuild continues with the remaining packs.
#[derive(Debug, Error)]
pub enum PackError {
    #[error("pack fetch failed: {0}")]
    Fetch(String),
    #[error("pack document decode failed: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Index category a pack feeds, derived from its name suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackKind {
    /// Class abilities, keyed by `associations.classes` tags.
    ClassAbilities,
    /// Racial abilities, keyed by document tags.
    RacialAbilities,
    /// Spell-like abilities; indexed alongside racial abilities.
    SpellLike,
    /// Crafting materials, keyed by unique id only.
    Materials,
    /// Damage types, keyed by unique id only.
    DamageTypes,
}

impl PackKind {
    /// Classify a pack by name suffix against the shipped marker defaults.
    /// Unmatched names return `None` and the pack is ignored by the rebuild.
    /// Hosts with renamed packs classify through [`PackMarkers`] instead.
    ///
    /// [`PackMarkers`]: crate::config::PackMarkers
    pub fn classify(pack_name: &str) -> Option<Self> {
        crate::config::PackMarkers::default().classify(pack_name)
    }
}

/// One named compendium pack.
pub trait PackSource {
    /// Fully qualified pack name (e.g. `"world.class-abilities"`).
    fn name(&self) -> &str;

    /// Fetch every document in the pack.
    fn documents(&self) -> impl Future<Output = Result<Vec<AbilityDocument>, PackError>> + Send;
}

/// The host's enumerable compendium store.
pub trait PackCatalog {
    type Pack: PackSource;

    /// Packs in catalog order. Rebuild processes them in this order, which
    /// fixes the ordering of the per-tag ability lists.
    fn packs(&self) -> impl Iterator<Item = &Self::Pack>;
}
