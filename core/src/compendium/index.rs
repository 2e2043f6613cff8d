//! Ability index build and publication.

use std::sync::{Arc, PoisonError, RwLock};

use grimoire_types::AbilityDocument;
use hashbrown::HashMap;

use super::catalog::{PackCatalog, PackKind, PackSource};
use crate::config::PackMarkers;

static EMPTY: &[Arc<AbilityDocument>] = &[];

/// Lookup maps over the compendium pack catalog.
///
/// Immutable once built; readers obtain a snapshot from [`IndexStore`] and
/// query it without locking. Documents are shared between maps via `Arc`
/// (one document can appear under several class tags and under its unique
/// id).
#[derive(Debug, Clone, Default)]
pub struct CompendiumIndex {
    /// Class tag -> abilities granted by that class, in pack document order.
    class_features: HashMap<String, Vec<Arc<AbilityDocument>>>,
    /// Race tag -> racial and spell-like abilities, in pack document order.
    racial_features: HashMap<String, Vec<Arc<AbilityDocument>>>,
    /// Unique id -> any class/racial/spell-like ability carrying one.
    all_abilities: HashMap<String, Arc<AbilityDocument>>,
    /// Unique id -> material document.
    materials: HashMap<String, Arc<AbilityDocument>>,
    /// Unique id -> damage type document.
    damage_types: HashMap<String, Arc<AbilityDocument>>,
    /// Flat list of class abilities with a unique id, in catalog order.
    all_class_features: Vec<Arc<AbilityDocument>>,
    /// Flat list of racial/spell-like abilities with a unique id.
    all_racial_features: Vec<Arc<AbilityDocument>>,
}

impl CompendiumIndex {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Lookups (miss-tolerant) ---

    /// Abilities granted by a class tag, empty if the tag is unknown.
    pub fn by_class_tag(&self, tag: &str) -> &[Arc<AbilityDocument>] {
        self.class_features.get(tag).map(Vec::as_slice).unwrap_or(EMPTY)
    }

    /// Racial and spell-like abilities for a race tag, empty if unknown.
    pub fn by_race_tag(&self, tag: &str) -> &[Arc<AbilityDocument>] {
        self.racial_features.get(tag).map(Vec::as_slice).unwrap_or(EMPTY)
    }

    /// Any indexed ability by its unique id.
    pub fn by_id(&self, unique_id: &str) -> Option<&Arc<AbilityDocument>> {
        self.all_abilities.get(unique_id)
    }

    pub fn material_by_id(&self, unique_id: &str) -> Option<&Arc<AbilityDocument>> {
        self.materials.get(unique_id)
    }

    pub fn damage_type_by_id(&self, unique_id: &str) -> Option<&Arc<AbilityDocument>> {
        self.damage_types.get(unique_id)
    }

    pub fn all_class_features(&self) -> &[Arc<AbilityDocument>] {
        &self.all_class_features
    }

    pub fn all_racial_features(&self) -> &[Arc<AbilityDocument>] {
        &self.all_racial_features
    }

    /// Total number of distinct unique ids indexed (abilities, materials,
    /// damage types). Used for rebuild logging.
    pub fn len(&self) -> usize {
        self.all_abilities.len() + self.materials.len() + self.damage_types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // --- Population (rebuild only) ---

    fn add_class_abilities(&mut self, docs: Vec<AbilityDocument>) {
        for doc in docs {
            let doc = Arc::new(doc);
            for assoc in doc.class_associations() {
                self.class_features
                    .entry(assoc.tag.clone())
                    .or_default()
                    .push(Arc::clone(&doc));
            }
            if let Some(unique_id) = &doc.unique_id {
                self.all_abilities.insert(unique_id.clone(), Arc::clone(&doc));
                self.all_class_features.push(doc);
            }
        }
    }

    fn add_racial_abilities(&mut self, docs: Vec<AbilityDocument>) {
        for doc in docs {
            let doc = Arc::new(doc);
            for tag in &doc.tags {
                self.racial_features
                    .entry(tag.tag.clone())
                    .or_default()
                    .push(Arc::clone(&doc));
            }
            if let Some(unique_id) = &doc.unique_id {
                self.all_abilities.insert(unique_id.clone(), Arc::clone(&doc));
                self.all_racial_features.push(doc);
            }
        }
    }

    fn add_by_unique_id(&mut self, kind: PackKind, docs: Vec<AbilityDocument>) {
        let map = match kind {
            PackKind::Materials => &mut self.materials,
            PackKind::DamageTypes => &mut self.damage_types,
            // Tag-keyed kinds never route here.
            _ => return,
        };
        for doc in docs {
            if let Some(unique_id) = &doc.unique_id {
                map.insert(unique_id.clone(), Arc::new(doc));
            }
        }
    }
}

/// Build a fresh index from the catalog, classifying packs with the shipped
/// suffix markers.
pub async fn build_index<C: PackCatalog>(catalog: &C) -> CompendiumIndex {
    build_index_with(catalog, &PackMarkers::default()).await
}

/// Build a fresh index from the catalog with explicit suffix markers.
///
/// Packs are fetched and committed one at a time, in catalog order; when the
/// returned future resolves, every pack has either contributed or had its
/// failure logged. A failing pack is skipped, never fatal.
pub async fn build_index_with<C: PackCatalog>(
    catalog: &C,
    markers: &PackMarkers,
) -> CompendiumIndex {
    let mut index = CompendiumIndex::new();
    let mut scanned = 0usize;
    let mut skipped = 0usize;

    for pack in catalog.packs() {
        let Some(kind) = markers.classify(pack.name()) else {
            continue;
        };
        scanned += 1;

        let docs = match pack.documents().await {
            Ok(docs) => docs,
            Err(e) => {
                tracing::warn!(pack = pack.name(), error = %e, "skipping unreadable pack");
                skipped += 1;
                continue;
            }
        };

        match kind {
            PackKind::ClassAbilities => index.add_class_abilities(docs),
            PackKind::RacialAbilities | PackKind::SpellLike => index.add_racial_abilities(docs),
            PackKind::Materials | PackKind::DamageTypes => index.add_by_unique_id(kind, docs),
        }
    }

    tracing::info!(
        packs = scanned,
        skipped,
        entries = index.len(),
        "compendium index built"
    );
    index
}

/// Holder for the currently published index.
///
/// Rebuilds construct a fresh [`CompendiumIndex`] and publish it with a
/// single swap; readers clone the `Arc` and keep a consistent view for as
/// long as they hold it. A reader during a rebuild sees the previous
/// snapshot, never a half-populated one.
#[derive(Debug, Default)]
pub struct IndexStore {
    current: RwLock<Arc<CompendiumIndex>>,
}

impl IndexStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current published index. Cheap: one lock acquisition and an `Arc`
    /// clone.
    pub fn snapshot(&self) -> Arc<CompendiumIndex> {
        Arc::clone(&self.current.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Rebuild from the catalog and publish the result.
    pub async fn rebuild<C: PackCatalog>(&self, catalog: &C) {
        let fresh = build_index(catalog).await;
        self.publish(fresh);
    }

    /// Rebuild with explicit suffix markers and publish the result.
    pub async fn rebuild_with<C: PackCatalog>(&self, catalog: &C, markers: &PackMarkers) {
        let fresh = build_index_with(catalog, markers).await;
        self.publish(fresh);
    }

    fn publish(&self, index: CompendiumIndex) {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::new(index);
    }
}
