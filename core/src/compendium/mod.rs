//! Compendium pack indexing
//!
//! This module provides:
//! - **Catalog traits**: the seam to the host's compendium pack store
//! - **Classification**: pack-name suffix matching into index categories
//! - **Index**: lookup maps built once per rebuild, published as a snapshot
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │              PackCatalog (host compendium store)           │
//! │   "world.class-abilities", "world.materials", ...          │
//! └────────────────────────────────────────────────────────────┘
//!                        │ async document fetch, per pack
//!                        ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │              CompendiumIndex (fresh build)                 │
//! │   class tag → abilities, race tag → abilities, id → doc    │
//! └────────────────────────────────────────────────────────────┘
//!                        │ atomic swap
//!                        ▼
//!                IndexStore → Arc snapshots for readers
//! ```

mod catalog;
mod index;

pub use catalog::{PackCatalog, PackError, PackKind, PackSource};
pub use index::{CompendiumIndex, IndexStore, build_index, build_index_with};
