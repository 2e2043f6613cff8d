pub mod auras;
pub mod combat;
pub mod compendium;
pub mod config;
pub mod events;

// Re-exports for convenience
pub use auras::{AuraCollator, AuraScheduler, CollationRequest};
pub use combat::{CombatDocument, CombatPosition, TurnViewModel, derive_turn_view};
pub use compendium::{CompendiumIndex, IndexStore, PackCatalog, PackError, PackKind, PackSource};
pub use config::{EngineConfig, PackMarkers};
pub use events::{Debouncer, MutationSignal, SignalOptions};
