//! Shared data types for the Grimoire derived-state engine.
//!
//! These are the serde-facing shapes exchanged with the host application:
//! compendium ability documents and the per-combatant flag bags stored on
//! turn-tracker entries. Kept in their own crate so UI layers can depend on
//! them without pulling in the engine.

pub mod document;
pub mod flags;

pub use document::{AbilityAssociations, AbilityDocument, ClassAssociation, FeatureTag};
pub use flags::{ActionFlags, CombatantFlags};
