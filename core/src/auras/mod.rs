//! Aura collation scheduling
//!
//! The engine does not recompute auras itself; it decides *when* the
//! external collation routine must run. Mutation signals are filtered
//! (suppression flags, forward-only combat guard) and funneled through a
//! shared debouncer so a burst of token updates costs one collation pass.

mod scheduler;

pub use scheduler::{AuraCollator, AuraScheduler, CollationRequest};
