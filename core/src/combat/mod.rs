//! Combat turn-state derivation
//!
//! Turns the tracker's raw, chronologically ordered turn list into a view
//! model with two partitions: real actor turns and buff pseudo-turns that
//! trail them. Derived fresh on every tracker render request, never stored.

pub mod tracker;

#[cfg(test)]
mod tracker_tests;

pub use tracker::{
    ActorState, ActorTurnView, BuffTurnView, CombatDocument, CombatPosition, CombatantEntry,
    PreviousActorTurn, TokenState, TurnViewModel, derive_turn_view,
};
