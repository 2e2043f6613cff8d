//! Mutation signals emitted by the host document layer.

use crate::combat::CombatPosition;

/// Suppression flags carried in a mutation's options bag.
///
/// `stop_aura_update` is set by the collation routine itself on the writes
/// it performs, so its own mutations don't re-trigger it. `token_only` marks
/// cosmetic token updates with no aura-relevant change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SignalOptions {
    pub stop_aura_update: bool,
    pub token_only: bool,
}

/// Discrete notifications for document mutations the engine cares about.
/// These represent "the world may be stale" at a higher level than raw
/// database updates; ordering is arrival order only.
#[derive(Debug, Clone)]
pub enum MutationSignal {
    TokenCreated {
        scene_id: String,
    },
    TokenUpdated {
        scene_id: String,
        options: SignalOptions,
    },
    TokenDeleted {
        scene_id: String,
        options: SignalOptions,
    },
    CanvasReady {
        scene_id: String,
        options: SignalOptions,
    },
    /// Combat tracker advanced (or was rewound; the scheduler decides).
    CombatUpdated {
        scene_id: String,
        previous: CombatPosition,
        current: CombatPosition,
    },
    ActorUpdated {
        scene_id: String,
    },
    /// World clock moved by a whole number of combat rounds.
    WorldTimeAdvanced {
        scene_id: String,
        rounds: i64,
    },
}
