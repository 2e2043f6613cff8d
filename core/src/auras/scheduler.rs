//! Routing of mutation signals into debounced collation requests.

use std::time::Duration;

use crate::combat::CombatPosition;
use crate::events::{Debouncer, MutationSignal};

/// Arguments for one collation pass. Ephemeral: lives only inside the
/// debounce window, with no identity beyond the pending timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollationRequest {
    pub scene_id: String,
    pub refresh_sources: bool,
    pub refresh_targets: bool,
    /// Diagnostic only; never branched on.
    pub reason: &'static str,
}

/// The external aura recomputation routine.
pub trait AuraCollator: Send + 'static {
    fn collate(&mut self, request: CollationRequest);
}

impl<F: FnMut(CollationRequest) + Send + 'static> AuraCollator for F {
    fn collate(&mut self, request: CollationRequest) {
        self(request)
    }
}

/// Decides, per mutation signal, whether the collation routine must run.
///
/// All scheduling goes through one shared debouncer (the host only ever
/// reports mutations for the active scene, so per-scene timers buy
/// nothing). Combat rewinds are deliberately skipped: rewinding the tracker
/// is a manual correction and must not replay forward-only side effects
/// such as aura re-application.
#[derive(Debug)]
pub struct AuraScheduler {
    debounce: Debouncer<CollationRequest>,
}

impl AuraScheduler {
    /// Wire the scheduler to a collator. Must be called within a tokio
    /// runtime; the debounce timer lives in a spawned task.
    pub fn new<C: AuraCollator>(window: Duration, mut collator: C) -> Self {
        Self {
            debounce: Debouncer::spawn(window, move |request| collator.collate(request)),
        }
    }

    /// Route one mutation signal.
    pub fn handle_signal(&self, signal: &MutationSignal) {
        match signal {
            MutationSignal::TokenCreated { scene_id } => {
                self.schedule(scene_id, "token-created");
            }
            MutationSignal::TokenUpdated { scene_id, options } => {
                if options.stop_aura_update || options.token_only {
                    return;
                }
                self.schedule(scene_id, "token-updated");
            }
            MutationSignal::TokenDeleted { scene_id, options } => {
                if options.stop_aura_update || options.token_only {
                    return;
                }
                self.schedule(scene_id, "token-deleted");
            }
            MutationSignal::CanvasReady { scene_id, options } => {
                if options.stop_aura_update {
                    return;
                }
                self.schedule(scene_id, "canvas-ready");
            }
            MutationSignal::CombatUpdated {
                scene_id,
                previous,
                current,
            } => {
                if moved_backward(*previous, *current) {
                    tracing::debug!(
                        scene = scene_id.as_str(),
                        ?previous,
                        ?current,
                        "combat rewound, skipping collation"
                    );
                    return;
                }
                self.schedule(scene_id, "combat-advanced");
            }
            MutationSignal::ActorUpdated { scene_id } => {
                self.schedule(scene_id, "actor-updated");
            }
            MutationSignal::WorldTimeAdvanced { scene_id, rounds } => {
                if *rounds == 0 {
                    return;
                }
                self.schedule(scene_id, "world-time");
            }
        }
    }

    /// Debounced trigger entry point for callers outside the signal stream
    /// (e.g. the collation routine re-scheduling itself after a deferred
    /// write).
    pub fn schedule_collation(&self, scene_id: &str, reason: &'static str) {
        self.schedule(scene_id, reason);
    }

    fn schedule(&self, scene_id: &str, reason: &'static str) {
        tracing::debug!(scene = scene_id, reason, "scheduling aura collation");
        self.debounce.call(CollationRequest {
            scene_id: scene_id.to_string(),
            refresh_sources: true,
            refresh_targets: true,
            reason,
        });
    }
}

/// Backward-guard: true when the tracker moved back in time.
///
/// Same round with a non-advancing turn counts as backward; an earlier
/// round always does. Everything else (later turn in the same round, or any
/// later round) is forward movement.
fn moved_backward(previous: CombatPosition, current: CombatPosition) -> bool {
    (current.turn <= previous.turn && current.round == previous.round)
        || current.round < previous.round
}
