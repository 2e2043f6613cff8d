//! Per-combatant flag bags read from turn-tracker entries.

use serde::{Deserialize, Serialize};

/// Action-economy usage for one actor turn.
///
/// `used_all_aao` marks that every attack of opportunity for the round has
/// been spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActionFlags {
    #[serde(default)]
    pub used_move_action: bool,
    #[serde(default)]
    pub used_attack_action: bool,
    #[serde(default)]
    pub used_swift_action: bool,
    #[serde(default)]
    pub used_all_aao: bool,
}

/// Display metadata stamped on a combatant by the host module.
///
/// Buff pseudo-turns have no actor of their own; their tracker row is drawn
/// from the originating actor's name and portrait stored here.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CombatantFlags {
    #[serde(default)]
    pub actor_name: Option<String>,
    #[serde(default)]
    pub actor_img: Option<String>,
}
