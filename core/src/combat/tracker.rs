//! Turn list partitioning and action-economy flags.
//!
//! Each tracker entry is either a real actor turn or a buff pseudo-turn
//! standing in for a timed effect. The derivation walks the list once: an
//! "active" pointer advances through actor turns each round, and every buff
//! turn is stamped with a back-reference to the actor turn it trails. The
//! buffs surfaced as due-next are those back-referencing the active actor
//! turn — or, at the round boundary, those referencing the round start when
//! the active actor turn is also the last one.

use std::collections::HashSet;

use grimoire_types::{ActionFlags, CombatantFlags};

/// Position of the combat tracker, used by the aura scheduler's
/// backward-guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombatPosition {
    pub turn: u32,
    pub round: u32,
}

/// Actor-side state resolved from a combatant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActorState {
    pub hp_value: i64,
    /// Actor-level status effect icons.
    pub effects: Vec<String>,
}

/// Token-side state resolved from a combatant.
///
/// Unlinked (token-level) effects live here; the host's default tracker
/// view does not include them, so the derivation merges them in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenState {
    pub effects: Vec<String>,
    pub overlay_effect: Option<String>,
}

/// One raw turn entry, already resolved to its combatant.
#[derive(Debug, Clone, Default)]
pub struct CombatantEntry {
    pub id: String,
    pub active: bool,
    /// `None` for buff pseudo-turns, which have no actor of their own.
    pub actor: Option<ActorState>,
    pub token: Option<TokenState>,
    /// Whether the combatant reported its turn as ended. Unreported turns
    /// count as ended.
    pub turn_ended: Option<bool>,
    pub actions: ActionFlags,
    pub flags: CombatantFlags,
}

/// Ordered raw turn list for one combat encounter.
#[derive(Debug, Clone, Default)]
pub struct CombatDocument {
    pub turns: Vec<CombatantEntry>,
}

/// Back-reference from a buff pseudo-turn to the actor turn it trails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PreviousActorTurn {
    /// No actor turn precedes this buff; it wraps to the start of the round.
    #[default]
    WrapToFirst,
    /// Id of the closest preceding actor turn.
    Actor(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorTurnView {
    pub id: String,
    pub active: bool,
    pub ended: bool,
    pub effects: HashSet<String>,
    pub actions: ActionFlags,
    /// Strictly `hp == 0`; negative hit points do not count.
    pub zero_hp: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuffTurnView {
    pub id: String,
    pub ended: bool,
    pub effects: HashSet<String>,
    pub previous_actor_turn: PreviousActorTurn,
    pub actor_name: Option<String>,
    pub actor_img: Option<String>,
}

/// Partitioned tracker view model.
#[derive(Debug, Clone, Default)]
pub struct TurnViewModel {
    pub actor_turns: Vec<ActorTurnView>,
    pub buff_turns: Vec<BuffTurnView>,
    /// Buff turns due when the currently active actor turn ends.
    pub next_turn_buffs: Vec<BuffTurnView>,
}

/// Derive the tracker view model from a raw turn list.
///
/// Pure function of its input; the document is the host's authoritative
/// state and is read once per render request.
pub fn derive_turn_view(document: &CombatDocument) -> TurnViewModel {
    let mut actor_turns = Vec::new();
    let mut buff_turns: Vec<BuffTurnView> = Vec::new();

    let mut previous = PreviousActorTurn::WrapToFirst;
    let mut active_actor_turn_id: Option<String> = None;
    let mut final_actor_turn_id: Option<String> = None;

    for entry in &document.turns {
        let effects = merged_effects(entry);
        let ended = entry.turn_ended.unwrap_or(true);

        if let Some(actor) = &entry.actor {
            previous = PreviousActorTurn::Actor(entry.id.clone());
            final_actor_turn_id = Some(entry.id.clone());
            if entry.active {
                active_actor_turn_id = Some(entry.id.clone());
            }
            actor_turns.push(ActorTurnView {
                id: entry.id.clone(),
                active: entry.active,
                ended,
                effects,
                actions: entry.actions,
                zero_hp: actor.hp_value == 0,
            });
        } else {
            buff_turns.push(BuffTurnView {
                id: entry.id.clone(),
                ended,
                effects,
                previous_actor_turn: previous.clone(),
                actor_name: entry.flags.actor_name.clone(),
                actor_img: entry.flags.actor_img.clone(),
            });
        }
    }

    let next_turn_buffs = collect_next_turn_buffs(
        &buff_turns,
        active_actor_turn_id.as_deref(),
        final_actor_turn_id.as_deref(),
    );

    TurnViewModel {
        actor_turns,
        buff_turns,
        next_turn_buffs,
    }
}

/// Actor-level effects plus unlinked token effects plus the token overlay.
fn merged_effects(entry: &CombatantEntry) -> HashSet<String> {
    let mut effects = HashSet::new();
    if let Some(actor) = &entry.actor {
        effects.extend(actor.effects.iter().cloned());
    }
    if let Some(token) = &entry.token {
        effects.extend(token.effects.iter().cloned());
        if let Some(overlay) = &token.overlay_effect {
            effects.insert(overlay.clone());
        }
    }
    effects
}

/// Buffs trailing the active actor turn, plus — wrap-around — buffs ahead
/// of the first actor turn when the active turn is also the final one.
///
/// A tracker with no actor turns at all satisfies the wrap-around
/// condition (active and final are equally absent), so round-start buffs
/// are surfaced in a buffs-only combat.
fn collect_next_turn_buffs(
    buff_turns: &[BuffTurnView],
    active_actor_turn_id: Option<&str>,
    final_actor_turn_id: Option<&str>,
) -> Vec<BuffTurnView> {
    let wraps_this_turn = final_actor_turn_id == active_actor_turn_id;

    buff_turns
        .iter()
        .filter(|buff| match &buff.previous_actor_turn {
            PreviousActorTurn::Actor(id) => active_actor_turn_id == Some(id.as_str()),
            PreviousActorTurn::WrapToFirst => wraps_this_turn,
        })
        .cloned()
        .collect()
}
