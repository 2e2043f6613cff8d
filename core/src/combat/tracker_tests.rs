//! Tests for turn view derivation.
//!
//! Covers partitioning, buff back-references, the wrap-around special case,
//! unlinked effect merging, and the strict zero-hp rule.

use super::tracker::{
    ActorState, CombatDocument, CombatantEntry, PreviousActorTurn, TokenState, derive_turn_view,
};
use grimoire_types::{ActionFlags, CombatantFlags};

fn actor_turn(id: &str, hp: i64) -> CombatantEntry {
    CombatantEntry {
        id: id.to_string(),
        actor: Some(ActorState {
            hp_value: hp,
            effects: Vec::new(),
        }),
        ..CombatantEntry::default()
    }
}

fn buff_turn(id: &str) -> CombatantEntry {
    CombatantEntry {
        id: id.to_string(),
        flags: CombatantFlags {
            actor_name: Some(format!("{id}-owner")),
            actor_img: Some(format!("{id}-owner.png")),
        },
        ..CombatantEntry::default()
    }
}

fn active(mut entry: CombatantEntry) -> CombatantEntry {
    entry.active = true;
    entry
}

fn document(turns: Vec<CombatantEntry>) -> CombatDocument {
    CombatDocument { turns }
}

#[test]
fn partitions_actor_and_buff_turns() {
    let view = derive_turn_view(&document(vec![
        active(actor_turn("a", 20)),
        buff_turn("x"),
        actor_turn("b", 15),
        buff_turn("y"),
    ]));

    assert_eq!(view.actor_turns.len(), 2);
    assert_eq!(view.buff_turns.len(), 2);
    assert_eq!(view.actor_turns[0].id, "a");
    assert!(view.actor_turns[0].active);
    assert!(!view.actor_turns[1].active);
}

#[test]
fn buff_turns_back_reference_preceding_actor() {
    let view = derive_turn_view(&document(vec![
        buff_turn("pre"),
        actor_turn("a", 20),
        buff_turn("x"),
        buff_turn("y"),
        actor_turn("b", 15),
        buff_turn("z"),
    ]));

    assert_eq!(
        view.buff_turns[0].previous_actor_turn,
        PreviousActorTurn::WrapToFirst
    );
    assert_eq!(
        view.buff_turns[1].previous_actor_turn,
        PreviousActorTurn::Actor("a".to_string())
    );
    assert_eq!(
        view.buff_turns[2].previous_actor_turn,
        PreviousActorTurn::Actor("a".to_string())
    );
    assert_eq!(
        view.buff_turns[3].previous_actor_turn,
        PreviousActorTurn::Actor("b".to_string())
    );
}

#[test]
fn next_turn_buffs_follow_the_active_actor() {
    let view = derive_turn_view(&document(vec![
        active(actor_turn("a", 20)),
        buff_turn("x"),
        actor_turn("b", 15),
        buff_turn("y"),
    ]));

    let next: Vec<&str> = view.next_turn_buffs.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(next, vec!["x"]);
}

#[test]
fn wrap_around_surfaces_round_start_buffs_on_final_turn() {
    // A buff before any actor turn wraps to the round start; it is due
    // while the final actor turn is the active one.
    let view = derive_turn_view(&document(vec![
        buff_turn("z"),
        actor_turn("a", 20),
        active(actor_turn("b", 15)),
    ]));

    let next: Vec<&str> = view.next_turn_buffs.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(next, vec!["z"]);
}

#[test]
fn wrap_around_buffs_stay_hidden_mid_round() {
    let view = derive_turn_view(&document(vec![
        buff_turn("z"),
        active(actor_turn("a", 20)),
        actor_turn("b", 15),
    ]));

    assert!(view.next_turn_buffs.is_empty());
}

#[test]
fn buffs_only_combat_surfaces_round_start_buffs() {
    // With no actor turns, the active and final actor turns are equally
    // absent; every round-start buff counts as due next.
    let view = derive_turn_view(&document(vec![buff_turn("x"), buff_turn("y")]));

    assert!(view.actor_turns.is_empty());
    let next: Vec<&str> = view.next_turn_buffs.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(next, vec!["x", "y"]);
}

#[test]
fn no_active_turn_means_no_due_buffs() {
    let view = derive_turn_view(&document(vec![
        actor_turn("a", 20),
        buff_turn("x"),
    ]));

    assert!(view.next_turn_buffs.is_empty());
}

#[test]
fn zero_hp_is_strict_equality() {
    let view = derive_turn_view(&document(vec![
        actor_turn("at-zero", 0),
        actor_turn("wounded", 7),
        actor_turn("dying", -3),
    ]));

    assert!(view.actor_turns[0].zero_hp);
    assert!(!view.actor_turns[1].zero_hp);
    // Negative hit points are not "zero"; preserved host behavior.
    assert!(!view.actor_turns[2].zero_hp);
}

#[test]
fn unreported_turns_count_as_ended() {
    let mut reported = actor_turn("a", 20);
    reported.turn_ended = Some(false);

    let view = derive_turn_view(&document(vec![reported, actor_turn("b", 15)]));

    assert!(!view.actor_turns[0].ended);
    assert!(view.actor_turns[1].ended);
}

#[test]
fn unlinked_token_effects_merge_into_turn_effects() {
    let mut entry = actor_turn("a", 20);
    if let Some(actor) = &mut entry.actor {
        actor.effects = vec!["bless".to_string(), "haste".to_string()];
    }
    entry.token = Some(TokenState {
        effects: vec!["haste".to_string(), "poisoned".to_string()],
        overlay_effect: Some("unconscious".to_string()),
    });

    let view = derive_turn_view(&document(vec![entry]));

    let effects = &view.actor_turns[0].effects;
    assert_eq!(effects.len(), 4);
    assert!(effects.contains("bless"));
    assert!(effects.contains("haste"));
    assert!(effects.contains("poisoned"));
    assert!(effects.contains("unconscious"));
}

#[test]
fn buff_turns_carry_owner_display_flags() {
    let view = derive_turn_view(&document(vec![actor_turn("a", 20), buff_turn("x")]));

    assert_eq!(view.buff_turns[0].actor_name.as_deref(), Some("x-owner"));
    assert_eq!(view.buff_turns[0].actor_img.as_deref(), Some("x-owner.png"));
}

#[test]
fn action_flags_copy_through() {
    let mut entry = actor_turn("a", 20);
    entry.actions = ActionFlags {
        used_move_action: true,
        used_swift_action: true,
        ..ActionFlags::default()
    };

    let view = derive_turn_view(&document(vec![entry]));

    let actions = view.actor_turns[0].actions;
    assert!(actions.used_move_action);
    assert!(actions.used_swift_action);
    assert!(!actions.used_attack_action);
    assert!(!actions.used_all_aao);
}
