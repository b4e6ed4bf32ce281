//! Intent flag edge semantics and the look accumulator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::intent::*;

const EDGES: [ActivationEdge; 3] = [
    ActivationEdge::Pressed,
    ActivationEdge::Held,
    ActivationEdge::Released,
];

#[test]
fn test_hold_flag_tracks_last_edge() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..200 {
        let mut intent = InputIntentState::default();
        let mut expected = false;

        for _ in 0..rng.random_range(1..40) {
            let edge = EDGES[rng.random_range(0..EDGES.len())];
            intent.set_flag(IntentFlag::MoveForward, ActivationMode::Hold, edge);
            expected = edge != ActivationEdge::Released;

            assert_eq!(
                intent.is_set(IntentFlag::MoveForward),
                expected,
                "Hold flag should be set iff no release followed the last press/hold"
            );
        }

        assert_eq!(intent.is_set(IntentFlag::MoveForward), expected);
    }
}

#[test]
fn test_tap_flag_is_seen_once_per_press() {
    let mut intent = InputIntentState::default();

    intent.set_flag(IntentFlag::Jump, ActivationMode::Tap, ActivationEdge::Pressed);
    assert!(intent.is_jumping(), "Tap should be visible to the first read");
    intent.consume_taps();

    // Key still down, but no new press edge: never true again.
    for _ in 0..10 {
        assert!(!intent.is_jumping(), "Tap must not re-trigger while held");
        intent.set_flag(IntentFlag::Jump, ActivationMode::Tap, ActivationEdge::Held);
        intent.consume_taps();
    }

    intent.set_flag(IntentFlag::Jump, ActivationMode::Tap, ActivationEdge::Released);
    intent.set_flag(IntentFlag::Jump, ActivationMode::Tap, ActivationEdge::Pressed);
    assert!(intent.is_jumping(), "A new press edge should latch again");
}

#[test]
fn test_tap_flag_cleared_without_further_events() {
    let mut intent = InputIntentState::default();

    intent.set_flag(IntentFlag::Jump, ActivationMode::Tap, ActivationEdge::Pressed);
    intent.consume_taps();

    assert!(!intent.is_jumping());
}

#[test]
fn test_tap_reads_per_press_edge_random() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut intent = InputIntentState::default();
    let mut presses = 0;
    let mut reads = 0;

    for _ in 0..500 {
        // Zero or more events between ticks.
        for _ in 0..rng.random_range(0..3) {
            let edge = EDGES[rng.random_range(0..EDGES.len())];
            if edge == ActivationEdge::Pressed {
                presses += 1;
                intent.set_flag(IntentFlag::Jump, ActivationMode::Tap, edge);
                // A tick always runs before the next edge in this model.
                break;
            }
            intent.set_flag(IntentFlag::Jump, ActivationMode::Tap, edge);
        }

        if intent.is_jumping() {
            reads += 1;
        }
        intent.consume_taps();
    }

    assert_eq!(reads, presses, "Each press edge should be read exactly once");
}

#[test]
fn test_toggle_flips_on_release_only() {
    let mut intent = InputIntentState::default();

    intent.set_flag(IntentFlag::Walk, ActivationMode::Toggle, ActivationEdge::Pressed);
    intent.set_flag(IntentFlag::Walk, ActivationMode::Toggle, ActivationEdge::Held);
    assert!(!intent.is_walking(), "Press and hold should not toggle");

    intent.set_flag(IntentFlag::Walk, ActivationMode::Toggle, ActivationEdge::Released);
    assert!(intent.is_walking(), "Release should toggle on");

    intent.consume_taps();
    assert!(intent.is_walking(), "Toggle flags are not consumed by reads");

    intent.set_flag(IntentFlag::Walk, ActivationMode::Toggle, ActivationEdge::Pressed);
    intent.set_flag(IntentFlag::Walk, ActivationMode::Toggle, ActivationEdge::Released);
    assert!(!intent.is_walking(), "Second release should toggle off");
}

#[test]
fn test_consume_taps_keeps_hold_flags() {
    let mut intent = InputIntentState::default();
    intent.set_flag(IntentFlag::MoveLeft, ActivationMode::Hold, ActivationEdge::Pressed);
    intent.set_flag(IntentFlag::Jump, ActivationMode::Tap, ActivationEdge::Pressed);

    intent.consume_taps();

    assert!(intent.is_set(IntentFlag::MoveLeft));
    assert!(!intent.is_jumping());
}

#[test]
fn test_flags_are_independent() {
    let mut intent = InputIntentState::default();
    for flag in IntentFlag::ALL {
        intent.set_flag(flag, ActivationMode::Hold, ActivationEdge::Pressed);
    }
    intent.set_flag(IntentFlag::MoveBack, ActivationMode::Hold, ActivationEdge::Released);

    for flag in IntentFlag::ALL {
        assert_eq!(intent.is_set(flag), flag != IntentFlag::MoveBack, "{flag:?}");
    }
}

#[test]
fn test_look_accumulates_inverted() {
    let mut intent = InputIntentState::default();
    intent.accumulate_look(3.0, -2.0);
    intent.accumulate_look(1.0, 0.5);

    let delta = intent.consume_look();
    assert_eq!(delta, LookDelta::new(-4.0, 1.5));
}

#[test]
fn test_consume_look_twice_returns_zero() {
    let mut intent = InputIntentState::default();
    intent.accumulate_look(10.0, 10.0);

    assert!(!intent.consume_look().is_zero());
    assert_eq!(intent.consume_look(), LookDelta::ZERO);
}

#[test]
fn test_clear_empties_everything() {
    let mut intent = InputIntentState::default();
    intent.set_flag(IntentFlag::MoveRight, ActivationMode::Hold, ActivationEdge::Held);
    intent.set_flag(IntentFlag::Jump, ActivationMode::Tap, ActivationEdge::Pressed);
    intent.accumulate_look(5.0, 5.0);
    assert!(!intent.is_empty());

    intent.clear();

    assert!(intent.is_empty());
    assert_eq!(intent, InputIntentState::default());
}
