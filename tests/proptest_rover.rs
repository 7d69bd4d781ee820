//! Property-based tests for rover navigation.
//!
//! Random command strings are driven across small plateaus and the
//! occupancy invariants are checked after every run.
//!
//! Run with: cargo test -- proptest

use glam::IVec2;
use plateau_rover::{Heading, Plateau, Rotation, Rover};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

fn arb_heading() -> impl Strategy<Value = Heading> {
    prop::sample::select(Heading::ALL.to_vec())
}

/// Command strings over the standard alphabet, mixed case.
fn arb_commands() -> impl Strategy<Value = String> {
    "[LRMlrm]{0,40}"
}

/// A plateau size and a cell inside it.
fn arb_plateau_and_cell() -> impl Strategy<Value = (i32, i32, IVec2)> {
    (0..8i32, 0..8i32).prop_flat_map(|(w, h)| {
        (Just(w), Just(h), (0..=w, 0..=h).prop_map(|(x, y)| IVec2::new(x, y)))
    })
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn proptest_full_turn_restores_heading(heading in arb_heading(), right in any::<bool>()) {
        let mut plateau = Plateau::new(0, 0).unwrap();
        let mut rover = Rover::spawn(IVec2::ZERO, heading, &mut plateau, None).unwrap();
        let rotation = if right { Rotation::Right } else { Rotation::Left };

        for _ in 0..4 {
            rover.rotate(rotation);
            prop_assert_eq!(rover.position(), IVec2::ZERO);
        }
        prop_assert_eq!(rover.heading(), heading);
    }

    #[test]
    fn proptest_rover_never_leaves_plateau(
        (w, h, start) in arb_plateau_and_cell(),
        heading in arb_heading(),
        commands in arb_commands(),
    ) {
        let mut plateau = Plateau::new(w, h).unwrap();
        let mut rover = Rover::spawn(start, heading, &mut plateau, None).unwrap();

        let state = match rover.explore(&mut plateau, &commands) {
            Ok(state) => state,
            Err(halt) => halt.state,
        };

        prop_assert_eq!(state, rover.state());
        prop_assert!(plateau.contains(rover.position()));
        prop_assert_eq!(plateau.occupied().collect::<Vec<_>>(), vec![rover.position()]);
    }

    #[test]
    fn proptest_two_rovers_never_share_a_cell(
        first in arb_commands(),
        second in arb_commands(),
    ) {
        let mut plateau = Plateau::new(3, 3).unwrap();
        let mut a = Rover::spawn(IVec2::new(0, 0), Heading::North, &mut plateau, Some(1)).unwrap();
        let mut b = Rover::spawn(IVec2::new(3, 3), Heading::South, &mut plateau, Some(2)).unwrap();

        let _ = a.explore(&mut plateau, &first);
        let _ = b.explore(&mut plateau, &second);

        prop_assert_ne!(a.position(), b.position());
        prop_assert!(plateau.is_occupied(a.position()));
        prop_assert!(plateau.is_occupied(b.position()));
        prop_assert_eq!(plateau.occupied().count(), 2);
    }

    #[test]
    fn proptest_invalid_string_changes_nothing(
        prefix in arb_commands(),
        bad in "[^LRMlrm]",
        suffix in arb_commands(),
    ) {
        let mut plateau = Plateau::new(5, 5).unwrap();
        let mut rover = Rover::spawn(IVec2::new(2, 2), Heading::East, &mut plateau, None).unwrap();
        let before = rover.state();

        let commands = format!("{prefix}{bad}{suffix}");
        let err = rover.explore(&mut plateau, &commands).unwrap_err();

        prop_assert_eq!(err.step, prefix.chars().count());
        prop_assert_eq!(rover.state(), before);
        prop_assert_eq!(plateau.occupied().collect::<Vec<_>>(), vec![IVec2::new(2, 2)]);
        prop_assert_eq!(plateau.trail_at(IVec2::new(2, 2)), None);
    }
}
