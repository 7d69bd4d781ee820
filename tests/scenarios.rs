// tests/scenarios.rs
use glam::IVec2;
use plateau_rover::{Heading, Plateau, Rover, RoverError, RoverState};

fn state(x: i32, y: i32, heading: Heading) -> RoverState {
    RoverState {
        position: IVec2::new(x, y),
        heading,
    }
}

#[test]
fn test_two_rovers_on_square_plateau() {
    let mut plateau = Plateau::new(5, 5).unwrap();

    let mut a = Rover::spawn(IVec2::new(1, 2), Heading::North, &mut plateau, Some(1)).unwrap();
    let final_a = a.explore(&mut plateau, "LMLMLMLMM").unwrap();
    assert_eq!(final_a, state(1, 3, Heading::North));
    assert_eq!(a.to_string(), "1 3 N");

    let mut b = Rover::spawn(IVec2::new(3, 3), Heading::East, &mut plateau, Some(2)).unwrap();
    let final_b = b.explore(&mut plateau, "MMRMMRMRRM").unwrap();
    assert_eq!(final_b, state(5, 1, Heading::East));
    assert_eq!(b.summary(), "position of rover 2: (5, 1, E)");
}

#[test]
fn test_three_rovers_on_wide_plateau() {
    let mut plateau = Plateau::new(8, 3).unwrap();

    let mut r1 = Rover::spawn(IVec2::new(0, 0), Heading::East, &mut plateau, None).unwrap();
    r1.explore(&mut plateau, "MMMLLMMRM").unwrap();
    assert_eq!(r1.to_string(), "1 1 N");

    let mut r2 = Rover::spawn(IVec2::new(3, 0), Heading::South, &mut plateau, None).unwrap();
    r2.explore(&mut plateau, "RRRMLMMMR").unwrap();
    assert_eq!(r2.to_string(), "4 3 E");

    let mut r3 = Rover::spawn(IVec2::new(8, 3), Heading::West, &mut plateau, None).unwrap();
    r3.explore(&mut plateau, "MRL").unwrap();
    assert_eq!(r3.to_string(), "7 3 W");
}

#[test]
fn test_spawn_outside_plateau_fails() {
    let mut plateau = Plateau::new(3, 4).unwrap();
    let err = Rover::spawn(IVec2::new(3, 5), Heading::North, &mut plateau, None).unwrap_err();

    assert_eq!(
        err,
        RoverError::OutOfBounds {
            position: IVec2::new(3, 5)
        }
    );
    assert_eq!(plateau.occupied().count(), 0);
}

#[test]
fn test_rover_stops_at_boundary() {
    let mut plateau = Plateau::new(3, 4).unwrap();
    let mut rover = Rover::spawn(IVec2::new(3, 2), Heading::North, &mut plateau, None).unwrap();

    let halt = rover.explore(&mut plateau, "MMM").unwrap_err();

    assert_eq!(halt.step, 2);
    assert_eq!(
        halt.kind(),
        &RoverError::OutOfBounds {
            position: IVec2::new(3, 5)
        }
    );
    assert_eq!(halt.state, state(3, 4, Heading::North));
    assert_eq!(rover.to_string(), "3 4 N");
    assert!(plateau.is_occupied(IVec2::new(3, 4)));
}

#[test]
fn test_spawn_on_occupied_cell_fails() {
    let mut plateau = Plateau::new(3, 4).unwrap();
    let _r1 = Rover::spawn(IVec2::new(3, 2), Heading::North, &mut plateau, Some(1)).unwrap();

    let err = Rover::spawn(IVec2::new(3, 2), Heading::East, &mut plateau, Some(2)).unwrap_err();
    assert_eq!(
        err,
        RoverError::PositionOccupied {
            position: IVec2::new(3, 2)
        }
    );
    assert_eq!(plateau.occupied().count(), 1);
}

#[test]
fn test_drive_into_other_rover_halts() {
    let mut plateau = Plateau::new(3, 4).unwrap();
    let r1 = Rover::spawn(IVec2::new(3, 2), Heading::North, &mut plateau, Some(1)).unwrap();
    let mut r2 = Rover::spawn(IVec2::new(1, 2), Heading::North, &mut plateau, Some(2)).unwrap();

    let halt = r2.explore(&mut plateau, "RMM").unwrap_err();

    assert_eq!(halt.step, 2);
    assert!(matches!(halt.error, RoverError::PositionOccupied { .. }));
    // The turn and the first step are kept.
    assert_eq!(r2.state(), state(2, 2, Heading::East));
    assert_eq!(r1.state(), state(3, 2, Heading::North));
    assert_ne!(r1.position(), r2.position());
}
