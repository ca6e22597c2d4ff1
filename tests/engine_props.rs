//! Property tests for the path engine over arbitrary pointer gestures.

mod common;

use std::collections::HashSet;
use std::num::NonZero;

use flowpath::shape::{SquareStep, Step};
use flowpath::{Color, InputEvent, Level, LevelBuilder, Location, Path, PathEngine};
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use strum::VariantArray;

use common::{init_logging, proptest_config};

#[derive(Clone, Copy, Debug)]
enum Gesture {
    Press(Location),
    Step(SquareStep),
    Jump(Location),
    Release,
    Restart,
}

fn level() -> Level {
    LevelBuilder::with_dims((NonZero::new(4).unwrap(), NonZero::new(4).unwrap()))
        .add_termini(Color::Red, (Location(0, 0), Location(0, 3)))
        .add_termini(Color::Blue, (Location(1, 0), Location(3, 3)))
        .add_termini(Color::Green, (Location(3, 0), Location(2, 2)))
        .build()
        .unwrap()
}

fn location() -> impl Strategy<Value = Location> {
    // a little past the grid so out of bounds input shows up
    (0usize..6, 0usize..6).prop_map(|(row, col)| Location(row, col))
}

fn gesture() -> impl Strategy<Value = Gesture> {
    prop_oneof![
        2 => location().prop_map(Gesture::Press),
        12 => prop::sample::select(SquareStep::VARIANTS).prop_map(Gesture::Step),
        1 => location().prop_map(Gesture::Jump),
        2 => Just(Gesture::Release),
    ]
}

fn gesture_or_restart() -> impl Strategy<Value = Gesture> {
    prop_oneof![
        17 => gesture(),
        1 => Just(Gesture::Restart),
    ]
}

/// Turn gestures into engine events the way a pointer would produce them.
fn events(gestures: &[Gesture]) -> Vec<InputEvent> {
    let mut pointer = Location(0, 0);
    gestures.iter()
        .map(|gesture| match *gesture {
            Gesture::Press(location) => {
                pointer = location;
                InputEvent::PointerDown(location)
            }
            Gesture::Step(direction) => {
                pointer = direction.attempt_from(pointer);
                InputEvent::PointerMove(pointer)
            }
            Gesture::Jump(location) => {
                pointer = location;
                InputEvent::PointerMove(location)
            }
            Gesture::Release => InputEvent::PointerUp,
            Gesture::Restart => InputEvent::Restart,
        })
        .collect()
}

fn check_path(level: &Level, path: &Path) -> Result<(), TestCaseError> {
    let (a, b) = level.termini(path.color()).unwrap();
    prop_assert!(path.first() == a || path.first() == b, "path must start on a terminus");

    let distinct: HashSet<&Location> = path.iter().collect();
    prop_assert_eq!(distinct.len(), path.len(), "path repeats a location");

    for location in path {
        prop_assert!(level.contains(*location));
    }
    for (from, to) in path.steps() {
        prop_assert_eq!(from.manhattan_distance(to), 1, "{} and {} are not neighbours", from, to);
    }

    Ok(())
}

fn check_engine(engine: &PathEngine) -> Result<(), TestCaseError> {
    let level = engine.level();

    if let Some(active) = engine.active() {
        check_path(level, active)?;
    }

    for (color, path) in engine.completed() {
        prop_assert_eq!(*color, path.color());
        check_path(level, path)?;
        prop_assert!(path.len() >= 2);
        prop_assert_eq!(level.partner_of(*color, path.first()), Some(path.last()),
            "committed path must end on the other terminus");
    }

    let every_color_done = level.colors().all(|color| engine.completed_path(color).is_some());
    prop_assert_eq!(engine.is_solved(), every_color_done);
    prop_assert_eq!(engine.snapshot().is_solved(), every_color_done);

    Ok(())
}

proptest! {
    #![proptest_config(proptest_config())]

    /// Property: path invariants hold after every single event, whatever the input.
    #[test]
    fn prop_invariants_hold_after_every_event(gestures in prop::collection::vec(gesture_or_restart(), 0..200)) {
        init_logging();
        let mut engine = PathEngine::new(level());

        for event in events(&gestures) {
            engine.handle(event);
            check_engine(&engine)?;
        }
    }

    /// Property: without a restart, completed flows are never lost.
    #[test]
    fn prop_completed_flows_only_grow(gestures in prop::collection::vec(gesture(), 0..200)) {
        init_logging();
        let mut engine = PathEngine::new(level());
        let mut solved: HashSet<Color> = HashSet::new();

        for event in events(&gestures) {
            engine.handle(event);
            let now: HashSet<Color> = engine.completed().keys().copied().collect();
            prop_assert!(now.is_superset(&solved));
            solved = now;
        }
    }

    /// Property: releasing always leaves the engine idle.
    #[test]
    fn prop_release_returns_to_idle(gestures in prop::collection::vec(gesture_or_restart(), 0..100)) {
        init_logging();
        let mut engine = PathEngine::new(level());

        for event in events(&gestures) {
            engine.handle(event);
        }
        engine.handle(InputEvent::PointerUp);

        prop_assert!(!engine.is_dragging());
    }

    /// Property: reset restores the freshly loaded state regardless of history.
    #[test]
    fn prop_reset_restores_initial_state(gestures in prop::collection::vec(gesture_or_restart(), 0..200)) {
        init_logging();
        let mut engine = PathEngine::new(level());
        let before = format!("{}", engine.snapshot());

        for event in events(&gestures) {
            engine.handle(event);
        }
        engine.reset();

        prop_assert!(engine.completed().is_empty());
        prop_assert!(engine.active().is_none());
        prop_assert!(!engine.is_solved());
        prop_assert_eq!(format!("{}", engine.snapshot()), before);
        prop_assert_eq!(engine.level().flow_count(), 3);
    }

    /// Property: a press away from every terminus never starts a path from idle.
    #[test]
    fn prop_press_on_plain_location_stays_idle(location in location()) {
        init_logging();
        let mut engine = PathEngine::new(level());

        engine.begin_path(location);

        prop_assert_eq!(engine.is_dragging(), engine.level().terminus_at(location).is_some());
    }
}

#[test]
fn solving_in_any_order_wins() {
    init_logging();
    let red = [(0, 0), (0, 1), (0, 2), (0, 3)];
    let blue = [(3, 3), (2, 3), (1, 3), (1, 2), (1, 1), (1, 0)];
    let green = [(3, 0), (3, 1), (3, 2), (2, 2)];

    for order in [[&red[..], &blue[..], &green[..]], [&green[..], &red[..], &blue[..]], [&blue[..], &green[..], &red[..]]] {
        let mut engine = PathEngine::new(level());
        for (i, flow) in order.iter().enumerate() {
            assert!(!engine.is_solved());
            engine.handle(InputEvent::PointerDown(Location(flow[0].0, flow[0].1)));
            for (row, col) in &flow[1..] {
                engine.handle(InputEvent::PointerMove(Location(*row, *col)));
            }
            engine.handle(InputEvent::PointerUp);
            assert_eq!(engine.progress(), (i + 1, 3));
        }
        assert!(engine.is_solved());
    }
}
