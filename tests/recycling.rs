//! Tests for open-state fidelity across instance recycling
//!
//! The same panel instance is rebound to different logical positions, as
//! a recycling list does; the coordinator must replay the right geometry
//! after every rebind without ever duplicating its adapters.

mod common;

use std::time::Duration;

use common::{open_by_gesture, record_events, settle, shared_panel, TestRow};
use swipecell::coordinator::{Policy, SwipeCoordinator};
use swipecell::events::SwipeEvent;
use swipecell::panel::{RevealMode, Status};

fn coordinator(policy: Policy) -> SwipeCoordinator {
    SwipeCoordinator::new(policy, Box::new(|| {}))
}

/// Bind the instance to a position and run the layout pass the host
/// performs on every rebind
fn rebind(coordinator: &mut SwipeCoordinator, row: &TestRow, position: usize) {
    coordinator.bind(row, position).unwrap();
    {
        let mut panel = row.panel.borrow_mut();
        panel.measure();
        panel.layout();
    }
    settle(&row.panel);
}

#[test]
fn test_recycled_instance_replays_position_intent() {
    let mut coordinator = coordinator(Policy::Multiple);
    let row = TestRow::new(shared_panel(RevealMode::PullOut, &[100, 100]));
    let mut clock = Duration::ZERO;

    // Bind to position 7 and open it by gesture
    rebind(&mut coordinator, &row, 7);
    open_by_gesture(&row.panel, &mut clock);
    assert!(coordinator.is_open(7));
    assert_eq!(row.panel.borrow().status(), Status::Open);

    // Recycle the same instance to position 9, which was never opened:
    // after the layout pass it must show the closed geometry
    rebind(&mut coordinator, &row, 9);
    assert_eq!(row.panel.borrow().status(), Status::Closed);
    assert!(coordinator.is_open(7), "position 7 stays recorded open");

    // Recycling back to position 7 restores the open geometry
    rebind(&mut coordinator, &row, 7);
    assert_eq!(row.panel.borrow().status(), Status::Open);
}

#[test]
fn test_rebinding_does_not_duplicate_listeners() {
    let mut coordinator = coordinator(Policy::Multiple);
    let row = TestRow::new(shared_panel(RevealMode::PullOut, &[100, 100]));
    let events = record_events(&row.panel);
    let mut clock = Duration::ZERO;

    rebind(&mut coordinator, &row, 7);
    open_by_gesture(&row.panel, &mut clock);
    events.borrow_mut().clear();

    let opens_per_cycle = |events: &[SwipeEvent]| {
        events
            .iter()
            .filter(|event| matches!(event, SwipeEvent::Open))
            .count()
    };

    // Each rebind cycle re-lays-out at rest and animates back open; with
    // a single attached adapter chain that is exactly one Open per cycle,
    // however many times the instance has been rebound before
    for cycle in 1..=5 {
        rebind(&mut coordinator, &row, 7);
        assert_eq!(
            opens_per_cycle(&events.borrow()),
            cycle,
            "event volume must stay linear in rebinds"
        );
    }
}

#[test]
fn test_rebind_repoints_the_recorded_position() {
    let mut coordinator = coordinator(Policy::Multiple);
    let row = TestRow::new(shared_panel(RevealMode::PullOut, &[100, 100]));
    let mut clock = Duration::ZERO;

    rebind(&mut coordinator, &row, 3);
    rebind(&mut coordinator, &row, 8);

    // The adapter must see the rebound position: opening by gesture now
    // records position 8, not the stale 3
    open_by_gesture(&row.panel, &mut clock);
    assert_eq!(coordinator.open_items(), vec![8]);
    assert!(!coordinator.is_open(3));
}

#[test]
fn test_two_instances_can_cover_many_positions() {
    let mut coordinator = coordinator(Policy::Single);
    let row_a = TestRow::new(shared_panel(RevealMode::PullOut, &[100, 100]));
    let row_b = TestRow::new(shared_panel(RevealMode::PullOut, &[100, 100]));
    let mut clock = Duration::ZERO;

    // Viewport shows positions 0 and 1
    rebind(&mut coordinator, &row_a, 0);
    rebind(&mut coordinator, &row_b, 1);
    open_by_gesture(&row_b.panel, &mut clock);
    assert_eq!(coordinator.open_items(), vec![1]);

    // Scroll: instance A now shows position 2, B shows position 3
    rebind(&mut coordinator, &row_a, 2);
    rebind(&mut coordinator, &row_b, 3);
    assert_eq!(row_a.panel.borrow().status(), Status::Closed);
    assert_eq!(row_b.panel.borrow().status(), Status::Closed);

    // Scroll back: B shows position 1 again and reopens
    rebind(&mut coordinator, &row_a, 0);
    rebind(&mut coordinator, &row_b, 1);
    assert_eq!(row_b.panel.borrow().status(), Status::Open);
    assert_eq!(coordinator.open_items(), vec![1]);
}
