use super::support::{append_row, config, ACTION_WIDTH};
use swipelist::config::{DragMode, SwipeConfig};
use swipelist::constants::{CONTENT_CLASS, ROW_CLASS, SWIPING_CLASS};
use swipelist::surface::{ElementSpec, Surface};
use swipelist::swipe::row::{is_row_open, row_offset};
use swipelist::swipe::{Commit, GestureTracker, RowRegistry, SwipeController};

fn setup() -> (Surface, RowRegistry) {
    (Surface::new(), RowRegistry::new(config()).unwrap())
}

#[test]
fn test_threshold_boundary_commits_open() {
    let (mut surface, mut registry) = setup();
    let root = surface.root();
    let row = append_row(&mut surface, root, "1");
    let mut tracker = GestureTracker::attach(row, &surface);

    tracker.on_drag_start(100, &mut surface, &mut registry);
    assert_eq!(tracker.on_drag_end(140, &mut surface, &mut registry), Some(Commit::Open));
    assert!(is_row_open(&surface, row));
    assert_eq!(row_offset(&surface, row), ACTION_WIDTH);
    assert_eq!(registry.open_row(&surface), Some(row));
}

#[test]
fn test_one_short_of_threshold_commits_closed() {
    let (mut surface, mut registry) = setup();
    let root = surface.root();
    let row = append_row(&mut surface, root, "1");
    let mut tracker = GestureTracker::attach(row, &surface);

    tracker.on_drag_start(100, &mut surface, &mut registry);
    tracker.on_drag_move(139, &mut surface, &registry);
    assert_eq!(tracker.on_drag_end(139, &mut surface, &mut registry), Some(Commit::Closed));
    assert!(!is_row_open(&surface, row));
    assert_eq!(row_offset(&surface, row), 0);
    assert_eq!(registry.open_row(&surface), None);
}

#[test]
fn test_moves_and_ends_without_session_are_ignored() {
    let (mut surface, mut registry) = setup();
    let root = surface.root();
    let row = append_row(&mut surface, root, "1");
    let mut tracker = GestureTracker::attach(row, &surface);

    assert!(!tracker.on_drag_move(180, &mut surface, &registry));
    assert_eq!(tracker.on_drag_end(180, &mut surface, &mut registry), None);
    assert_eq!(row_offset(&surface, row), 0);
    assert!(surface.data(row, "open").is_none());
}

#[test]
fn test_offset_stays_within_bounds_on_every_move() {
    let (mut surface, mut registry) = setup();
    let root = surface.root();
    let row = append_row(&mut surface, root, "1");
    let content = surface.find_descendant(row, CONTENT_CLASS).unwrap();
    let mut tracker = GestureTracker::attach(row, &surface);

    // Small linear congruential walk over pointer positions
    let mut seed: i64 = 17;
    for _ in 0..20 {
        tracker.on_drag_start(500, &mut surface, &mut registry);
        for _ in 0..25 {
            seed = (seed * 1_103_515_245 + 12_345) % 2_147_483_648;
            let x = 500 + (seed % 301) as i32 - 150;
            assert!(tracker.on_drag_move(x, &mut surface, &registry));
            let applied = surface.transform(content).unwrap_or(0);
            assert!((0..=ACTION_WIDTH).contains(&applied), "offset {} out of range", applied);
        }
        let end = 500 + (seed % 121) as i32 - 60;
        tracker.on_drag_end(end, &mut surface, &mut registry);
    }
}

#[test]
fn test_drag_from_open_state_starts_at_action_width() {
    let (mut surface, mut registry) = setup();
    let root = surface.root();
    let row = append_row(&mut surface, root, "1");
    let mut tracker = GestureTracker::attach(row, &surface);
    registry.request_open(row, &mut surface);

    tracker.on_drag_start(200, &mut surface, &mut registry);
    assert_eq!(tracker.session().map(|s| s.base_offset), Some(ACTION_WIDTH));

    // Leftward drag previews closing in symmetric mode
    tracker.on_drag_move(180, &mut surface, &registry);
    assert_eq!(row_offset(&surface, row), 30);

    // Final offset 45 is still past the threshold
    assert_eq!(tracker.on_drag_end(195, &mut surface, &mut registry), Some(Commit::Open));
    assert_eq!(row_offset(&surface, row), ACTION_WIDTH);
}

#[test]
fn test_leftward_release_closes_open_row() {
    let (mut surface, mut registry) = setup();
    let root = surface.root();
    let row = append_row(&mut surface, root, "1");
    let mut tracker = GestureTracker::attach(row, &surface);
    registry.request_open(row, &mut surface);

    tracker.on_drag_start(200, &mut surface, &mut registry);
    assert_eq!(tracker.on_drag_end(185, &mut surface, &mut registry), Some(Commit::Closed));
    assert!(!is_row_open(&surface, row));
    assert_eq!(row_offset(&surface, row), 0);
}

#[test]
fn test_reveal_only_mode_holds_offset_on_leftward_drag() {
    let mut surface = Surface::new();
    let mut registry = RowRegistry::new(SwipeConfig {
        drag_mode: DragMode::RevealOnly,
        ..config()
    })
    .unwrap();
    let root = surface.root();
    let row = append_row(&mut surface, root, "1");
    let mut tracker = GestureTracker::attach(row, &surface);
    registry.request_open(row, &mut surface);

    tracker.on_drag_start(200, &mut surface, &mut registry);
    tracker.on_drag_move(160, &mut surface, &registry);
    assert_eq!(row_offset(&surface, row), ACTION_WIDTH);

    // The release still decides on the real travel
    assert_eq!(tracker.on_drag_end(160, &mut surface, &mut registry), Some(Commit::Closed));
    assert_eq!(row_offset(&surface, row), 0);
}

#[test]
fn test_gesture_marker_present_only_while_dragging() {
    let (mut surface, mut registry) = setup();
    let root = surface.root();
    let row = append_row(&mut surface, root, "1");
    let mut tracker = GestureTracker::attach(row, &surface);

    tracker.on_drag_start(0, &mut surface, &mut registry);
    assert!(surface.has_class(row, SWIPING_CLASS));
    assert!(tracker.is_active());
    tracker.on_drag_end(10, &mut surface, &mut registry);
    assert!(!surface.has_class(row, SWIPING_CLASS));
    assert!(!tracker.is_active());
}

#[test]
fn test_abandoned_drag_keeps_last_offset() {
    let (mut surface, mut registry) = setup();
    let root = surface.root();
    let row = append_row(&mut surface, root, "1");
    let mut tracker = GestureTracker::attach(row, &surface);

    tracker.on_drag_start(0, &mut surface, &mut registry);
    tracker.on_drag_move(25, &mut surface, &registry);
    tracker.abandon(&mut surface);

    assert!(!tracker.is_active());
    assert_eq!(row_offset(&surface, row), 25);
    assert!(!is_row_open(&surface, row));
    assert!(!surface.has_class(row, SWIPING_CLASS));
}

#[test]
fn test_row_without_content_region_still_commits() {
    let (mut surface, mut registry) = setup();
    let root = surface.root();
    let row = surface
        .append(root, ElementSpec::new().class(ROW_CLASS).data("id", "3"))
        .unwrap();
    let mut tracker = GestureTracker::attach(row, &surface);

    tracker.on_drag_start(0, &mut surface, &mut registry);
    assert!(tracker.on_drag_move(45, &mut surface, &registry));
    assert_eq!(tracker.on_drag_end(45, &mut surface, &mut registry), Some(Commit::Open));
    assert!(is_row_open(&surface, row));
    assert_eq!(row_offset(&surface, row), 0);
}

#[test]
fn test_out_of_bounds_config_is_rejected() {
    let negative_width = SwipeConfig {
        threshold: 10,
        action_width: -5,
        drag_mode: DragMode::Symmetric,
    };
    assert!(RowRegistry::new(negative_width).is_err());
    assert!(SwipeController::new(negative_width).is_err());

    let unreachable = SwipeConfig {
        threshold: ACTION_WIDTH + 1,
        ..config()
    };
    assert!(RowRegistry::new(unreachable).is_err());
    assert!(SwipeController::new(unreachable).is_err());

    let zero_threshold = SwipeConfig {
        threshold: 0,
        ..config()
    };
    assert!(SwipeController::new(zero_threshold).is_err());
}

#[test]
fn test_extreme_pointer_positions_stay_in_bounds() {
    let (mut surface, mut registry) = setup();
    let root = surface.root();
    let row = append_row(&mut surface, root, "1");
    let mut tracker = GestureTracker::attach(row, &surface);

    tracker.on_drag_start(i32::MIN, &mut surface, &mut registry);
    assert!(tracker.on_drag_move(i32::MAX, &mut surface, &registry));
    assert_eq!(row_offset(&surface, row), ACTION_WIDTH);
    assert_eq!(tracker.on_drag_end(i32::MAX, &mut surface, &mut registry), Some(Commit::Open));

    tracker.on_drag_start(i32::MAX, &mut surface, &mut registry);
    assert!(tracker.on_drag_move(i32::MIN, &mut surface, &registry));
    assert_eq!(row_offset(&surface, row), 0);
    assert_eq!(tracker.on_drag_end(i32::MIN, &mut surface, &mut registry), Some(Commit::Closed));
}
