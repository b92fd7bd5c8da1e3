use super::support::append_row;
use swipelist::constants::{ATTR_INITIALIZED, ROW_CLASS};
use swipelist::surface::{ElementSpec, Surface};
use swipelist::swipe::AttachmentObserver;

#[test]
fn test_attaches_rows_present_at_startup() {
    let mut surface = Surface::new();
    let root = surface.root();
    let a = append_row(&mut surface, root, "1");
    let b = append_row(&mut surface, root, "2");

    let observer = AttachmentObserver::observe(&mut surface);

    assert_eq!(observer.attached_count(), 2);
    assert!(observer.is_attached(a));
    assert!(observer.is_attached(b));
    assert_eq!(surface.data(a, ATTR_INITIALIZED), Some("true"));
}

#[test]
fn test_rescan_is_idempotent() {
    let mut surface = Surface::new();
    let root = surface.root();
    append_row(&mut surface, root, "1");
    let mut observer = AttachmentObserver::observe(&mut surface);

    assert_eq!(observer.scan(&mut surface), 0);
    assert_eq!(observer.scan(&mut surface), 0);
    assert_eq!(observer.attached_count(), 1);
}

#[test]
fn test_rows_inserted_later_are_attached_on_pump() {
    let mut surface = Surface::new();
    let root = surface.root();
    let list = surface.append(root, ElementSpec::new()).unwrap();
    let mut observer = AttachmentObserver::observe(&mut surface);
    assert_eq!(observer.attached_count(), 0);

    // Deep insert: the row lands two levels below the observed root
    let group = surface.append(list, ElementSpec::new()).unwrap();
    let row = append_row(&mut surface, group, "9");
    assert!(!observer.is_attached(row));

    assert_eq!(observer.pump(&mut surface), 1);
    assert!(observer.is_attached(row));

    // Nothing changed since, so nothing to do
    assert_eq!(observer.pump(&mut surface), 0);
}

#[test]
fn test_unrelated_insertions_do_not_reattach() {
    let mut surface = Surface::new();
    let root = surface.root();
    let row = append_row(&mut surface, root, "1");
    let mut observer = AttachmentObserver::observe(&mut surface);

    surface.append(root, ElementSpec::new().class("banner"));
    assert_eq!(observer.pump(&mut surface), 0);
    assert_eq!(observer.attached_count(), 1);
    assert!(observer.tracker(row).is_some());
}

#[test]
fn test_marked_rows_are_skipped() {
    let mut surface = Surface::new();
    let root = surface.root();
    let marked = surface
        .append(
            root,
            ElementSpec::new().class(ROW_CLASS).data(ATTR_INITIALIZED, "true"),
        )
        .unwrap();

    let observer = AttachmentObserver::observe(&mut surface);
    assert!(!observer.is_attached(marked));
}

#[test]
fn test_trackers_of_removed_rows_are_dropped() {
    let mut surface = Surface::new();
    let root = surface.root();
    let row = append_row(&mut surface, root, "1");
    let mut observer = AttachmentObserver::observe(&mut surface);

    surface.remove(row);
    observer.pump(&mut surface);

    assert!(!observer.is_attached(row));
    assert_eq!(observer.attached_count(), 0);
}
