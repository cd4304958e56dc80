//! Integration tests - Full announcement lifecycle
//!
//! Tests the complete workflow: mount → announce → observe → clear → unmount.

use herald::a11y::{live_regions, LivePoliteness, ScreenReaderOutput};
use herald::dom::Document;
use herald::{Announcer, AnnouncerConfig};

// ============================================================================
// RENDERED MARKUP CONTRACT
// ============================================================================

#[test]
fn test_announce_renders_expected_markup() {
    let mut doc = Document::new();
    let mut announcer = Announcer::new();
    announcer.mount(&mut doc);
    announcer.announce(&mut doc, Some("Submit button"));

    let regions = live_regions(&doc);
    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].text, "Submit button");
    assert_eq!(regions[0].politeness, LivePoliteness::Polite);
    assert!(regions[0].atomic);

    let tree = doc.tree();
    let node = regions[0].node;
    assert_eq!(tree.get_attr(node, "aria-live"), Some("polite"));
    assert_eq!(tree.get_attr(node, "role"), Some("region"));
    assert_eq!(tree.get_attr(node, "aria-atomic"), Some("true"));
    assert_eq!(tree.get_attr(node, "class"), Some("sr-only"));
}

#[test]
fn test_attributes_stable_across_updates() {
    let mut doc = Document::new();
    let mut announcer = Announcer::new();
    announcer.mount(&mut doc);

    let mut region_node = None;
    for content in ["Loading", "Loaded", "Saved"] {
        announcer.announce(&mut doc, Some(content));
        let regions = live_regions(&doc);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].text, content);
        assert_eq!(regions[0].politeness, LivePoliteness::Polite);
        assert!(regions[0].atomic);
        assert_eq!(doc.tree().get_attr(regions[0].node, "class"), Some("sr-only"));

        // The element assistive technology watches keeps its identity
        if let Some(node) = region_node {
            assert_eq!(regions[0].node, node);
        }
        region_node = Some(regions[0].node);
    }
}

#[test]
fn test_container_attached_to_body() {
    let mut doc = Document::new();
    let mut announcer = Announcer::new();
    announcer.mount(&mut doc);

    let container = announcer.container().unwrap();
    assert_eq!(doc.get_element_by_id("screen-reader-supporter"), Some(container));
    assert_eq!(doc.tree().get(container).unwrap().parent, doc.body());
}

// ============================================================================
// CONTENT UPDATE SEMANTICS
// ============================================================================

#[test]
fn test_sequential_announcements_render_last() {
    let mut doc = Document::new();
    let mut announcer = Announcer::new();
    announcer.mount(&mut doc);

    announcer.announce(&mut doc, Some("Loading"));
    announcer.announce(&mut doc, Some("Loaded"));

    let regions = live_regions(&doc);
    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].text, "Loaded");
}

#[test]
fn test_clear_keeps_last_rendered_text() {
    let mut doc = Document::new();
    let mut announcer = Announcer::new();
    announcer.mount(&mut doc);

    announcer.announce(&mut doc, Some("X"));
    announcer.clear(&mut doc, None);

    // State is empty, but the empty value suppresses rendering, so the
    // region still shows the last announcement.
    assert_eq!(announcer.content(), "");
    let regions = live_regions(&doc);
    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].text, "X");
}

#[test]
fn test_clear_with_content_behaves_like_announce() {
    let mut doc = Document::new();
    let mut announcer = Announcer::new();
    announcer.mount(&mut doc);

    announcer.announce(&mut doc, Some("Focused"));
    announcer.clear(&mut doc, Some("Left toolbar"));

    assert_eq!(announcer.content(), "Left toolbar");
    assert_eq!(live_regions(&doc)[0].text, "Left toolbar");
}

#[test]
fn test_announce_before_mount_renders_on_mount() {
    let mut doc = Document::new();
    let mut announcer = Announcer::new();

    announcer.announce(&mut doc, Some("Early"));
    assert!(live_regions(&doc).is_empty());

    announcer.mount(&mut doc);
    let regions = live_regions(&doc);
    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].text, "Early");
}

// ============================================================================
// LIFECYCLE ROBUSTNESS
// ============================================================================

#[test]
fn test_mount_twice_keeps_single_container() {
    let mut doc = Document::new();
    let mut announcer = Announcer::new();

    announcer.mount(&mut doc);
    let container = announcer.container();
    announcer.mount(&mut doc);

    assert_eq!(announcer.container(), container);
    assert_eq!(doc.tree().children(doc.body()).count(), 1);
}

#[test]
fn test_unmount_leaves_no_container() {
    let mut doc = Document::new();
    let mut announcer = Announcer::new();

    announcer.mount(&mut doc);
    announcer.announce(&mut doc, Some("Going away"));
    announcer.unmount(&mut doc);

    assert!(!announcer.is_active());
    assert!(live_regions(&doc).is_empty());
    assert_eq!(doc.get_element_by_id("screen-reader-supporter"), None);
    assert_eq!(doc.tree().children(doc.body()).count(), 0);
}

#[test]
fn test_mount_then_immediate_unmount_is_clean() {
    let mut doc = Document::new();
    let mut announcer = Announcer::new();

    announcer.mount(&mut doc);
    announcer.unmount(&mut doc);

    assert_eq!(doc.tree().children(doc.body()).count(), 0);
}

#[test]
fn test_unmount_without_mount_is_noop() {
    let mut doc = Document::new();
    let mut announcer = Announcer::new();

    announcer.unmount(&mut doc);
    announcer.mount(&mut doc);
    announcer.unmount(&mut doc);
    announcer.unmount(&mut doc);

    assert!(!announcer.is_active());
    assert_eq!(doc.tree().children(doc.body()).count(), 0);
}

#[test]
fn test_remount_after_unmount() {
    let mut doc = Document::new();
    let mut announcer = Announcer::new();

    announcer.mount(&mut doc);
    announcer.announce(&mut doc, Some("First life"));
    announcer.unmount(&mut doc);

    announcer.mount(&mut doc);
    // Content survives the inactive gap and renders on the new mount
    let regions = live_regions(&doc);
    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].text, "First life");
}

// ============================================================================
// MULTIPLE ANNOUNCERS
// ============================================================================

#[test]
fn test_two_announcers_are_independent() {
    let mut doc = Document::new();
    let mut first = Announcer::new();
    let mut second =
        Announcer::with_config(AnnouncerConfig::new().with_container_id("status-updates"));

    first.mount(&mut doc);
    second.mount(&mut doc);
    assert_eq!(doc.tree().children(doc.body()).count(), 2);

    first.announce(&mut doc, Some("From first"));
    second.announce(&mut doc, Some("From second"));

    let regions = live_regions(&doc);
    assert_eq!(regions.len(), 2);
    assert_eq!(regions[0].text, "From first");
    assert_eq!(regions[1].text, "From second");

    second.unmount(&mut doc);
    let regions = live_regions(&doc);
    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].text, "From first");
    assert!(first.is_active());
}

// ============================================================================
// SCREEN READER OBSERVATION
// ============================================================================

#[test]
fn test_observed_announcement_sequence() {
    let mut doc = Document::new();
    let mut announcer = Announcer::new();
    let mut reader = ScreenReaderOutput::new();

    announcer.mount(&mut doc);
    reader.observe(&doc);
    assert_eq!(reader.pending(), 0);

    announcer.announce(&mut doc, Some("Loading"));
    reader.observe(&doc);
    announcer.announce(&mut doc, Some("Loaded"));
    reader.observe(&doc);
    announcer.clear(&mut doc, None);
    reader.observe(&doc);

    assert_eq!(reader.next().unwrap().text, "Loading");
    let loaded = reader.next().unwrap();
    assert_eq!(loaded.text, "Loaded");
    assert_eq!(loaded.politeness, LivePoliteness::Polite);
    // The clear suppressed rendering, so nothing further was announced
    assert!(reader.next().is_none());
}

#[test]
fn test_assertive_config_is_observed() {
    let mut doc = Document::new();
    let mut announcer = Announcer::with_config(AnnouncerConfig::new().assertive());
    let mut reader = ScreenReaderOutput::new();

    announcer.mount(&mut doc);
    announcer.announce(&mut doc, Some("Session expired"));
    reader.observe(&doc);

    let announcement = reader.next().unwrap();
    assert_eq!(announcement.politeness, LivePoliteness::Assertive);
    assert_eq!(announcement.text, "Session expired");
}
