//! Bidirectional synchronization behavior

use pretty_assertions::assert_eq;

use jsonui_editor::{LayoutContext, Point, SyncCoordinator, TextEvent, TextureStore};

const LAYOUT: &str = r#"{
    "controls": {
        "panel": {
            "type": "panel",
            "size": [400, 200],
            "offset": [100, 50],
            "controls": {
                "btn": {"type": "button", "size": [100, 40]}
            }
        }
    }
}"#;

fn loaded() -> SyncCoordinator {
    let mut sync = SyncCoordinator::new(LayoutContext::default(), TextureStore::default());
    let regen = sync.load_text(LAYOUT).unwrap();
    // The view echoes machine-generated text back as a change event
    assert!(matches!(
        sync.notify_text_changed(&regen.text),
        TextEvent::Ignored
    ));
    sync
}

#[test]
fn drag_produces_one_regeneration_and_no_rebuild_cycle() {
    let mut sync = loaded();
    let id = sync.scene().find_by_key("btn").unwrap();

    let regen = sync.reposition(id, Point::new(250, 120)).unwrap();
    let scene_after_drag = sync.scene().clone();

    // Echo is consumed; the forest is not rebuilt a second time
    assert!(matches!(
        sync.notify_text_changed(&regen.text),
        TextEvent::Ignored
    ));
    assert_eq!(sync.scene(), &scene_after_drag);
    assert_eq!(sync.scene().absolute_position(id), Point::new(250, 120));
}

#[test]
fn dragged_offset_is_parent_relative_and_text_visible() {
    let mut sync = loaded();
    let id = sync.scene().find_by_key("btn").unwrap();

    sync.reposition(id, Point::new(250, 120)).unwrap();
    // panel sits at (100, 50); the child's stored offset is local
    let path = sync.scene().node(id).path.clone();
    assert_eq!(sync.document().offset_at(&path), Point::new(150, 70));
    assert!(sync.text().contains("150"));
}

#[test]
fn user_edit_replaces_document_and_keeps_user_text() {
    let mut sync = loaded();
    let user_text = r#"{"controls": {"solo": {"type": "label", "anchor_to": "center"}}}"#;
    assert!(matches!(
        sync.notify_text_changed(user_text),
        TextEvent::Rebuilt
    ));
    assert_eq!(sync.text(), user_text);
    assert!(sync.scene().find_by_key("panel").is_none());
    assert!(sync.scene().find_by_key("solo").is_some());
}

#[test]
fn malformed_edit_is_nonfatal_and_state_is_retained() {
    let mut sync = loaded();
    let before_text = sync.text().to_string();
    let before_len = sync.scene().len();

    let event = sync.notify_text_changed("{\"controls\": {\"btn\": ");
    let TextEvent::Invalid(errors) = event else {
        panic!("expected parse failure");
    };
    assert!(!errors.is_empty());
    assert_eq!(sync.scene().len(), before_len);
    assert_eq!(sync.text(), before_text);

    // Correcting the text recovers normally
    assert!(matches!(
        sync.notify_text_changed(&before_text),
        TextEvent::Rebuilt
    ));
}

#[test]
fn caret_hint_points_at_the_moved_key() {
    let mut sync = loaded();
    let id = sync.scene().find_by_key("btn").unwrap();
    let regen = sync.reposition(id, Point::new(250, 120)).unwrap();
    let caret = regen.caret.unwrap();
    assert_eq!(&regen.text[caret..caret + 5], "\"btn\"");
}

#[test]
fn reposition_survives_a_full_save_load_cycle() {
    let mut sync = loaded();
    let id = sync.scene().find_by_key("btn").unwrap();
    let regen = sync.reposition(id, Point::new(777, 333)).unwrap();

    let mut reopened = SyncCoordinator::new(LayoutContext::default(), TextureStore::default());
    reopened.load_text(&regen.text).unwrap();
    let id = reopened.scene().find_by_key("btn").unwrap();
    assert_eq!(reopened.scene().absolute_position(id), Point::new(777, 333));
}
