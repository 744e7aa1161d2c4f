use neonsign::node::{DRAW_STROKE, DRAW_STROKE_WIDTH, DRAW_TENSION, Node};
use neonsign::scene::ScenePatch;
use neonsign::store::SceneStore;

fn empty_store() -> SceneStore {
    let mut store = SceneStore::default();
    store.set_scene(ScenePatch { nodes: Some(Vec::new()), ..ScenePatch::default() });
    store
}

#[test]
fn test_draw_lifecycle_commits_a_path_node() {
    let mut store = empty_store();

    store.start_draw();
    assert!(store.drawing().is_drawing());

    store.push_point(10.0, 20.0);
    store.push_point(30.0, 40.0);
    store.push_point(50.0, 60.0);

    // Points accumulate in the session, not in the scene.
    assert!(store.scene().nodes.is_empty());
    assert_eq!(store.drawing().current_path(), &[10.0, 20.0, 30.0, 40.0, 50.0, 60.0]);

    let id = store.end_draw().unwrap();
    assert!(!store.drawing().is_drawing());
    assert!(store.drawing().current_path().is_empty());

    let Some(Node::Path(path)) = store.scene().node(&id).cloned() else {
        panic!("expected a path node");
    };
    assert_eq!(path.points, vec![10.0, 20.0, 30.0, 40.0, 50.0, 60.0]);
    assert_eq!((path.x, path.y), (0.0, 0.0));
    assert_eq!(path.stroke, DRAW_STROKE);
    assert_eq!(path.stroke_width, DRAW_STROKE_WIDTH);
    assert_eq!(path.tension, DRAW_TENSION);
    assert!(path.glow.enabled);
    assert!(!path.closed);

    // The fresh stroke becomes the selection.
    assert_eq!(store.scene().selected_id, Some(id));
}

#[test]
fn test_two_samples_are_enough_to_commit() {
    let mut store = empty_store();
    store.start_draw();
    store.push_point(0.0, 0.0);
    store.push_point(5.0, 5.0);

    assert!(store.end_draw().is_some());
    assert_eq!(store.scene().nodes.len(), 1);
}

#[test]
fn test_a_single_sample_is_discarded() {
    let mut store = empty_store();
    let version = store.version();

    store.start_draw();
    store.push_point(4.0, 4.0);

    assert_eq!(store.end_draw(), None);
    assert!(store.scene().nodes.is_empty());
    assert!(!store.drawing().is_drawing());
    assert_eq!(store.version(), version);
}

#[test]
fn test_empty_session_commits_nothing() {
    let mut store = empty_store();
    store.start_draw();
    assert_eq!(store.end_draw(), None);
    assert!(store.scene().nodes.is_empty());
}

#[test]
fn test_points_outside_a_session_are_dropped() {
    let mut store = empty_store();

    store.push_point(1.0, 1.0);
    assert!(store.drawing().current_path().is_empty());

    assert_eq!(store.end_draw(), None);
}

#[test]
fn test_restarting_resets_the_current_path() {
    let mut store = empty_store();

    store.start_draw();
    store.push_point(1.0, 1.0);
    store.push_point(2.0, 2.0);

    store.start_draw();
    assert!(store.drawing().is_drawing());
    assert!(store.drawing().current_path().is_empty());
}

#[test]
fn test_consecutive_strokes_stack_in_order() {
    let mut store = empty_store();

    store.start_draw();
    store.push_point(0.0, 0.0);
    store.push_point(1.0, 1.0);
    let first = store.end_draw().unwrap();

    store.start_draw();
    store.push_point(9.0, 9.0);
    store.push_point(8.0, 8.0);
    let second = store.end_draw().unwrap();

    assert_ne!(first, second);
    assert_eq!(store.scene().nodes.len(), 2);
    assert_eq!(store.scene().nodes[0].id(), &first);
    assert_eq!(store.scene().nodes[1].id(), &second);
}
