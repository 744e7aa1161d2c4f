use std::collections::HashMap;

use neonsign::node::{NodePatch, TextInit};
use neonsign::persistence::{self, FileStorage, SCENE_KEY, SceneStorage};
use neonsign::store::SceneStore;

#[derive(Default)]
struct MemoryStorage(HashMap<String, String>);

impl SceneStorage for MemoryStorage {
    fn get_string(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: String) {
        self.0.insert(key.to_owned(), value);
    }
}

fn temp_dir(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "neonsign_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

/// A store with one edited text node and one drawn path, selection on
/// the path.
fn edited_store() -> SceneStore {
    let mut store = SceneStore::default();
    store.set_scene(neonsign::ScenePatch { nodes: Some(Vec::new()), ..Default::default() });
    let text = store.add_text(TextInit::default());
    store.update_node(&text, NodePatch::Rotation(-4.0));
    store.start_draw();
    store.push_point(0.0, 0.0);
    store.push_point(40.0, 10.0);
    store.push_point(80.0, 0.0);
    store.end_draw();
    store
}

#[test]
fn test_save_and_load_round_trip_is_lossless() {
    let store = edited_store();
    let mut storage = MemoryStorage::default();

    store.save_to_storage(&mut storage);

    let mut restored = SceneStore::default();
    restored.load_from_storage(&storage);

    assert_eq!(restored.scene(), store.scene());
}

#[test]
fn test_missing_key_leaves_the_store_untouched() {
    let mut store = edited_store();
    let before = store.scene().clone();
    let version = store.version();

    store.load_from_storage(&MemoryStorage::default());

    assert_eq!(store.scene(), &before);
    assert_eq!(store.version(), version);
}

#[test]
fn test_corrupt_json_is_tolerated() {
    let mut storage = MemoryStorage::default();
    storage.set_string(SCENE_KEY, "{not valid json".to_owned());

    let mut store = edited_store();
    let before = store.scene().clone();

    store.load_from_storage(&storage);

    assert_eq!(store.scene(), &before);
}

#[test]
fn test_wire_format_uses_the_expected_field_names() {
    let store = edited_store();
    let json = persistence::encode_scene(store.scene()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let global = &value["global"];
    assert!(global.get("hueRotate").is_some());
    assert!(global.get("animSpeed").is_some());
    assert!(global.get("hue_rotate").is_none());

    let text = &value["nodes"][0];
    assert_eq!(text["type"], "text");
    assert!(text.get("strokeWidth").is_some());
    assert!(text.get("fontSize").is_some());
    assert!(text.get("scaleX").is_some());

    let path = &value["nodes"][1];
    assert_eq!(path["type"], "path");
    assert!(path.get("points").is_some());

    // The selection rides along under its wire name.
    assert!(value.get("selectedId").is_some());
}

#[test]
fn test_optional_fields_are_omitted_when_absent() {
    let mut store = SceneStore::default();
    let id = store.add_text(TextInit { fill: None, font_family: None, ..TextInit::default() });
    store.select(None);

    let json = persistence::encode_scene(store.scene()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert!(value.get("selectedId").is_none());
    let text = value["nodes"]
        .as_array()
        .unwrap()
        .iter()
        .find(|n| n["id"] == id.as_str())
        .unwrap();
    assert!(text.get("fill").is_none());
    assert!(text.get("fontFamily").is_none());
}

#[test]
fn test_decode_fills_in_missing_defaults() {
    let json = r##"{
        "id": "s1",
        "name": "Bare",
        "width": 640,
        "height": 360,
        "background": { "color": "#000000" },
        "global": { "brightness": 1, "hueRotate": 0, "animation": "none", "animSpeed": 1 },
        "nodes": [
            {
                "type": "text",
                "id": "t1",
                "x": 10,
                "y": 10,
                "stroke": "#00F0FF",
                "strokeWidth": 4,
                "glow": { "enabled": false, "blur": 10, "intensity": 0.5 },
                "text": "HI",
                "fontSize": 30
            },
            {
                "type": "path",
                "id": "p1",
                "x": 0,
                "y": 0,
                "stroke": "#FF00FF",
                "strokeWidth": 2,
                "glow": { "enabled": true, "blur": 20, "intensity": 0.6 },
                "points": [0, 0, 10, 10]
            }
        ]
    }"##;

    let scene = persistence::decode_scene(json).unwrap();
    let text = &scene.nodes[0];
    assert_eq!(text.rotation(), 0.0);
    assert_eq!(text.scale(), (1.0, 1.0));
    assert_eq!(text.opacity(), 1.0);

    let neonsign::Node::Path(path) = &scene.nodes[1] else {
        panic!("expected a path node");
    };
    assert_eq!(path.tension, 0.0);
    assert!(!path.closed);
    assert_eq!(scene.selected_id, None);
}

#[test]
fn test_non_ascii_node_ids_load_and_label() {
    // Scenes written by other tools can use any string as an id.
    let json = r##"{
        "id": "s2",
        "name": "Importado",
        "width": 640,
        "height": 360,
        "background": { "color": "#000000" },
        "global": { "brightness": 1, "hueRotate": 0, "animation": "none", "animSpeed": 1 },
        "nodes": [
            {
                "type": "path",
                "id": "héllo",
                "x": 0,
                "y": 0,
                "stroke": "#FF00FF",
                "strokeWidth": 2,
                "glow": { "enabled": true, "blur": 20, "intensity": 0.6 },
                "points": [0, 0, 10, 10]
            }
        ]
    }"##;
    let mut storage = MemoryStorage::default();
    storage.set_string(SCENE_KEY, json.to_owned());

    let mut store = SceneStore::default();
    store.load_from_storage(&storage);
    assert_eq!(store.scene().nodes.len(), 1);

    // The 4-byte id tail starts inside the two-byte é; the label backs
    // up to the character start instead of splitting it.
    let titles: Vec<String> = store.scene().nodes.iter().map(|n| n.title()).collect();
    assert_eq!(titles, vec!["Path #éllo"]);
}

#[test]
fn test_file_storage_round_trip() {
    let tmp = temp_dir("file_storage_round_trip");
    let store = edited_store();

    let mut storage = FileStorage::new(&tmp);
    store.save_to_storage(&mut storage);

    let mut restored = SceneStore::default();
    restored.load_from_storage(&storage);
    assert_eq!(restored.scene(), store.scene());

    // Keys map onto sanitized file names inside the directory.
    assert!(tmp.join("neonsign-scene.json").exists());

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn test_file_storage_missing_dir_reads_as_empty() {
    let tmp = temp_dir("file_storage_missing");
    let storage = FileStorage::new(&tmp);

    let mut store = SceneStore::default();
    let before = store.scene().clone();
    store.load_from_storage(&storage);

    assert_eq!(store.scene(), &before);
}
