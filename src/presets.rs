//! Bundled demo scenes and the neon color swatch list. The catalog is
//! fixed data: the store loads a preset wholesale via `load_scene` and
//! treats it as an opaque valid scene.

use crate::node::{Glow, Node, NodeId, PathNode, TextNode};
use crate::scene::{Animation, Background, GlobalFx, Scene};

/// Preset ids and display names, in toolbar order.
pub const PRESETS: [(&str, &str); 3] = [
    ("neon-demo", "Neon Demo"),
    ("neon-bar", "Open Bar"),
    ("love-sign", "Love Sign"),
];

pub const DEFAULT_PRESET_ID: &str = "neon-demo";

/// Swatch colors offered by the properties panel.
pub const COLOR_PRESETS: [(&str, &str); 10] = [
    ("Electric Blue", "#00F0FF"),
    ("Neon Pink", "#FF00FF"),
    ("Laser Green", "#00FF00"),
    ("Warning Yellow", "#FFFF00"),
    ("Mystic Purple", "#8000FF"),
    ("Flame Orange", "#FF4000"),
    ("Hot Pink", "#FF0080"),
    ("Mint Green", "#80FF00"),
    ("Sky Blue", "#0080FF"),
    ("Rose Red", "#FF0040"),
];

pub fn preset_by_id(id: &str) -> Option<Scene> {
    match id {
        "neon-demo" => Some(neon_demo()),
        "neon-bar" => Some(neon_bar()),
        "love-sign" => Some(love_sign()),
        _ => None,
    }
}

pub fn preset_scenes() -> Vec<Scene> {
    PRESETS
        .iter()
        .filter_map(|(id, _)| preset_by_id(id))
        .collect()
}

/// The scene a fresh session starts with: the default preset, or a
/// minimal built-in sign if the catalog entry is ever missing.
pub fn default_scene() -> Scene {
    preset_by_id(DEFAULT_PRESET_ID).unwrap_or_else(fallback_scene)
}

fn fallback_scene() -> Scene {
    Scene {
        id: "fallback".to_owned(),
        name: "New Sign".to_owned(),
        width: 1280.0,
        height: 720.0,
        background: Background { color: "#05060A".to_owned() },
        global: GlobalFx {
            brightness: 1.0,
            hue_rotate: 0.0,
            animation: Animation::None,
            anim_speed: 1.0,
        },
        nodes: vec![Node::Text(TextNode {
            id: NodeId::from("fallback-text"),
            x: 440.0,
            y: 300.0,
            rotation: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            opacity: 1.0,
            stroke: "#00F0FF".to_owned(),
            stroke_width: 8.0,
            glow: Glow { enabled: true, blur: 30.0, intensity: 0.8 },
            fill: Some("#001014".to_owned()),
            text: "NEON".to_owned(),
            font_size: 120.0,
            font_family: Some("Arial".to_owned()),
        })],
        selected_id: None,
    }
}

fn neon_demo() -> Scene {
    Scene {
        id: "neon-demo".to_owned(),
        name: "Neon Demo".to_owned(),
        width: 1280.0,
        height: 720.0,
        background: Background { color: "#05060A".to_owned() },
        global: GlobalFx {
            brightness: 1.0,
            hue_rotate: 0.0,
            animation: Animation::Breathe,
            anim_speed: 1.0,
        },
        nodes: vec![
            Node::Text(TextNode {
                id: NodeId::from("demo-title"),
                x: 360.0,
                y: 220.0,
                rotation: 0.0,
                scale_x: 1.0,
                scale_y: 1.0,
                opacity: 1.0,
                stroke: "#00F0FF".to_owned(),
                stroke_width: 8.0,
                glow: Glow { enabled: true, blur: 34.0, intensity: 0.85 },
                fill: Some("#001014".to_owned()),
                text: "NEON".to_owned(),
                font_size: 140.0,
                font_family: Some("Impact".to_owned()),
            }),
            Node::Text(TextNode {
                id: NodeId::from("demo-subtitle"),
                x: 430.0,
                y: 400.0,
                rotation: 0.0,
                scale_x: 1.0,
                scale_y: 1.0,
                opacity: 1.0,
                stroke: "#FF00FF".to_owned(),
                stroke_width: 6.0,
                glow: Glow { enabled: true, blur: 26.0, intensity: 0.75 },
                fill: None,
                text: "SIGN STUDIO".to_owned(),
                font_size: 56.0,
                font_family: Some("Arial".to_owned()),
            }),
            Node::Path(PathNode {
                id: NodeId::from("demo-underline"),
                x: 0.0,
                y: 0.0,
                rotation: 0.0,
                scale_x: 1.0,
                scale_y: 1.0,
                opacity: 1.0,
                stroke: "#00FF00".to_owned(),
                stroke_width: 5.0,
                glow: Glow { enabled: true, blur: 22.0, intensity: 0.7 },
                fill: None,
                points: vec![380.0, 500.0, 560.0, 520.0, 740.0, 505.0, 900.0, 520.0],
                tension: 0.5,
                closed: false,
            }),
        ],
        selected_id: None,
    }
}

fn neon_bar() -> Scene {
    Scene {
        id: "neon-bar".to_owned(),
        name: "Open Bar".to_owned(),
        width: 1280.0,
        height: 720.0,
        background: Background { color: "#0A0510".to_owned() },
        global: GlobalFx {
            brightness: 1.1,
            hue_rotate: 0.0,
            animation: Animation::Flicker,
            anim_speed: 1.4,
        },
        nodes: vec![
            Node::Text(TextNode {
                id: NodeId::from("bar-open"),
                x: 340.0,
                y: 180.0,
                rotation: 0.0,
                scale_x: 1.0,
                scale_y: 1.0,
                opacity: 1.0,
                stroke: "#FF00FF".to_owned(),
                stroke_width: 9.0,
                glow: Glow { enabled: true, blur: 36.0, intensity: 0.9 },
                fill: Some("#14000F".to_owned()),
                text: "OPEN".to_owned(),
                font_size: 150.0,
                font_family: Some("Impact".to_owned()),
            }),
            Node::Text(TextNode {
                id: NodeId::from("bar-hours"),
                x: 470.0,
                y: 380.0,
                rotation: 0.0,
                scale_x: 1.0,
                scale_y: 1.0,
                opacity: 1.0,
                stroke: "#00F0FF".to_owned(),
                stroke_width: 5.0,
                glow: Glow { enabled: true, blur: 24.0, intensity: 0.7 },
                fill: None,
                text: "BAR · 24/7".to_owned(),
                font_size: 64.0,
                font_family: Some("Arial".to_owned()),
            }),
            Node::Path(PathNode {
                id: NodeId::from("bar-frame"),
                x: 0.0,
                y: 0.0,
                rotation: 0.0,
                scale_x: 1.0,
                scale_y: 1.0,
                opacity: 0.9,
                stroke: "#FFFF00".to_owned(),
                stroke_width: 4.0,
                glow: Glow { enabled: true, blur: 18.0, intensity: 0.6 },
                fill: None,
                points: vec![
                    280.0, 140.0, 1000.0, 140.0, 1000.0, 500.0, 280.0, 500.0,
                ],
                tension: 0.0,
                closed: true,
            }),
        ],
        selected_id: None,
    }
}

fn love_sign() -> Scene {
    Scene {
        id: "love-sign".to_owned(),
        name: "Love Sign".to_owned(),
        width: 1280.0,
        height: 720.0,
        background: Background { color: "#0C050A".to_owned() },
        global: GlobalFx {
            brightness: 1.0,
            hue_rotate: 0.0,
            animation: Animation::Breathe,
            anim_speed: 0.6,
        },
        nodes: vec![
            Node::Path(PathNode {
                id: NodeId::from("love-heart"),
                x: 0.0,
                y: 0.0,
                rotation: 0.0,
                scale_x: 1.0,
                scale_y: 1.0,
                opacity: 1.0,
                stroke: "#FF0080".to_owned(),
                stroke_width: 6.0,
                glow: Glow { enabled: true, blur: 30.0, intensity: 0.85 },
                fill: None,
                points: vec![
                    640.0, 330.0, 560.0, 240.0, 440.0, 260.0, 420.0, 370.0, 520.0, 480.0,
                    640.0, 560.0, 760.0, 480.0, 860.0, 370.0, 840.0, 260.0, 720.0, 240.0,
                ],
                tension: 0.6,
                closed: true,
            }),
            Node::Text(TextNode {
                id: NodeId::from("love-word"),
                x: 520.0,
                y: 330.0,
                rotation: 0.0,
                scale_x: 1.0,
                scale_y: 1.0,
                opacity: 1.0,
                stroke: "#FF0040".to_owned(),
                stroke_width: 7.0,
                glow: Glow { enabled: true, blur: 32.0, intensity: 0.9 },
                fill: Some("#120008".to_owned()),
                text: "LOVE".to_owned(),
                font_size: 96.0,
                font_family: Some("Arial".to_owned()),
            }),
            Node::Text(TextNode {
                id: NodeId::from("love-caption"),
                x: 560.0,
                y: 590.0,
                rotation: -4.0,
                scale_x: 1.0,
                scale_y: 1.0,
                opacity: 0.9,
                stroke: "#8000FF".to_owned(),
                stroke_width: 4.0,
                glow: Glow { enabled: true, blur: 20.0, intensity: 0.6 },
                fill: None,
                text: "forever on".to_owned(),
                font_size: 40.0,
                font_family: Some("Helvetica".to_owned()),
            }),
        ],
        selected_id: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn presets_satisfy_scene_invariants() {
        let scenes = preset_scenes();
        assert_eq!(scenes.len(), PRESETS.len());
        for scene in &scenes {
            assert!(scene.width > 0.0 && scene.height > 0.0, "{}", scene.id);

            let ids: HashSet<_> = scene.nodes.iter().map(|n| n.id().as_str()).collect();
            assert_eq!(ids.len(), scene.nodes.len(), "duplicate node id in {}", scene.id);

            if let Some(selected) = &scene.selected_id {
                assert!(scene.contains(selected), "dangling selection in {}", scene.id);
            }
        }
    }

    #[test]
    fn preset_paths_have_even_point_counts() {
        for scene in preset_scenes() {
            for node in &scene.nodes {
                if let Node::Path(p) = node {
                    assert!(p.points.len() % 2 == 0, "odd point count in {}", p.id);
                    assert!(p.points.len() >= 4, "degenerate path in {}", p.id);
                }
            }
        }
    }

    #[test]
    fn default_scene_is_the_default_preset() {
        assert_eq!(default_scene().id, DEFAULT_PRESET_ID);
    }

    #[test]
    fn unknown_preset_id_yields_none() {
        assert!(preset_by_id("no-such-preset").is_none());
    }
}
