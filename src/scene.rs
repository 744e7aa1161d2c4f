use serde::{Deserialize, Serialize};

use crate::node::{Node, NodeId};

/// The full document being edited: canvas size, background, global
/// playback parameters, and the ordered node layers. `nodes` order is
/// the z-order (index 0 bottom-most, last top-most) and every mutation
/// that is not itself a reorder preserves it exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub id: String,
    pub name: String,
    pub width: f64,
    pub height: f64,
    pub background: Background,
    pub global: GlobalFx,
    pub nodes: Vec<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_id: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Background {
    pub color: String,
}

/// Scene-wide visual parameters consumed only by the playback
/// renderer, never by editor geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalFx {
    pub brightness: f64,
    pub hue_rotate: f64,
    pub animation: Animation,
    pub anim_speed: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Animation {
    None,
    Breathe,
    Flicker,
}

impl Animation {
    pub const ALL: [Animation; 3] = [Animation::None, Animation::Breathe, Animation::Flicker];

    pub fn name(&self) -> &'static str {
        match self {
            Animation::None => "None",
            Animation::Breathe => "Breathe",
            Animation::Flicker => "Flicker",
        }
    }
}

impl Scene {
    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id() == id)
    }

    pub fn node_mut(&mut self, id: &NodeId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id() == id)
    }

    pub fn index_of(&self, id: &NodeId) -> Option<usize> {
        self.nodes.iter().position(|n| n.id() == id)
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.nodes.iter().any(|n| n.id() == id)
    }

    /// The currently selected node, if the selection points at one.
    pub fn selected(&self) -> Option<&Node> {
        self.selected_id.as_ref().and_then(|id| self.node(id))
    }
}

impl Default for Scene {
    fn default() -> Self {
        crate::presets::default_scene()
    }
}

/// Wholesale replacement of individual scene fields; `None` leaves the
/// field untouched. Selection changes go through the store's `select`,
/// not through a patch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScenePatch {
    pub name: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub background: Option<Background>,
    pub global: Option<GlobalFx>,
    pub nodes: Option<Vec<Node>>,
}
