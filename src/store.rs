use log::{debug, error, info, warn};

use crate::draw::DrawingSession;
use crate::node::{Node, NodeId, NodePatch, PathNode, TextInit};
use crate::persistence::{self, SceneStorage};
use crate::scene::{Scene, ScenePatch};
use crate::tool::Tool;

/// Single owner of the scene being edited, the active tool, and the
/// in-progress drawing session. Constructed by the application root
/// and handed by `&mut` to every consumer; all mutations go through
/// the operations below, each one an atomic state transition.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneStore {
    scene: Scene,
    tool: Tool,
    drawing: DrawingSession,
    version: u64,
}

impl Default for SceneStore {
    fn default() -> Self {
        Self::new(Scene::default())
    }
}

impl SceneStore {
    pub fn new(scene: Scene) -> Self {
        Self {
            scene,
            tool: Tool::default(),
            drawing: DrawingSession::default(),
            version: 0,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn drawing(&self) -> &DrawingSession {
        &self.drawing
    }

    /// Monotonic counter bumped by every scene mutation. Tool and
    /// drawing-session changes are not persisted and do not count.
    /// Consumed by the autosave debouncer for change detection.
    pub fn version(&self) -> u64 {
        self.version
    }

    fn touch(&mut self) {
        self.version += 1;
    }

    /// Replace the scene fields the patch carries, each wholesale.
    /// The caller is responsible for handing data that keeps the
    /// scene invariants intact (e.g. no duplicate node ids).
    pub fn set_scene(&mut self, patch: ScenePatch) {
        if let Some(name) = patch.name {
            self.scene.name = name;
        }
        if let Some(width) = patch.width {
            self.scene.width = width;
        }
        if let Some(height) = patch.height {
            self.scene.height = height;
        }
        if let Some(background) = patch.background {
            self.scene.background = background;
        }
        if let Some(global) = patch.global {
            self.scene.global = global;
        }
        if let Some(nodes) = patch.nodes {
            self.scene.nodes = nodes;
        }
        self.touch();
    }

    /// Replace the scene wholesale. The drawing session is reset, and
    /// an incoming selection that matches no node in the new scene is
    /// dropped; the active tool is untouched.
    pub fn load_scene(&mut self, mut scene: Scene) {
        if let Some(selected) = &scene.selected_id {
            if !scene.contains(selected) {
                warn!("Loaded scene '{}' selects unknown node {selected}; clearing", scene.name);
                scene.selected_id = None;
            }
        }
        info!("Loading scene '{}' ({} nodes)", scene.name, scene.nodes.len());
        self.scene = scene;
        self.drawing.reset();
        self.touch();
    }

    pub fn set_tool(&mut self, tool: Tool) {
        if self.drawing.is_drawing() && tool != Tool::Draw {
            // The session stays open; the canvas stops feeding points
            // until the draw is explicitly ended or restarted.
            debug!("Switching to {tool} with a draw in progress");
        }
        self.tool = tool;
    }

    /// Create a text node from `init`, append it on top of the
    /// z-order, and select it. The id is store-assigned and returned;
    /// `init` has no say in it.
    pub fn add_text(&mut self, init: TextInit) -> NodeId {
        let id = NodeId::generate();
        info!("Adding text node {} ({:?})", id, init.text);
        self.scene.nodes.push(Node::Text(init.into_node(id.clone())));
        self.scene.selected_id = Some(id.clone());
        self.touch();
        id
    }

    /// Set the selection. No existence check: callers pass ids they
    /// got from this store or `None`.
    pub fn select(&mut self, id: Option<NodeId>) {
        if self.scene.selected_id != id {
            self.scene.selected_id = id;
            self.touch();
        }
    }

    /// Apply one update message to the node with the given id. Unknown
    /// ids and patches for the other node kind are silent no-ops.
    pub fn update_node(&mut self, id: &NodeId, patch: NodePatch) {
        if let Some(node) = self.scene.node_mut(id) {
            if node.apply(patch) {
                self.touch();
            }
        }
    }

    /// Remove and return the node with the given id, clearing the
    /// selection if it pointed at the removed node. Unknown ids are a
    /// safe no-op.
    pub fn remove_node(&mut self, id: &NodeId) -> Option<Node> {
        let index = self.scene.index_of(id)?;
        let node = self.scene.nodes.remove(index);
        if self.scene.selected_id.as_ref() == Some(id) {
            self.scene.selected_id = None;
        }
        info!("Removed node {id}");
        self.touch();
        Some(node)
    }

    /// Begin a drawing session, discarding any unfinished path.
    pub fn start_draw(&mut self) {
        self.drawing.start();
    }

    /// Append one pointer sample in scene space. No-op while idle.
    pub fn push_point(&mut self, x: f64, y: f64) {
        self.drawing.push(x, y);
    }

    /// End the drawing session. A path with at least two full samples
    /// is committed as a new path node on top of the z-order and
    /// selected; anything shorter (a single clicked point) is
    /// discarded. Returns the committed node's id, if any.
    pub fn end_draw(&mut self) -> Option<NodeId> {
        let points = self.drawing.finish()?;
        let id = NodeId::generate();
        info!("Committing drawn path {} ({} points)", id, points.len() / 2);
        self.scene.nodes.push(Node::Path(PathNode::drawn(id.clone(), points)));
        self.scene.selected_id = Some(id.clone());
        self.touch();
        Some(id)
    }

    /// Swap the node one step towards the top of the z-order. No-op
    /// for the topmost node or an unknown id.
    pub fn bring_forward(&mut self, id: &NodeId) {
        if let Some(index) = self.scene.index_of(id) {
            if index + 1 < self.scene.nodes.len() {
                self.scene.nodes.swap(index, index + 1);
                self.touch();
            }
        }
    }

    /// Swap the node one step towards the bottom of the z-order.
    /// No-op for the bottommost node or an unknown id.
    pub fn send_backward(&mut self, id: &NodeId) {
        if let Some(index) = self.scene.index_of(id) {
            if index > 0 {
                self.scene.nodes.swap(index, index - 1);
                self.touch();
            }
        }
    }

    /// Move the node at `from` so it ends up at index `to`, shifting
    /// the nodes in between. Indices are z-order array indices; the
    /// layer list shows nodes reversed, so UI rows must be translated
    /// (`actual = len - 1 - row`) by the caller. Out-of-range indices
    /// are a no-op.
    pub fn reorder_layers(&mut self, from: usize, to: usize) {
        let len = self.scene.nodes.len();
        if from >= len || to >= len || from == to {
            return;
        }
        let node = self.scene.nodes.remove(from);
        self.scene.nodes.insert(to, node);
        self.touch();
    }

    /// Serialize the scene into the storage. Failures are logged and
    /// swallowed; the scene is never lost over a bad save.
    pub fn save_to_storage(&self, storage: &mut dyn SceneStorage) {
        match persistence::save_scene(&self.scene, storage) {
            Ok(()) => debug!("Scene '{}' saved", self.scene.name),
            Err(err) => error!("Saving scene failed: {err}"),
        }
    }

    /// Load the stored scene, if any, through [`Self::load_scene`].
    /// A missing key keeps the current scene; a corrupt payload is
    /// logged and ignored.
    pub fn load_from_storage(&mut self, storage: &dyn SceneStorage) {
        match persistence::load_scene(storage) {
            Ok(Some(scene)) => self.load_scene(scene),
            Ok(None) => debug!("No saved scene found"),
            Err(err) => error!("Loading scene failed: {err}"),
        }
    }
}
