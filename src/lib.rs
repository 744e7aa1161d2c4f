#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod autosave;
pub mod canvas;
pub mod draw;
pub mod input;
pub mod node;
pub mod panels;
pub mod persistence;
pub mod player;
pub mod presets;
pub mod scene;
pub mod store;
pub mod tool;

pub use app::NeonApp;
pub use autosave::Autosave;
pub use draw::DrawingSession;
pub use node::{Glow, Node, NodeId, NodePatch, PathNode, TextInit, TextNode};
pub use persistence::{FileStorage, PersistenceError, SceneStorage};
pub use scene::{Animation, Background, GlobalFx, Scene, ScenePatch};
pub use store::SceneStore;
pub use tool::Tool;
