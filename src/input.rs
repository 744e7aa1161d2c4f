//! Application-wide keyboard shortcuts. Pointer handling lives on the
//! canvas; this only covers keys that act on the store directly.

use crate::node::TextInit;
use crate::store::SceneStore;
use crate::tool::Tool;

/// Shortcuts are ignored while a text field has focus, so typing a
/// label never switches tools or deletes the node being edited.
pub fn handle_shortcuts(ctx: &egui::Context, store: &mut SceneStore) {
    if ctx.wants_keyboard_input() {
        return;
    }

    let pressed = |key| ctx.input(|i| i.key_pressed(key));

    if pressed(egui::Key::V) {
        store.set_tool(Tool::Select);
    }
    if pressed(egui::Key::H) {
        store.set_tool(Tool::Pan);
    }
    if pressed(egui::Key::T) {
        store.set_tool(Tool::Text);
        store.add_text(TextInit::default());
    }
    if pressed(egui::Key::D) {
        store.set_tool(Tool::Draw);
    }

    if pressed(egui::Key::Delete) || pressed(egui::Key::Backspace) {
        if let Some(id) = store.scene().selected_id.clone() {
            store.remove_node(&id);
        }
    }
    if pressed(egui::Key::Escape) {
        store.select(None);
    }
}
