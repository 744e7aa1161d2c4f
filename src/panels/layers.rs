use crate::node::NodeId;
use crate::store::SceneStore;

/// One row of the layer list, snapshotted before the UI pass to avoid
/// borrowing the store while widgets run.
struct LayerRow {
    id: NodeId,
    title: String,
    visible: bool,
    selected: bool,
}

enum LayerAction {
    Select(NodeId),
    SetVisible(NodeId, bool),
    Raise(NodeId),
    Lower(NodeId),
    Remove(NodeId),
    Move { from: usize, to: usize },
}

/// Left panel listing the scene's nodes topmost first. Rows select on
/// click, drag to reorder, and carry visibility, raise, lower and
/// delete controls.
pub fn layers_panel(store: &mut SceneStore, ctx: &egui::Context) {
    egui::SidePanel::left("layers_panel")
        .resizable(true)
        .default_width(230.0)
        .show(ctx, |ui| {
            ui.heading("Layers");
            ui.separator();

            let count = store.scene().nodes.len();
            let rows: Vec<LayerRow> = store
                .scene()
                .nodes
                .iter()
                .rev()
                .map(|node| LayerRow {
                    id: node.id().clone(),
                    title: node.title(),
                    visible: node.opacity() > 0.0,
                    selected: store.scene().selected_id.as_ref() == Some(node.id()),
                })
                .collect();

            if rows.is_empty() {
                ui.weak("No layers yet");
                return;
            }

            let mut action = None;
            for (display, row) in rows.iter().enumerate() {
                // The list shows back-to-front paint order reversed,
                // so display row 0 is the last node in the scene.
                let actual = count - 1 - display;
                let response = ui
                    .horizontal(|ui| {
                        let drag_id = egui::Id::new(("layer-row", row.id.as_str()));
                        ui.dnd_drag_source(drag_id, actual, |ui| {
                            if ui.selectable_label(row.selected, &row.title).clicked() {
                                action = Some(LayerAction::Select(row.id.clone()));
                            }
                        });

                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                if ui.small_button("✗").on_hover_text("Delete").clicked() {
                                    action = Some(LayerAction::Remove(row.id.clone()));
                                }
                                if ui.small_button("▼").on_hover_text("Send backward").clicked() {
                                    action = Some(LayerAction::Lower(row.id.clone()));
                                }
                                if ui.small_button("▲").on_hover_text("Bring forward").clicked() {
                                    action = Some(LayerAction::Raise(row.id.clone()));
                                }
                                let mut visible = row.visible;
                                if ui.checkbox(&mut visible, "").on_hover_text("Visible").changed()
                                {
                                    action = Some(LayerAction::SetVisible(row.id.clone(), visible));
                                }
                            },
                        );
                    })
                    .response;

                if let Some(dragged) = response.dnd_release_payload::<usize>() {
                    if *dragged != actual {
                        action = Some(LayerAction::Move { from: *dragged, to: actual });
                    }
                }
            }

            match action {
                Some(LayerAction::Select(id)) => store.select(Some(id)),
                Some(LayerAction::SetVisible(id, visible)) => {
                    let opacity = if visible { 1.0 } else { 0.0 };
                    store.update_node(&id, crate::node::NodePatch::Opacity(opacity));
                }
                Some(LayerAction::Raise(id)) => store.bring_forward(&id),
                Some(LayerAction::Lower(id)) => store.send_backward(&id),
                Some(LayerAction::Remove(id)) => {
                    store.remove_node(&id);
                }
                Some(LayerAction::Move { from, to }) => store.reorder_layers(from, to),
                None => {}
            }
        });
}
