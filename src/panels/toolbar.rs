use crate::node::TextInit;
use crate::player::Player;
use crate::presets;
use crate::store::SceneStore;
use crate::tool::Tool;

/// Top bar: tool switcher, preset loader, preview toggle and playback.
pub fn toolbar(store: &mut SceneStore, player: &mut Player, show_preview: &mut bool, ctx: &egui::Context) {
    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.strong("Neon Studio");
            ui.separator();

            for tool in Tool::ALL {
                let label = format!("{} ({})", tool.name(), tool.shortcut());
                if ui.selectable_label(store.tool() == tool, label).clicked() {
                    log::info!("Tool selected from UI: {}", tool.name());
                    store.set_tool(tool);
                    // The text tool places a default node right away
                    // rather than waiting for a canvas click.
                    if tool == Tool::Text {
                        store.add_text(TextInit::default());
                    }
                }
            }
            ui.separator();

            ui.menu_button("Presets", |ui| {
                for (id, name) in presets::PRESETS {
                    if ui.button(name).clicked() {
                        if let Some(scene) = presets::preset_by_id(id) {
                            store.load_scene(scene);
                        }
                        ui.close_menu();
                    }
                }
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("▶ Play").clicked() {
                    player.start();
                }
                ui.toggle_value(show_preview, "Preview");
                ui.separator();
                ui.weak(store.scene().name.as_str());
            });
        });
    });
}
