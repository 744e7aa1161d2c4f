use crate::autosave::Autosave;
use crate::canvas::CanvasView;
use crate::persistence::{self, EframeStorage, SCENE_KEY};
use crate::player::Player;
use crate::store::SceneStore;
use crate::{input, panels};

/// Application root: owns the store and the frame-to-frame UI state,
/// and hands the store down to whichever surface is on screen.
pub struct NeonApp {
    store: SceneStore,
    canvas: CanvasView,
    autosave: Autosave,
    player: Player,
    show_preview: bool,
}

impl NeonApp {
    /// Called once before the first frame. Restores the last edited
    /// scene when storage holds one, otherwise starts from the default
    /// preset.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut store = SceneStore::default();
        if let Some(raw) = cc.storage.and_then(|storage| storage.get_string(SCENE_KEY)) {
            match persistence::decode_scene(&raw) {
                Ok(scene) => store.load_scene(scene),
                Err(err) => log::error!("Ignoring stored scene: {err}"),
            }
        }
        Self {
            autosave: Autosave::tracking(&store),
            store,
            canvas: CanvasView::default(),
            player: Player::default(),
            show_preview: true,
        }
    }

    fn status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.store.scene().name);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if self.autosave.pending() {
                        ui.weak("Saving…");
                    } else {
                        ui.weak("Saved");
                    }
                    ui.separator();
                    ui.label(format!(
                        "{:.0}×{:.0}",
                        self.store.scene().width,
                        self.store.scene().height
                    ));
                    ui.separator();
                    ui.label(format!("{} nodes", self.store.scene().nodes.len()));
                });
            });
        });
    }
}

impl eframe::App for NeonApp {
    /// Called by the framework to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.store.save_to_storage(&mut EframeStorage(storage));
    }

    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        if let Some(storage) = frame.storage_mut() {
            self.autosave.tick(&self.store, &mut EframeStorage(storage));
        }
        if self.autosave.pending() {
            // Keep frames coming so the quiet period can elapse even
            // without further input.
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        if self.player.is_active() {
            self.player.ui(&mut self.store, ctx);
            return;
        }

        input::handle_shortcuts(ctx, &mut self.store);

        panels::toolbar(&mut self.store, &mut self.player, &mut self.show_preview, ctx);
        panels::layers_panel(&mut self.store, ctx);
        panels::properties_panel(&mut self.store, ctx);
        self.status_bar(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(egui::Color32::from_gray(18)))
            .show(ctx, |ui| {
                self.canvas.ui(ui, &mut self.store);
            });

        if self.show_preview {
            panels::preview_window(&self.store, &mut self.show_preview, ctx);
        }
    }
}
