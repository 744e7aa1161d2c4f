use egui::{Sense, Vec2, vec2};

use crate::canvas::{PaintFx, ViewTransform, paint_scene};
use crate::store::SceneStore;

const PREVIEW_SIZE: Vec2 = vec2(240.0, 135.0);

/// Floating thumbnail of the scene with the global effects applied
/// and the glow toned down, anchored to the bottom-left corner.
pub fn preview_window(store: &SceneStore, open: &mut bool, ctx: &egui::Context) {
    egui::Window::new("Preview")
        .anchor(egui::Align2::LEFT_BOTTOM, vec2(12.0, -12.0))
        .resizable(false)
        .open(open)
        .show(ctx, |ui| {
            let scene = store.scene();
            let (response, painter) = ui.allocate_painter(PREVIEW_SIZE, Sense::hover());
            let view =
                ViewTransform::fit(scene.width, scene.height, response.rect, Vec2::ZERO);
            let fx = PaintFx {
                brightness: scene.global.brightness as f32,
                hue_shift: scene.global.hue_rotate as f32,
                glow_scale: 0.5,
            };
            paint_scene(ui, &painter, &view, scene, &fx);
        });
}
