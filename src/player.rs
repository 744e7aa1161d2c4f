//! Full-window playback of the scene: the editor chrome disappears
//! and the sign runs its animation until the user exits.

use egui::{Color32, Sense, Vec2};
use rand::Rng;

use crate::canvas::{PaintFx, ViewTransform, paint_scene};
use crate::scene::{Animation, ScenePatch};
use crate::store::SceneStore;

#[derive(Debug, Default)]
pub struct Player {
    active: bool,
}

impl Player {
    pub fn start(&mut self) {
        log::info!("Playback started");
        self.active = true;
    }

    pub fn stop(&mut self) {
        log::info!("Playback stopped");
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Animation factor applied on top of the scene's base brightness.
    fn animation_factor(animation: Animation, time: f64, speed: f64) -> f64 {
        match animation {
            Animation::None => 1.0,
            Animation::Breathe => (time * speed).sin() * 0.3 + 1.0,
            Animation::Flicker => rand::thread_rng().gen_range(0.8..1.2),
        }
    }

    pub fn ui(&mut self, store: &mut SceneStore, ctx: &egui::Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.stop();
            return;
        }

        egui::TopBottomPanel::bottom("player_controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Exit").clicked() {
                    self.stop();
                }
                ui.separator();

                let mut global = store.scene().global.clone();
                let mut changed = ui
                    .add(egui::Slider::new(&mut global.brightness, 0.2..=2.0).text("Brightness"))
                    .changed();
                changed |= ui
                    .add(egui::Slider::new(&mut global.hue_rotate, -180.0..=180.0).text("Hue"))
                    .changed();
                if changed {
                    store.set_scene(ScenePatch { global: Some(global), ..ScenePatch::default() });
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(&store.scene().name);
                });
            });
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Color32::BLACK))
            .show(ctx, |ui| {
                let scene = store.scene();
                let time = ui.input(|i| i.time);
                let factor =
                    Self::animation_factor(scene.global.animation, time, scene.global.anim_speed);
                let fx = PaintFx {
                    brightness: (scene.global.brightness * factor) as f32,
                    hue_shift: scene.global.hue_rotate as f32,
                    glow_scale: 1.0,
                };
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), Sense::hover());
                let view =
                    ViewTransform::fit(scene.width, scene.height, response.rect, Vec2::ZERO);
                paint_scene(ui, &painter, &view, scene, &fx);

                if scene.global.animation != Animation::None {
                    ui.ctx().request_repaint();
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breathe_factor_oscillates_around_one() {
        let quarter = std::f64::consts::FRAC_PI_2;
        let peak = Player::animation_factor(Animation::Breathe, quarter, 1.0);
        let trough = Player::animation_factor(Animation::Breathe, 3.0 * quarter, 1.0);
        assert!((peak - 1.3).abs() < 1e-9);
        assert!((trough - 0.7).abs() < 1e-9);
    }

    #[test]
    fn speed_scales_the_breathe_phase() {
        let slow = Player::animation_factor(Animation::Breathe, 1.0, 0.5);
        let fast = Player::animation_factor(Animation::Breathe, 0.5, 1.0);
        assert!((slow - fast).abs() < 1e-9);
    }

    #[test]
    fn flicker_stays_in_band() {
        for _ in 0..100 {
            let factor = Player::animation_factor(Animation::Flicker, 0.0, 1.0);
            assert!((0.8..1.2).contains(&factor));
        }
    }

    #[test]
    fn no_animation_is_identity() {
        assert_eq!(Player::animation_factor(Animation::None, 42.0, 3.0), 1.0);
    }
}
