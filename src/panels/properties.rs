use crate::canvas::{color_to_hex, parse_color};
use crate::node::{Glow, Node, NodePatch};
use crate::presets::COLOR_PRESETS;
use crate::scene::{Animation, ScenePatch};
use crate::store::SceneStore;

const FONT_FAMILIES: [&str; 5] =
    ["Arial", "Helvetica", "Times New Roman", "Courier New", "Impact"];

/// Default interior color applied when a fill is first switched on.
const DEFAULT_FILL: &str = "#001014";

/// Right panel: edits the selected node, or the scene itself when
/// nothing is selected.
pub fn properties_panel(store: &mut SceneStore, ctx: &egui::Context) {
    egui::SidePanel::right("properties_panel")
        .resizable(true)
        .default_width(270.0)
        .show(ctx, |ui| {
            ui.heading("Properties");
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                // Work on a snapshot so the widgets never hold a
                // borrow of the store.
                match store.scene().selected().cloned() {
                    Some(node) => node_properties(store, ui, node),
                    None => scene_properties(store, ui),
                }
            });
        });
}

fn node_properties(store: &mut SceneStore, ui: &mut egui::Ui, node: Node) {
    let id = node.id().clone();
    let mut patches: Vec<NodePatch> = Vec::new();

    ui.label(node.title());
    ui.separator();

    let (mut x, mut y) = node.position();
    ui.horizontal(|ui| {
        ui.label("Position");
        let moved = ui.add(egui::DragValue::new(&mut x).speed(1.0)).changed()
            | ui.add(egui::DragValue::new(&mut y).speed(1.0)).changed();
        if moved {
            patches.push(NodePatch::Position { x, y });
        }
    });

    let mut rotation = node.rotation();
    if ui
        .add(egui::Slider::new(&mut rotation, -180.0..=180.0).text("Rotation"))
        .changed()
    {
        patches.push(NodePatch::Rotation(rotation));
    }

    let mut opacity = node.opacity();
    if ui
        .add(egui::Slider::new(&mut opacity, 0.0..=1.0).text("Opacity"))
        .changed()
    {
        patches.push(NodePatch::Opacity(opacity));
    }

    ui.separator();

    let mut stroke = parse_color(node.stroke());
    ui.horizontal(|ui| {
        ui.label("Stroke");
        if ui.color_edit_button_srgba(&mut stroke).changed() {
            patches.push(NodePatch::Stroke(color_to_hex(stroke)));
        }
    });
    color_swatches(ui, &mut patches);

    let mut stroke_width = node.stroke_width();
    if ui
        .add(egui::Slider::new(&mut stroke_width, 1.0..=40.0).text("Stroke width"))
        .changed()
    {
        patches.push(NodePatch::StrokeWidth(stroke_width));
    }

    glow_properties(ui, node.glow(), &mut patches);
    fill_properties(ui, &node, &mut patches);

    match &node {
        Node::Text(t) => {
            ui.separator();
            let mut text = t.text.clone();
            if ui.text_edit_singleline(&mut text).changed() {
                patches.push(NodePatch::Text(text));
            }

            let mut font_size = t.font_size;
            if ui
                .add(egui::Slider::new(&mut font_size, 12.0..=200.0).text("Font size"))
                .changed()
            {
                patches.push(NodePatch::FontSize(font_size));
            }

            let mut family = t.font_family.clone().unwrap_or_else(|| "Arial".to_owned());
            egui::ComboBox::from_label("Font")
                .selected_text(family.clone())
                .show_ui(ui, |ui| {
                    for name in FONT_FAMILIES {
                        if ui
                            .selectable_value(&mut family, name.to_owned(), name)
                            .clicked()
                        {
                            patches.push(NodePatch::FontFamily(family.clone()));
                        }
                    }
                });
        }
        Node::Path(p) => {
            ui.separator();
            ui.label(format!("{} points", p.points.len() / 2));

            let mut tension = p.tension;
            if ui
                .add(egui::Slider::new(&mut tension, 0.0..=1.0).text("Tension"))
                .changed()
            {
                patches.push(NodePatch::Tension(tension));
            }

            let mut closed = p.closed;
            if ui.checkbox(&mut closed, "Closed").changed() {
                patches.push(NodePatch::Closed(closed));
            }
        }
    }

    ui.separator();
    let delete = ui.button("✗ Delete node").clicked();

    for patch in patches {
        store.update_node(&id, patch);
    }
    if delete {
        store.remove_node(&id);
    }
}

fn color_swatches(ui: &mut egui::Ui, patches: &mut Vec<NodePatch>) {
    ui.horizontal_wrapped(|ui| {
        for (name, hex) in COLOR_PRESETS {
            let swatch = egui::Button::new("")
                .fill(parse_color(hex))
                .min_size(egui::vec2(18.0, 18.0));
            if ui.add(swatch).on_hover_text(name).clicked() {
                patches.push(NodePatch::Stroke(hex.to_owned()));
            }
        }
    });
}

/// Glow is edited field by field in the UI but always sent back as
/// one whole value.
fn glow_properties(ui: &mut egui::Ui, glow: Glow, patches: &mut Vec<NodePatch>) {
    ui.separator();
    let mut glow = glow;
    let mut changed = ui.checkbox(&mut glow.enabled, "Glow").changed();
    ui.add_enabled_ui(glow.enabled, |ui| {
        changed |= ui
            .add(egui::Slider::new(&mut glow.blur, 5.0..=60.0).text("Blur"))
            .changed();
        changed |= ui
            .add(egui::Slider::new(&mut glow.intensity, 0.0..=1.0).text("Intensity"))
            .changed();
    });
    if changed {
        patches.push(NodePatch::Glow(glow));
    }
}

fn fill_properties(ui: &mut egui::Ui, node: &Node, patches: &mut Vec<NodePatch>) {
    let mut has_fill = node.fill().is_some();
    ui.horizontal(|ui| {
        if ui.checkbox(&mut has_fill, "Fill").changed() {
            patches.push(NodePatch::Fill(
                has_fill.then(|| DEFAULT_FILL.to_owned()),
            ));
            return;
        }
        if let Some(fill) = node.fill() {
            let mut color = parse_color(fill);
            if ui.color_edit_button_srgba(&mut color).changed() {
                patches.push(NodePatch::Fill(Some(color_to_hex(color))));
            }
        }
    });
}

fn scene_properties(store: &mut SceneStore, ui: &mut egui::Ui) {
    ui.weak("No selection. Editing scene settings.");
    ui.separator();

    let scene = store.scene();
    let mut name = scene.name.clone();
    let mut width = scene.width;
    let mut height = scene.height;
    let mut background = scene.background.clone();
    let mut global = scene.global.clone();
    let mut patch = ScenePatch::default();

    if ui.text_edit_singleline(&mut name).changed() {
        patch.name = Some(name);
    }

    ui.horizontal(|ui| {
        ui.label("Canvas");
        let resized = ui
            .add(egui::DragValue::new(&mut width).range(320.0..=4096.0).speed(4.0))
            .changed()
            | ui.add(egui::DragValue::new(&mut height).range(180.0..=4096.0).speed(4.0))
                .changed();
        if resized {
            patch.width = Some(width);
            patch.height = Some(height);
        }
    });

    let mut bg_color = parse_color(&background.color);
    ui.horizontal(|ui| {
        ui.label("Background");
        if ui.color_edit_button_srgba(&mut bg_color).changed() {
            background.color = color_to_hex(bg_color);
            patch.background = Some(background.clone());
        }
    });

    ui.separator();
    ui.label("Global effects");

    let mut global_changed = ui
        .add(egui::Slider::new(&mut global.brightness, 0.2..=2.0).text("Brightness"))
        .changed();
    global_changed |= ui
        .add(egui::Slider::new(&mut global.hue_rotate, -180.0..=180.0).text("Hue"))
        .changed();
    global_changed |= ui
        .add(egui::Slider::new(&mut global.anim_speed, 0.2..=2.0).text("Speed"))
        .changed();

    egui::ComboBox::from_label("Animation")
        .selected_text(global.animation.name())
        .show_ui(ui, |ui| {
            for animation in Animation::ALL {
                if ui
                    .selectable_value(&mut global.animation, animation, animation.name())
                    .clicked()
                {
                    global_changed = true;
                }
            }
        });

    if global_changed {
        patch.global = Some(global);
    }

    if patch != ScenePatch::default() {
        store.set_scene(patch);
    }
}
