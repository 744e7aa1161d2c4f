//! The editor stage: maps pointer input to store operations according
//! to the active tool, and paints the scene. All store coordinates are
//! scene space; this module owns the conversion from screen space.

use egui::{
    Color32, CursorIcon, Painter, Pos2, Rect, Response, Sense, Stroke as EguiStroke, Ui, Vec2,
    pos2, vec2,
};

use crate::node::{
    DRAW_GLOW, DRAW_STROKE, DRAW_STROKE_WIDTH, Glow, Node, NodePatch, PathNode, TextInit, TextNode,
};
use crate::scene::Scene;
use crate::store::SceneStore;
use crate::tool::Tool;

const HANDLE_RADIUS: f32 = 6.0;
const SELECT_PADDING: f32 = 8.0;
const SELECTION_COLOR: Color32 = Color32::from_rgb(30, 120, 255);

/// Parse a `#RRGGBB` color string, falling back to white.
pub fn parse_color(color: &str) -> Color32 {
    let hex = color.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return Color32::WHITE;
    }
    let channel = |range| u8::from_str_radix(&hex[range], 16);
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Ok(r), Ok(g), Ok(b)) => Color32::from_rgb(r, g, b),
        _ => Color32::WHITE,
    }
}

pub fn color_to_hex(color: Color32) -> String {
    format!("#{:02X}{:02X}{:02X}", color.r(), color.g(), color.b())
}

/// Playback/preview adjustments applied while painting. The editor
/// paints with the defaults; the player animates `brightness` and
/// shifts hue; the thumbnail preview tones the glow down.
#[derive(Debug, Clone, Copy)]
pub struct PaintFx {
    pub brightness: f32,
    /// Hue rotation in degrees.
    pub hue_shift: f32,
    pub glow_scale: f32,
}

impl Default for PaintFx {
    fn default() -> Self {
        Self { brightness: 1.0, hue_shift: 0.0, glow_scale: 1.0 }
    }
}

impl PaintFx {
    fn color(&self, raw: &str, opacity: f64) -> Color32 {
        let mut color = parse_color(raw);
        if self.hue_shift != 0.0 {
            let mut hsva = egui::ecolor::Hsva::from(color);
            hsva.h = (hsva.h + self.hue_shift / 360.0).rem_euclid(1.0);
            color = hsva.into();
        }
        if self.brightness != 1.0 {
            let scale = |c: u8| ((c as f32) * self.brightness).clamp(0.0, 255.0) as u8;
            color = Color32::from_rgb(scale(color.r()), scale(color.g()), scale(color.b()));
        }
        let opacity = (opacity as f32 * self.brightness).min(1.0);
        color.gamma_multiply(opacity)
    }
}

/// Mapping between scene space and screen space: a uniform fit scale
/// (never upscaled past 1:1), centered in the viewport, plus the pan
/// offset.
#[derive(Debug, Clone, Copy)]
pub struct ViewTransform {
    pub scale: f32,
    /// Screen position of scene (0, 0).
    pub origin: Pos2,
}

impl ViewTransform {
    pub fn fit(scene_w: f64, scene_h: f64, viewport: Rect, pan: Vec2) -> Self {
        let scale = (viewport.width() / scene_w as f32)
            .min(viewport.height() / scene_h as f32)
            .min(1.0);
        let size = vec2(scene_w as f32 * scale, scene_h as f32 * scale);
        Self { scale, origin: viewport.center() - size * 0.5 + pan }
    }

    pub fn to_screen(&self, x: f64, y: f64) -> Pos2 {
        pos2(
            self.origin.x + x as f32 * self.scale,
            self.origin.y + y as f32 * self.scale,
        )
    }

    pub fn to_scene(&self, pos: Pos2) -> (f64, f64) {
        (
            ((pos.x - self.origin.x) / self.scale) as f64,
            ((pos.y - self.origin.y) / self.scale) as f64,
        )
    }

    pub fn scene_rect(&self, scene: &Scene) -> Rect {
        Rect::from_min_size(
            self.origin,
            vec2(scene.width as f32 * self.scale, scene.height as f32 * self.scale),
        )
    }
}

/// Patches committing a resize gesture. Text absorbs the factor into
/// its font size (floored at 5) and stays at unit scale; paths persist
/// the scale directly. `node` is the node as it was when the gesture
/// began, so repeated application during a drag stays absolute.
pub fn resize_patches(node: &Node, factor_x: f64, factor_y: f64) -> Vec<NodePatch> {
    match node {
        Node::Text(t) => vec![
            NodePatch::FontSize((t.font_size * factor_x.abs()).max(5.0)),
            NodePatch::Scale { x: 1.0, y: 1.0 },
        ],
        Node::Path(p) => vec![NodePatch::Scale {
            x: p.scale_x * factor_x.abs(),
            y: p.scale_y * factor_y.abs(),
        }],
    }
}

/// A corner of the selection box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    const ALL: [Corner; 4] =
        [Corner::TopLeft, Corner::TopRight, Corner::BottomLeft, Corner::BottomRight];

    fn pos(&self, rect: &Rect) -> Pos2 {
        match self {
            Corner::TopLeft => rect.left_top(),
            Corner::TopRight => rect.right_top(),
            Corner::BottomLeft => rect.left_bottom(),
            Corner::BottomRight => rect.right_bottom(),
        }
    }

    fn opposite(&self, rect: &Rect) -> Pos2 {
        match self {
            Corner::TopLeft => rect.right_bottom(),
            Corner::TopRight => rect.left_bottom(),
            Corner::BottomLeft => rect.right_top(),
            Corner::BottomRight => rect.left_top(),
        }
    }

    fn cursor_icon(&self) -> CursorIcon {
        match self {
            Corner::TopLeft | Corner::BottomRight => CursorIcon::ResizeNwSe,
            Corner::TopRight | Corner::BottomLeft => CursorIcon::ResizeNeSw,
        }
    }
}

/// Pointer gesture in progress on the canvas.
#[derive(Debug, Clone, Default)]
enum Gesture {
    #[default]
    Idle,
    Moving {
        start_pos: (f64, f64),
        press: Pos2,
    },
    Resizing {
        start_node: Box<Node>,
        corner: Corner,
        start_rect: Rect,
        press: Pos2,
    },
    Drawing {
        last: Pos2,
    },
}

/// Canvas state that survives across frames: the pan offset and the
/// gesture currently in progress.
#[derive(Debug, Default)]
pub struct CanvasView {
    pan: Vec2,
    gesture: Gesture,
}

impl CanvasView {
    pub fn ui(&mut self, ui: &mut Ui, store: &mut SceneStore) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
        let view = ViewTransform::fit(
            store.scene().width,
            store.scene().height,
            response.rect,
            self.pan,
        );

        paint_scene(ui, &painter, &view, store.scene(), &PaintFx::default());
        self.paint_draw_preview(&painter, &view, store);
        self.paint_selection(ui, &painter, &view, store);

        let response = response.on_hover_cursor(match store.tool() {
            Tool::Select => CursorIcon::Default,
            Tool::Pan => CursorIcon::Grab,
            Tool::Text => CursorIcon::Text,
            Tool::Draw => CursorIcon::Crosshair,
        });
        self.handle_pointer(ui, &response, &view, store);
    }

    fn handle_pointer(
        &mut self,
        ui: &Ui,
        response: &Response,
        view: &ViewTransform,
        store: &mut SceneStore,
    ) {
        match store.tool() {
            Tool::Select => self.select_input(ui, response, view, store),
            Tool::Pan => {
                if response.dragged() {
                    self.pan += response.drag_delta();
                }
            }
            Tool::Text => {
                if response.clicked() {
                    if let Some(pos) = response.interact_pointer_pos() {
                        let (x, y) = view.to_scene(pos);
                        store.add_text(TextInit { x, y, ..TextInit::default() });
                    }
                }
            }
            Tool::Draw => self.draw_input(response, view, store),
        }
    }

    /// Press starts the session and pushes the first sample, movement
    /// pushes more, release ends it. A plain click therefore produces
    /// a single sample, which `end_draw` discards.
    fn draw_input(&mut self, response: &Response, view: &ViewTransform, store: &mut SceneStore) {
        let held = response.is_pointer_button_down_on();
        let pos = response.interact_pointer_pos();

        if !matches!(self.gesture, Gesture::Drawing { .. }) {
            if held {
                if let Some(pos) = pos {
                    store.start_draw();
                    let (x, y) = view.to_scene(pos);
                    store.push_point(x, y);
                    self.gesture = Gesture::Drawing { last: pos };
                }
            }
            return;
        }

        if !held {
            store.end_draw();
            self.gesture = Gesture::Idle;
            return;
        }
        if let (Gesture::Drawing { last }, Some(pos)) = (&mut self.gesture, pos) {
            if *last != pos {
                *last = pos;
                let (x, y) = view.to_scene(pos);
                store.push_point(x, y);
            }
        }
    }

    fn select_input(
        &mut self,
        ui: &Ui,
        response: &Response,
        view: &ViewTransform,
        store: &mut SceneStore,
    ) {
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let hit = hit_node(ui, store.scene(), view, pos);
                store.select(hit);
            }
            return;
        }

        if response.drag_started() {
            let Some(press) = response.interact_pointer_pos() else { return };

            // A grab on the selection box corners wins over node hits.
            if let Some(selected) = store.scene().selected() {
                let rect = node_rect(ui, selected, view);
                if let Some(corner) = handle_at(&rect, press) {
                    self.gesture = Gesture::Resizing {
                        start_node: Box::new(selected.clone()),
                        corner,
                        start_rect: rect,
                        press,
                    };
                    return;
                }
            }

            if let Some(id) = hit_node(ui, store.scene(), view, press) {
                let node_pos = store
                    .scene()
                    .node(&id)
                    .map(|n| n.position())
                    .unwrap_or_default();
                store.select(Some(id));
                self.gesture = Gesture::Moving { start_pos: node_pos, press };
            }
            return;
        }

        if response.dragged() {
            let Some(pos) = response.interact_pointer_pos() else { return };
            match &self.gesture {
                Gesture::Moving { start_pos, press } => {
                    let dx = ((pos.x - press.x) / view.scale) as f64;
                    let dy = ((pos.y - press.y) / view.scale) as f64;
                    if let Some(id) = store.scene().selected_id.clone() {
                        store.update_node(
                            &id,
                            NodePatch::Position { x: start_pos.0 + dx, y: start_pos.1 + dy },
                        );
                    }
                }
                Gesture::Resizing { start_node, corner, start_rect, press } => {
                    let anchor = corner.opposite(start_rect);
                    let factor_x = resize_factor(anchor.x, press.x, pos.x);
                    let factor_y = resize_factor(anchor.y, press.y, pos.y);
                    let id = start_node.id().clone();
                    for patch in resize_patches(start_node, factor_x, factor_y) {
                        store.update_node(&id, patch);
                    }
                }
                _ => {}
            }
            return;
        }

        if response.drag_stopped() {
            self.gesture = Gesture::Idle;
        }
    }

    fn paint_draw_preview(&self, painter: &Painter, view: &ViewTransform, store: &SceneStore) {
        let path = store.drawing().current_path();
        if path.len() <= 2 {
            return;
        }
        let points: Vec<Pos2> = path
            .chunks_exact(2)
            .map(|pair| view.to_screen(pair[0], pair[1]))
            .collect();
        let fx = PaintFx::default();
        paint_polyline(
            painter,
            &points,
            DRAW_STROKE_WIDTH as f32 * view.scale,
            fx.color(DRAW_STROKE, 1.0),
            DRAW_GLOW,
            view.scale,
            &fx,
        );
    }

    fn paint_selection(&self, ui: &Ui, painter: &Painter, view: &ViewTransform, store: &SceneStore) {
        if store.tool() != Tool::Select {
            return;
        }
        let Some(node) = store.scene().selected() else { return };
        let rect = node_rect(ui, node, view);
        painter.rect_stroke(rect, 2.0, EguiStroke::new(1.5, SELECTION_COLOR));
        for corner in Corner::ALL {
            let pos = corner.pos(&rect);
            painter.circle_filled(pos, HANDLE_RADIUS, SELECTION_COLOR);
            painter.circle_stroke(pos, HANDLE_RADIUS, EguiStroke::new(1.0, Color32::WHITE));
        }
        if let Some(hover) = ui.ctx().pointer_hover_pos() {
            if let Some(corner) = handle_at(&rect, hover) {
                ui.ctx().set_cursor_icon(corner.cursor_icon());
            }
        }
    }
}

fn resize_factor(anchor: f32, press: f32, current: f32) -> f64 {
    let base = press - anchor;
    if base.abs() < 1.0 {
        return 1.0;
    }
    ((current - anchor) / base).abs().max(0.05) as f64
}

fn handle_at(rect: &Rect, pos: Pos2) -> Option<Corner> {
    Corner::ALL
        .into_iter()
        .find(|corner| corner.pos(rect).distance(pos) <= HANDLE_RADIUS + 2.0)
}

/// Topmost node whose padded bounds contain `pos`.
fn hit_node(ui: &Ui, scene: &Scene, view: &ViewTransform, pos: Pos2) -> Option<crate::node::NodeId> {
    scene
        .nodes
        .iter()
        .rev()
        .find(|node| node_rect(ui, node, view).contains(pos))
        .map(|node| node.id().clone())
}

/// Screen-space bounding box of a node, padded for easier grabbing.
/// Rotation is ignored for bounds; close enough for editor picking.
fn node_rect(ui: &Ui, node: &Node, view: &ViewTransform) -> Rect {
    let rect = match node {
        Node::Text(t) => {
            let galley = text_galley(ui, t, view.scale, Color32::WHITE);
            let min = view.to_screen(t.x, t.y);
            Rect::from_min_size(min, galley.size())
        }
        Node::Path(p) => {
            let mut min = pos2(f32::MAX, f32::MAX);
            let mut max = pos2(f32::MIN, f32::MIN);
            for (x, y) in path_scene_points(p) {
                let pos = view.to_screen(x, y);
                min = min.min(pos);
                max = max.max(pos);
            }
            if min.x > max.x {
                return Rect::NOTHING;
            }
            Rect::from_min_max(min, max)
        }
    };
    rect.expand(SELECT_PADDING + node.stroke_width() as f32 * 0.5 * view.scale)
}

/// Scene-space positions of a path's points after the node's own
/// scale and rotation.
fn path_scene_points(path: &PathNode) -> Vec<(f64, f64)> {
    let (sin, cos) = path.rotation.to_radians().sin_cos();
    path.points
        .chunks_exact(2)
        .map(|pair| {
            let px = pair[0] * path.scale_x;
            let py = pair[1] * path.scale_y;
            (path.x + px * cos - py * sin, path.y + px * sin + py * cos)
        })
        .collect()
}

fn text_galley(
    ui: &Ui,
    text: &TextNode,
    view_scale: f32,
    color: Color32,
) -> std::sync::Arc<egui::Galley> {
    let font_px = ((text.font_size * text.scale_x) as f32 * view_scale).max(1.0);
    ui.fonts(|fonts| {
        fonts.layout_no_wrap(text.text.clone(), egui::FontId::proportional(font_px), color)
    })
}

/// Paint the whole scene in z-order into `painter`, mapped through
/// `view`. Shared by the editor canvas, the thumbnail preview, and
/// the playback overlay.
pub fn paint_scene(ui: &Ui, painter: &Painter, view: &ViewTransform, scene: &Scene, fx: &PaintFx) {
    painter.rect_filled(
        view.scene_rect(scene),
        0.0,
        fx.color(&scene.background.color, 1.0),
    );
    for node in &scene.nodes {
        match node {
            Node::Text(t) => paint_text(ui, painter, view, t, fx),
            Node::Path(p) => paint_path(painter, view, p, fx),
        }
    }
}

fn paint_text(ui: &Ui, painter: &Painter, view: &ViewTransform, text: &TextNode, fx: &PaintFx) {
    if text.text.is_empty() {
        return;
    }
    let stroke_color = fx.color(&text.stroke, text.opacity);
    let galley = text_galley(ui, text, view.scale, stroke_color);
    let pos = view.to_screen(text.x, text.y);
    let angle = text.rotation.to_radians() as f32;

    if text.glow.enabled {
        let blur_px = (text.glow.blur as f32) * view.scale * fx.brightness * fx.glow_scale;
        let halo = stroke_color.gamma_multiply(0.10 * text.glow.intensity as f32);
        for offset in ring_offsets(blur_px * 0.4) {
            painter.add(text_pass(pos + offset, galley.clone(), halo, angle));
        }
    }

    if let Some(fill) = &text.fill {
        // Fake an outlined letter: stroke-colored copies shifted one
        // step in each direction under a fill-colored center.
        let outline = (text.stroke_width as f32 * view.scale * 0.5).clamp(1.0, 4.0);
        for offset in [
            vec2(outline, 0.0),
            vec2(-outline, 0.0),
            vec2(0.0, outline),
            vec2(0.0, -outline),
        ] {
            painter.add(text_pass(pos + offset, galley.clone(), stroke_color, angle));
        }
        let fill_color = fx.color(fill, text.opacity);
        painter.add(text_pass(pos, galley, fill_color, angle));
    } else {
        painter.add(text_pass(pos, galley, stroke_color, angle));
    }
}

fn text_pass(
    pos: Pos2,
    galley: std::sync::Arc<egui::Galley>,
    color: Color32,
    angle: f32,
) -> egui::Shape {
    let mut shape = egui::epaint::TextShape::new(pos, galley, color);
    shape.override_text_color = Some(color);
    shape.angle = angle;
    shape.into()
}

fn paint_path(painter: &Painter, view: &ViewTransform, path: &PathNode, fx: &PaintFx) {
    let mut points: Vec<Pos2> = path_scene_points(path)
        .into_iter()
        .map(|(x, y)| view.to_screen(x, y))
        .collect();
    if points.len() < 2 {
        return;
    }
    if path.closed {
        // Fill applies to closed outlines only. epaint triangulates
        // the points as a convex polygon, so a concave outline fills
        // approximately.
        if let Some(fill) = &path.fill {
            painter.add(egui::Shape::convex_polygon(
                points.clone(),
                fx.color(fill, path.opacity),
                EguiStroke::NONE,
            ));
        }
        points.push(points[0]);
    }
    paint_polyline(
        painter,
        &points,
        (path.stroke_width as f32 * view.scale).max(0.5),
        fx.color(&path.stroke, path.opacity),
        path.glow,
        view.scale,
        fx,
    );
}

/// A neon stroke: two translucent halo passes under the core line.
fn paint_polyline(
    painter: &Painter,
    points: &[Pos2],
    width: f32,
    color: Color32,
    glow: Glow,
    view_scale: f32,
    fx: &PaintFx,
) {
    if glow.enabled {
        let blur_px = (glow.blur as f32) * view_scale * fx.brightness * fx.glow_scale;
        let intensity = glow.intensity as f32;
        for (extra, alpha) in [(blur_px, 0.10 * intensity), (blur_px * 0.5, 0.22 * intensity)] {
            painter.add(egui::Shape::line(
                points.to_vec(),
                EguiStroke::new(width + extra, color.gamma_multiply(alpha)),
            ));
        }
    }
    painter.add(egui::Shape::line(points.to_vec(), EguiStroke::new(width, color)));
}

fn ring_offsets(radius: f32) -> [Vec2; 8] {
    let mut offsets = [Vec2::ZERO; 8];
    for (i, offset) in offsets.iter_mut().enumerate() {
        let angle = i as f32 * std::f32::consts::TAU / 8.0;
        *offset = vec2(angle.cos(), angle.sin()) * radius;
    }
    offsets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeId;

    fn test_text() -> Node {
        Node::Text(TextNode {
            id: NodeId::from("t1"),
            x: 10.0,
            y: 20.0,
            rotation: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            opacity: 1.0,
            stroke: "#00F0FF".to_owned(),
            stroke_width: 8.0,
            glow: Glow { enabled: true, blur: 30.0, intensity: 0.8 },
            fill: None,
            text: "NEON".to_owned(),
            font_size: 80.0,
            font_family: None,
        })
    }

    fn test_path() -> Node {
        Node::Path(PathNode {
            id: NodeId::from("p1"),
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
            scale_x: 2.0,
            scale_y: 1.0,
            opacity: 1.0,
            stroke: "#FF00FF".to_owned(),
            stroke_width: 6.0,
            glow: Glow { enabled: true, blur: 25.0, intensity: 0.7 },
            fill: None,
            points: vec![0.0, 0.0, 100.0, 50.0],
            tension: 0.3,
            closed: false,
        })
    }

    #[test]
    fn text_resize_absorbs_into_font_size() {
        let patches = resize_patches(&test_text(), 2.0, 2.0);
        assert_eq!(
            patches,
            vec![NodePatch::FontSize(160.0), NodePatch::Scale { x: 1.0, y: 1.0 }]
        );
    }

    #[test]
    fn text_resize_respects_font_size_floor() {
        let patches = resize_patches(&test_text(), 0.01, 0.01);
        assert_eq!(
            patches,
            vec![NodePatch::FontSize(5.0), NodePatch::Scale { x: 1.0, y: 1.0 }]
        );
    }

    #[test]
    fn path_resize_persists_scale() {
        let patches = resize_patches(&test_path(), 1.5, 3.0);
        assert_eq!(patches, vec![NodePatch::Scale { x: 3.0, y: 3.0 }]);
    }

    #[test]
    fn view_transform_round_trips_positions() {
        let view = ViewTransform::fit(
            1280.0,
            720.0,
            Rect::from_min_size(pos2(0.0, 0.0), vec2(640.0, 360.0)),
            Vec2::ZERO,
        );
        assert!((view.scale - 0.5).abs() < 1e-6);
        let (x, y) = view.to_scene(view.to_screen(300.0, 200.0));
        assert!((x - 300.0).abs() < 1e-3);
        assert!((y - 200.0).abs() < 1e-3);
    }

    #[test]
    fn view_transform_never_upscales() {
        let view = ViewTransform::fit(
            100.0,
            100.0,
            Rect::from_min_size(pos2(0.0, 0.0), vec2(1000.0, 1000.0)),
            Vec2::ZERO,
        );
        assert_eq!(view.scale, 1.0);
    }

    #[test]
    fn rotated_scaled_path_points_transform() {
        let Node::Path(mut path) = test_path() else { unreachable!() };
        path.rotation = 90.0;
        let points = path_scene_points(&path);
        // (100, 50) scaled to (200, 50), then rotated a quarter turn.
        assert!((points[1].0 - -50.0).abs() < 1e-6);
        assert!((points[1].1 - 200.0).abs() < 1e-6);
    }

    fn triangle_scene(closed: bool, fill: Option<&str>) -> Scene {
        use crate::scene::{Animation, Background, GlobalFx};
        Scene {
            id: "s1".to_owned(),
            name: "Test".to_owned(),
            width: 640.0,
            height: 360.0,
            background: Background { color: "#000000".to_owned() },
            global: GlobalFx {
                brightness: 1.0,
                hue_rotate: 0.0,
                animation: Animation::None,
                anim_speed: 1.0,
            },
            nodes: vec![Node::Path(PathNode {
                id: NodeId::from("tri"),
                x: 0.0,
                y: 0.0,
                rotation: 0.0,
                scale_x: 1.0,
                scale_y: 1.0,
                opacity: 1.0,
                stroke: "#FF00FF".to_owned(),
                stroke_width: 6.0,
                glow: Glow { enabled: false, blur: 0.0, intensity: 0.0 },
                fill: fill.map(str::to_owned),
                points: vec![100.0, 100.0, 300.0, 100.0, 200.0, 250.0],
                tension: 0.0,
                closed,
            })],
            selected_id: None,
        }
    }

    /// Run one headless frame and collect every shape the scene
    /// painter produced.
    fn painted_shapes(scene: &Scene) -> Vec<egui::Shape> {
        let ctx = egui::Context::default();
        let input = egui::RawInput {
            screen_rect: Some(Rect::from_min_size(pos2(0.0, 0.0), vec2(800.0, 600.0))),
            ..Default::default()
        };
        let output = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), Sense::hover());
                let view =
                    ViewTransform::fit(scene.width, scene.height, response.rect, Vec2::ZERO);
                paint_scene(ui, &painter, &view, scene, &PaintFx::default());
            });
        });
        let mut shapes = Vec::new();
        for clipped in output.shapes {
            flatten(clipped.shape, &mut shapes);
        }
        shapes
    }

    fn flatten(shape: egui::Shape, out: &mut Vec<egui::Shape>) {
        match shape {
            egui::Shape::Vec(inner) => {
                for shape in inner {
                    flatten(shape, out);
                }
            }
            other => out.push(other),
        }
    }

    fn polygon_fills(shapes: &[egui::Shape]) -> Vec<Color32> {
        shapes
            .iter()
            .filter_map(|shape| match shape {
                egui::Shape::Path(p) if p.fill != Color32::TRANSPARENT => Some(p.fill),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn closed_path_with_fill_paints_an_interior() {
        let shapes = painted_shapes(&triangle_scene(true, Some("#112233")));
        assert_eq!(polygon_fills(&shapes), vec![Color32::from_rgb(0x11, 0x22, 0x33)]);
    }

    #[test]
    fn open_path_fill_is_ignored() {
        let shapes = painted_shapes(&triangle_scene(false, Some("#112233")));
        assert!(polygon_fills(&shapes).is_empty());
    }

    #[test]
    fn closed_path_without_fill_stays_hollow() {
        let shapes = painted_shapes(&triangle_scene(true, None));
        assert!(polygon_fills(&shapes).is_empty());
    }
}
