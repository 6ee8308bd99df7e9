//! Interactive 2D fractal tree viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the tree parameters and the
//! generated draw-call sequence, and implements [`eframe::App`] to render
//! and control the tree through an egui UI.
//!
//! The core produces the tree as a pure list of draw commands; the viewer
//! is the host side of that contract: it owns the coordinate transform
//! (origin bottom-center, y up), clears the surface, and either draws the
//! whole list at once or paces it out command by command.

use eframe::App;
use glam::Vec2;
use rand::rng;
use tree_core::{
    command::DrawCommand,
    config::TreeConfig,
    grow,
    surface::CanvasBounds,
    types::Color,
};

/// Main application state for the interactive viewer.
///
/// [`Viewer`] glues together:
/// - The generation core: [`TreeConfig`], [`CanvasBounds`], the recorded
///   [`DrawCommand`] list.
/// - UI configuration (pan/zoom, playback pacing, background color).
/// - eframe/egui callbacks for drawing and user interaction.
///
/// The typical per-frame update is:
/// 1. Handle UI interactions / input; any parameter edit or surface resize
///    marks the current sequence stale.
/// 2. Regrow a fresh sequence when stale.
/// 3. Render the played prefix of the sequence; if playback is paced,
///    advance the cursor on a timer.
///
/// ### Fields
/// - `cfg` - Tree parameters fed to the generator.
/// - `background` - Surface clear color (host concern, not part of `cfg`).
/// - `commands` - Draw-call sequence of the current tree.
/// - `played` - How many commands of the sequence are visible.
/// - `bounds` - Canvas bounds the current sequence was grown against.
///
/// - `rng` - Random number generator driving jitter and flower placement.
///
/// - `animate` - Whether regrown trees are paced out instead of drawn at once.
/// - `playing` - Whether paced playback is currently advancing.
/// - `step_interval` - Target time between playback steps (seconds).
/// - `last_step_time` - Time stamp of the last playback step (egui time).
///
/// - `zoom` - Zoom factor for world-to-screen coordinate mapping.
/// - `pan` - Screen-space pan offset in pixels.
/// - `stale` - Set when `cfg` or the surface changed; forces a regrow.
pub struct Viewer {
    cfg: TreeConfig,
    background: Color,
    commands: Vec<DrawCommand>,
    played: usize,
    bounds: CanvasBounds,

    rng: rand::rngs::ThreadRng,

    animate: bool,
    playing: bool,
    step_interval: f64,
    last_step_time: f64,

    zoom: f32,
    pan: egui::Vec2,
    stale: bool,
}

/// Background color of the original product UI.
const DEFAULT_BACKGROUND: Color = Color::rgb(0xff, 0xff, 0xff);

fn color32(c: Color) -> egui::Color32 {
    egui::Color32::from_rgb(c.r, c.g, c.b)
}

impl Viewer {
    /// Creates a new viewer with default tree parameters and an empty
    /// sequence.
    ///
    /// The first frame marks the sequence stale, so the tree grows as soon
    /// as the central panel knows its size. Playback starts paced with a
    /// short per-command interval.
    ///
    /// ### Returns
    /// A fully-initialized [`Viewer`] ready to be passed to
    /// `eframe::run_native`.
    pub fn new() -> Self {
        Self {
            cfg: TreeConfig::default(),
            background: DEFAULT_BACKGROUND,
            commands: Vec::new(),
            played: 0,
            bounds: CanvasBounds::new(0.0, 0.0),
            rng: rng(),
            animate: true,
            playing: false,
            step_interval: 0.02,
            last_step_time: 0.0,
            zoom: 1.0,
            pan: egui::vec2(0.0, 0.0),
            stale: true,
        }
    }

    /// Grows a fresh draw-call sequence against the given bounds.
    ///
    /// The previous sequence is discarded wholesale; a parameter change or
    /// resize invalidates it, and playback restarts from the beginning
    /// (or shows everything at once when pacing is off).
    fn regrow(&mut self, bounds: CanvasBounds) {
        self.bounds = bounds;
        self.commands = grow::generate(&self.cfg, bounds, &mut self.rng);
        if self.animate {
            self.played = 0;
            self.playing = true;
        } else {
            self.played = self.commands.len();
            self.playing = false;
        }
        self.last_step_time = 0.0;
        self.stale = false;
    }

    /// Advances paced playback by one command if the interval has elapsed.
    ///
    /// Stops playing once the whole sequence is visible. Draw order within
    /// the sequence is never reordered; pacing only controls how much of
    /// the prefix is shown.
    fn step_playback(&mut self, now: f64) {
        if !self.playing {
            return;
        }
        if now - self.last_step_time >= self.step_interval {
            self.played = (self.played + 1).min(self.commands.len());
            self.last_step_time = now;
        }
        if self.played == self.commands.len() {
            self.playing = false;
        }
    }

    /// Converts a world-space position to screen-space.
    ///
    /// The world origin sits at the bottom-center of `rect` with y growing
    /// upward; world coordinates are scaled by `zoom` and offset by `pan`.
    ///
    /// ### Parameters
    /// - `p` - World-space position.
    /// - `rect` - Screen-space rectangle representing the drawing area.
    ///
    /// ### Returns
    /// The corresponding egui position in screen-space.
    fn world_to_screen(&self, p: Vec2, rect: egui::Rect) -> egui::Pos2 {
        egui::pos2(
            rect.center().x + p.x * self.zoom + self.pan.x,
            rect.max.y - p.y * self.zoom + self.pan.y,
        )
    }

    /// Converts a screen-space position back to world-space.
    ///
    /// This is the inverse of [`Viewer::world_to_screen`] (up to floating
    /// point rounding), using the same `zoom`, `pan`, and `rect`.
    ///
    /// ### Parameters
    /// - `p` - Screen-space position in egui coordinates.
    /// - `rect` - Screen-space rectangle representing the drawing area.
    ///
    /// ### Returns
    /// The corresponding position in world-space.
    fn screen_to_world(&self, p: egui::Pos2, rect: egui::Rect) -> Vec2 {
        let x = (p.x - rect.center().x - self.pan.x) / self.zoom;
        let y = (rect.max.y - p.y + self.pan.y) / self.zoom;
        Vec2::new(x, y)
    }

    /// World-space canvas bounds for a surface of the given screen size.
    ///
    /// One world unit is one logical pixel at zoom 1; zoom and pan are
    /// camera-only and do not change what counts as "beyond the canvas".
    fn bounds_for(rect: egui::Rect) -> CanvasBounds {
        CanvasBounds::new(rect.width() / 2.0, rect.height())
    }

    /// Number of segment commands in the visible prefix.
    fn played_segments(&self) -> usize {
        self.commands[..self.played]
            .iter()
            .filter(|c| matches!(c, DrawCommand::Segment { .. }))
            .count()
    }

    /// Number of flower commands in the visible prefix.
    fn played_flowers(&self) -> usize {
        self.played - self.played_segments()
    }

    /// Helper to draw a labeled `f32` [`egui::DragValue`]; returns whether
    /// the value was edited.
    fn labeled_drag_f32(
        ui: &mut egui::Ui,
        label: &str,
        value: &mut f32,
        range: std::ops::RangeInclusive<f32>,
        speed: f64,
    ) -> bool {
        let mut changed = false;
        ui.horizontal(|ui| {
            ui.label(label);
            changed = ui
                .add(egui::DragValue::new(value).range(range).speed(speed))
                .changed();
        });
        changed
    }

    /// Helper to draw a labeled color picker; returns whether the color was
    /// edited.
    fn labeled_color(ui: &mut egui::Ui, label: &str, color: &mut Color) -> bool {
        let mut srgb = [color.r, color.g, color.b];
        let mut changed = false;
        ui.horizontal(|ui| {
            ui.label(label);
            changed = ui.color_edit_button_srgb(&mut srgb).changed();
        });
        if changed {
            *color = Color::rgb(srgb[0], srgb[1], srgb[2]);
        }
        changed
    }

    /// Builds the top panel UI (regrow, playback controls, zoom).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Regrow").clicked() {
                    self.stale = true;
                }

                ui.separator();

                if ui.checkbox(&mut self.animate, "Animate").changed() {
                    // Switching pacing off reveals the rest of the current
                    // sequence; switching it on replays it.
                    if self.animate {
                        self.played = 0;
                        self.playing = !self.commands.is_empty();
                    } else {
                        self.played = self.commands.len();
                        self.playing = false;
                    }
                }

                if self.playing {
                    if ui.button("⏸ Pause").clicked() {
                        self.playing = false;
                    }
                } else if ui
                    .add_enabled(
                        self.animate && self.played < self.commands.len(),
                        egui::Button::new("▶ Play"),
                    )
                    .clicked()
                {
                    self.playing = true;
                }

                ui.add(
                    egui::DragValue::new(&mut self.step_interval)
                        .prefix("dt = ")
                        .range(0.0..=1.0)
                        .speed(0.005),
                );

                ui.separator();
                ui.add(egui::Slider::new(&mut self.zoom, 0.1..=10.0).text("Zoom"));
            });
        });
    }

    /// Builds the bottom status bar (draw-call counts, playback progress).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!(
                    "played = {} / {}",
                    self.played,
                    self.commands.len()
                ));
                ui.separator();
                ui.label(format!("segments = {}", self.played_segments()));
                ui.label(format!("flowers = {}", self.played_flowers()));
            });
        });
    }

    /// Builds the right-hand configuration panel, the viewer's counterpart
    /// of the original parameter form. Any edit invalidates the current
    /// sequence.
    fn ui_config_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("config_panel")
            .resizable(true)
            .default_width(240.0)
            .show(ctx, |ui| {
                ui.heading("Tree");

                let mut changed = false;

                ui.separator();
                ui.label("Trunk");
                changed |= Self::labeled_drag_f32(
                    ui,
                    "root x:",
                    &mut self.cfg.root_position.x,
                    -2000.0..=2000.0,
                    1.0,
                );
                changed |= Self::labeled_drag_f32(
                    ui,
                    "root y:",
                    &mut self.cfg.root_position.y,
                    -2000.0..=2000.0,
                    1.0,
                );
                changed |= Self::labeled_drag_f32(
                    ui,
                    "height:",
                    &mut self.cfg.main_branch_height,
                    0.0..=2000.0,
                    1.0,
                );
                changed |= Self::labeled_drag_f32(
                    ui,
                    "thickness:",
                    &mut self.cfg.main_branch_thickness,
                    0.0..=300.0,
                    0.5,
                );

                ui.separator();
                ui.label("Branching");
                changed |= Self::labeled_drag_f32(
                    ui,
                    "angle delta:",
                    &mut self.cfg.angle_delta,
                    0.0..=std::f32::consts::PI,
                    0.01,
                );
                changed |= Self::labeled_drag_f32(
                    ui,
                    "length decay:",
                    &mut self.cfg.branch_length_decrease_ratio,
                    0.0..=1.0,
                    0.005,
                );
                changed |= Self::labeled_drag_f32(
                    ui,
                    "thickness decay:",
                    &mut self.cfg.branch_thickness_decrease_ratio,
                    0.0..=1.0,
                    0.005,
                );
                changed |= ui.checkbox(&mut self.cfg.random, "Jitter angles").changed();

                ui.separator();
                ui.label("Flowers");
                changed |= ui.checkbox(&mut self.cfg.has_flower, "Draw flowers").changed();
                changed |= Self::labeled_color(ui, "flower:", &mut self.cfg.flower_color);

                ui.separator();
                ui.label("Colors");
                changed |= Self::labeled_color(ui, "branch:", &mut self.cfg.branch_color);
                changed |= Self::labeled_color(ui, "background:", &mut self.background);

                ui.separator();
                if ui.button("Reset to defaults").clicked() {
                    self.cfg = TreeConfig::default();
                    self.background = DEFAULT_BACKGROUND;
                    changed = true;
                }

                if changed {
                    self.stale = true;
                }
            });
    }

    /// Paints one draw command in screen space.
    fn paint_command(&self, painter: &egui::Painter, rect: egui::Rect, command: &DrawCommand) {
        match *command {
            DrawCommand::Segment {
                from,
                to,
                width,
                color,
            } => {
                let a = self.world_to_screen(from, rect);
                let b = self.world_to_screen(to, rect);
                painter.line_segment([a, b], egui::Stroke::new(width * self.zoom, color32(color)));
            }
            DrawCommand::FilledCircle {
                center,
                radius,
                color,
            } => {
                let c = self.world_to_screen(center, rect);
                painter.circle_filled(c, radius * self.zoom, color32(color));
            }
        }
    }

    /// Builds the central panel where the tree is drawn.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new())
            .show(ctx, |ui| {
                let response =
                    ui.allocate_response(ui.available_size(), egui::Sense::click_and_drag());
                let rect = response.rect;
                let painter = ui.painter_at(rect);

                // Pan with drag.
                if response.dragged() {
                    self.pan += response.drag_delta();
                }

                // Zoom around the mouse cursor.
                let scroll = ui.ctx().input(|i| i.raw_scroll_delta.y);
                if scroll != 0.0 {
                    let pointer_screen = response.hover_pos().unwrap_or(rect.center());
                    let world_before = self.screen_to_world(pointer_screen, rect);

                    let factor = (1.0 + scroll * 0.001).clamp(0.5, 2.0);
                    self.zoom = (self.zoom * factor).clamp(0.1, 10.0);

                    let screen_after = self.world_to_screen(world_before, rect);
                    self.pan += pointer_screen - screen_after;
                }

                // A resized surface invalidates the in-flight sequence.
                let bounds = Self::bounds_for(rect);
                if self.stale || bounds != self.bounds {
                    self.regrow(bounds);
                }

                // Clear, then replay the visible prefix in recorded order.
                painter.rect_filled(rect, egui::CornerRadius::ZERO, color32(self.background));
                for command in &self.commands[..self.played] {
                    self.paint_command(&painter, rect, command);
                }

                if self.playing {
                    let now = ctx.input(|i| i.time);
                    self.step_playback(now);
                    ctx.request_repaint();
                }
            });
    }
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    ///
    /// This method:
    /// - Renders the top control bar and status bar.
    /// - Renders the config side panel.
    /// - Draws the central tree view and handles interactions.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_config_panel(ctx);
        self.ui_central_panel(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui;
    use glam::Vec2;

    fn test_rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::Pos2::new(0.0, 0.0), egui::vec2(800.0, 600.0))
    }

    #[test]
    fn world_to_screen_and_back_is_roundtrip() {
        let mut viewer = Viewer::new();
        // Use non-trivial zoom and pan to exercise the math.
        viewer.zoom = 2.0;
        viewer.pan = egui::vec2(15.0, -7.0);
        let rect = test_rect();

        let world_points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, -5.0),
            Vec2::new(-3.5, 8.25),
        ];

        let eps = 1e-4;

        for p in world_points {
            let screen = viewer.world_to_screen(p, rect);
            let back = viewer.screen_to_world(screen, rect);

            assert!(
                (back.x - p.x).abs() < eps && (back.y - p.y).abs() < eps,
                "roundtrip mismatch: p={:?}, back={:?}",
                p,
                back
            );
        }
    }

    #[test]
    fn world_origin_maps_to_bottom_center() {
        let viewer = Viewer::new();
        let rect = test_rect();

        let origin = viewer.world_to_screen(Vec2::ZERO, rect);
        assert_eq!(origin, egui::pos2(400.0, 600.0));

        // y grows upward in world space, so screen y shrinks.
        let up = viewer.world_to_screen(Vec2::new(0.0, 100.0), rect);
        assert!(up.y < origin.y);
    }

    #[test]
    fn regrow_produces_a_sequence_and_restarts_paced_playback() {
        let mut viewer = Viewer::new();
        viewer.animate = true;

        viewer.regrow(Viewer::bounds_for(test_rect()));

        // At minimum the trunk is always drawn.
        assert!(!viewer.commands.is_empty());
        assert!(matches!(
            viewer.commands[0],
            DrawCommand::Segment { .. }
        ));

        // Paced playback starts from scratch.
        assert_eq!(viewer.played, 0);
        assert!(viewer.playing);
        assert!(!viewer.stale);
    }

    #[test]
    fn regrow_without_pacing_shows_everything_at_once() {
        let mut viewer = Viewer::new();
        viewer.animate = false;

        viewer.regrow(Viewer::bounds_for(test_rect()));

        assert_eq!(viewer.played, viewer.commands.len());
        assert!(!viewer.playing);
    }

    #[test]
    fn step_playback_advances_and_stops_at_the_end() {
        let mut viewer = Viewer::new();
        viewer.animate = true;
        viewer.step_interval = 0.0;
        viewer.regrow(Viewer::bounds_for(test_rect()));

        let total = viewer.commands.len();
        let mut now = 1.0;
        while viewer.playing {
            let before = viewer.played;
            viewer.step_playback(now);
            assert!(viewer.played > before, "playback must make progress");
            now += 1.0;
        }

        assert_eq!(viewer.played, total);
    }

    #[test]
    fn played_counts_split_segments_and_flowers() {
        let mut viewer = Viewer::new();
        viewer.animate = false;
        viewer.regrow(Viewer::bounds_for(test_rect()));

        assert_eq!(
            viewer.played_segments() + viewer.played_flowers(),
            viewer.commands.len()
        );
        assert!(viewer.played_segments() >= 1);
    }
}
