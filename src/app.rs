use std::time::Instant;

use eframe::egui::{self, Color32, Pos2, Rect, Sense};

use crate::frame_clock::FrameClock;
use crate::star_field::{StarField, GOAL_FPS_MAX, GOAL_FPS_MIN, RAW_SETTING_MAX};
use crate::types::{CanvasSurface, Color, FieldSettings, FieldStats};

pub struct StarfieldApp {
    field: StarField,
    clock: FrameClock,
    settings: FieldSettings,
    stats: FieldStats,
    canvas_size: egui::Vec2,
    paused: bool,
}

impl StarfieldApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            field: StarField::new(),
            clock: FrameClock::new(Instant::now()),
            settings: FieldSettings::default(),
            stats: FieldStats::default(),
            canvas_size: egui::Vec2::ZERO,
            paused: false,
        }
    }

    fn draw_controls(&mut self, ui: &mut egui::Ui) {
        ui.heading("Starfield");

        ui.checkbox(&mut self.settings.colorful, "colorful trails");
        ui.add(
            egui::Slider::new(&mut self.settings.goal_fps, GOAL_FPS_MIN..=GOAL_FPS_MAX)
                .step_by(2.0)
                .text("goal FPS"),
        );
        ui.add(
            egui::Slider::new(&mut self.settings.acceleration, 0..=RAW_SETTING_MAX)
                .step_by(2.0)
                .text("acceleration"),
        );
        ui.add(
            egui::Slider::new(&mut self.settings.proximity, 0..=RAW_SETTING_MAX)
                .step_by(2.0)
                .text("proximity"),
        );

        if ui
            .button(if self.paused { "Resume" } else { "Pause" })
            .clicked()
        {
            self.paused = !self.paused;
            if !self.paused {
                self.clock.resync(Instant::now());
            }
        }

        ui.separator();
        ui.label(format!("drawn stars: {}", self.stats.drawn_stars));
        ui.label(format!("buffered stars: {}", self.stats.buffered_stars));
        ui.label(format!("actual FPS: {}", self.stats.actual_fps));
    }

    fn draw_field(&mut self, ui: &mut egui::Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
        let rect = response.rect;

        if rect.size() != self.canvas_size {
            self.canvas_size = rect.size();
            self.field.on_resize(rect.width(), rect.height());
        }

        let mut surface = PainterSurface {
            painter: &painter,
            viewport: rect,
            origin: rect.center(),
        };

        if self.paused {
            self.field.redraw(&self.settings, &mut surface);
        } else {
            let sample = self.clock.tick(Instant::now());
            self.stats = self
                .field
                .advance(sample.delta_ms, sample.fps, &self.settings, &mut surface);
        }
    }
}

impl eframe::App for StarfieldApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("controls")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                self.draw_controls(ui);
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Color32::BLACK))
            .show(ctx, |ui| {
                self.draw_field(ui);
            });

        // Repaint as fast as the host allows; the frame clock measures the
        // achieved rate and the field adapts its star count to it.
        ctx.request_repaint();
    }
}

/// Camera-space adapter over the egui painter for one frame. Construction
/// fixes the origin translation, so the field draws as if (0, 0) were the
/// viewport center.
struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    viewport: Rect,
    origin: Pos2,
}

impl CanvasSurface for PainterSurface<'_> {
    fn clear(&mut self, color: Color) {
        self.painter.rect_filled(self.viewport, 0.0, to_color32(color));
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        let min = self.origin + egui::vec2(x, y);
        let rect = Rect::from_min_size(min, egui::vec2(width, height));
        self.painter.rect_filled(rect, 0.0, to_color32(color));
    }
}

fn to_color32(color: Color) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}
