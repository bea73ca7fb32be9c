use crate::domain::trend::{TREND_STROKE_WIDTH, trend_path};
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// Fixed height of the trend strip at the bottom of each card.
pub const SPARKLINE_HEIGHT: f32 = 48.0;

/// Draws the 7-day price trend into a strip spanning the available width.
/// The geometry comes from `trend_path`, recomputed against the strip's
/// current size every frame; an empty series leaves the strip blank.
pub fn sparkline(ui: &mut egui::Ui, samples: &[Option<f64>]) {
    use egui::epaint::{PathShape, Stroke};

    let size = egui::vec2(ui.available_width(), SPARKLINE_HEIGHT);
    let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
    let rect = response.rect;

    let Some(path) = trend_path(samples, rect.width(), rect.height()) else {
        return;
    };

    // Faint reference line at vertical center
    let midline_y = rect.top() + path.midline_y;
    painter.line_segment(
        [
            egui::pos2(rect.left(), midline_y),
            egui::pos2(rect.right(), midline_y),
        ],
        Stroke::new(1.0, DesignSystem::TREND_STROKE.linear_multiply(0.25)),
    );

    let points: Vec<egui::Pos2> = path
        .points
        .iter()
        .map(|&(x, y)| egui::pos2(rect.left() + x, rect.top() + y))
        .collect();

    painter.add(PathShape::line(
        points,
        Stroke::new(TREND_STROKE_WIDTH, DesignSystem::TREND_STROKE),
    ));
}
