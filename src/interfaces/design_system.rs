use eframe::egui;

/// Light Design System for the dashboard
pub struct DesignSystem;

impl DesignSystem {
    // --- Colors ---

    // Backgrounds
    pub const BG_WINDOW: egui::Color32 = egui::Color32::from_rgb(244, 244, 245); // #F4F4F5
    pub const BG_CARD: egui::Color32 = egui::Color32::WHITE;
    pub const BG_INPUT: egui::Color32 = egui::Color32::WHITE;

    // Accents
    pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(165, 180, 252); // #A5B4FC (Indigo)

    // Change buckets
    pub const POSITIVE: egui::Color32 = egui::Color32::from_rgb(22, 163, 74); // #16A34A
    pub const NEGATIVE: egui::Color32 = egui::Color32::from_rgb(220, 38, 38); // #DC2626
    pub const NEUTRAL: egui::Color32 = egui::Color32::from_rgb(107, 114, 128); // #6B7280

    // Text
    pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(24, 24, 27);
    pub const TEXT_SECONDARY: egui::Color32 = egui::Color32::from_rgb(113, 113, 122);
    pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_rgb(161, 161, 170);

    // Borders
    pub const BORDER_SUBTLE: egui::Color32 = egui::Color32::from_rgb(228, 228, 231);
    pub const BORDER_INPUT: egui::Color32 = egui::Color32::from_rgb(212, 212, 216);

    // Trend line (black stroke on a white card; the midline reuses it faded)
    pub const TREND_STROKE: egui::Color32 = egui::Color32::from_rgb(24, 24, 27);

    // --- Metrics ---

    pub const ROUNDING_LARGE: f32 = 16.0;

    pub const SPACING_SMALL: f32 = 8.0;
    pub const SPACING_MEDIUM: f32 = 16.0;
    pub const SPACING_LARGE: f32 = 24.0;

    /// Content column width, matching the original page measure.
    pub const CONTENT_MAX_WIDTH: f32 = 1024.0;

    // --- Styles ---

    /// Returns the standard visual style for the application
    pub fn theme() -> egui::Visuals {
        let mut visuals = egui::Visuals::light();

        visuals.window_fill = Self::BG_WINDOW;
        visuals.panel_fill = Self::BG_WINDOW;
        visuals.extreme_bg_color = Self::BG_INPUT;

        visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, Self::BORDER_SUBTLE);
        visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, Self::TEXT_PRIMARY);

        visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, Self::TEXT_SECONDARY);
        visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, Self::BORDER_INPUT);

        visuals.selection.bg_fill = Self::ACCENT.linear_multiply(0.4);
        visuals.selection.stroke = egui::Stroke::new(1.0, Self::ACCENT);

        visuals
    }

    /// Standard Card Styling
    pub fn card_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_CARD)
            .corner_radius(Self::ROUNDING_LARGE)
            .stroke(egui::Stroke::new(1.0, Self::BORDER_SUBTLE))
            .inner_margin(Self::SPACING_MEDIUM as i8)
            .shadow(egui::epaint::Shadow {
                offset: [0, 4],
                blur: 16,
                spread: 0,
                color: egui::Color32::from_black_alpha(25),
            })
    }

    /// Application Main Layout Frame
    pub fn main_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_WINDOW)
            .inner_margin(egui::Margin::same(Self::SPACING_MEDIUM as i8))
    }

    /// Bucket color for a percentage change: green above +5, red below -5,
    /// gray otherwise. The boundary values themselves stay neutral.
    pub fn change_color(pct: f64) -> egui::Color32 {
        if pct > 5.0 {
            Self::POSITIVE
        } else if pct < -5.0 {
            Self::NEGATIVE
        } else {
            Self::NEUTRAL
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_color_buckets() {
        assert_eq!(DesignSystem::change_color(6.0), DesignSystem::POSITIVE);
        assert_eq!(DesignSystem::change_color(-6.0), DesignSystem::NEGATIVE);
        assert_eq!(DesignSystem::change_color(0.0), DesignSystem::NEUTRAL);
    }

    #[test]
    fn test_change_color_boundaries_are_neutral() {
        assert_eq!(DesignSystem::change_color(5.0), DesignSystem::NEUTRAL);
        assert_eq!(DesignSystem::change_color(-5.0), DesignSystem::NEUTRAL);
        assert_eq!(DesignSystem::change_color(5.01), DesignSystem::POSITIVE);
        assert_eq!(DesignSystem::change_color(-5.01), DesignSystem::NEGATIVE);
    }
}
