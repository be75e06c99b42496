use eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke};

pub use crate::ui::ui_text::UI_TEXT;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub card: Color32,
    pub error: Color32,
    pub subdued: Color32,
}

/// Compass geometry, in points.
#[derive(Clone, Copy, Default)]
pub struct CompassStyle {
    pub diameter: f32,
    pub ring_width: f32,
    pub major_tick: f32,
    pub minor_tick: f32,
    pub needle_width: f32,
    pub ring: Color32,
    pub tick: Color32,
    pub north: Color32,
    pub needle: Color32,
    pub hub: Color32,
}

#[derive(Clone, Copy, Default)]
pub struct UiConfig {
    pub colors: UiColors,
    pub compass: CompassStyle,
    pub content_width: f32,
    pub clock_size: f32,
}

pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::from_rgb(240, 220, 160),
        subsection_heading: Color32::ORANGE,
        central_panel: Color32::from_rgb(18, 32, 30),
        card: Color32::from_rgb(30, 50, 46),
        error: Color32::from_rgb(230, 110, 100),
        subdued: Color32::from_rgb(130, 140, 138),
    },
    compass: CompassStyle {
        diameter: 240.0,
        ring_width: 3.0,
        major_tick: 14.0,
        minor_tick: 7.0,
        needle_width: 4.0,
        ring: Color32::from_rgb(200, 200, 190),
        tick: Color32::from_rgb(150, 160, 155),
        north: Color32::from_rgb(230, 90, 80),
        needle: Color32::from_rgb(90, 200, 160),
        hub: Color32::from_rgb(240, 220, 160),
    },
    content_width: 420.0,
    clock_size: 40.0,
};

impl UiConfig {
    /// Frame for the Sunrise / Qibla / prayer cards
    pub fn card_frame(&self) -> Frame {
        Frame {
            fill: self.colors.card,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(12, 8),
            corner_radius: CornerRadius::same(6),
            ..Default::default()
        }
    }
}
