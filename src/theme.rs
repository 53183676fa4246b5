//! Centralized theme constants for the clock app
//! Panel colors, face colors and sizes should reference these constants

use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0x09, 0x09, 0x0b); // zinc-950
pub const BG_ELEVATED: Color32 = Color32::from_rgb(0x18, 0x18, 0x1b); // zinc-900
pub const BG_SURFACE: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a); // zinc-800
pub const BG_HOVER: Color32 = Color32::from_rgb(0x0f, 0x1a, 0x19); // subtle teal hover

// =============================================================================
// COLORS - Accent & Text
// =============================================================================
pub const ACCENT: Color32 = Color32::from_rgb(0x2d, 0xd4, 0xbf); // teal-400
pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0xe4, 0xe4, 0xe7); // zinc-200
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0xa1, 0xa1, 0xaa); // zinc-400

// =============================================================================
// COLORS - Borders
// =============================================================================
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a); // zinc-800
pub const BORDER_DEFAULT: Color32 = Color32::from_rgb(0x3f, 0x3f, 0x46); // zinc-700

// =============================================================================
// COLORS - Clock face
// =============================================================================
pub const FACE_FILL: Color32 = Color32::from_rgb(0xf4, 0xf4, 0xf5); // zinc-100
pub const FACE_RIM: Color32 = Color32::from_rgb(0x3f, 0x3f, 0x46); // zinc-700
pub const FACE_TICK: Color32 = Color32::from_rgb(0x52, 0x52, 0x5b); // zinc-600

/// Swatches offered for each hand in the controls panel
pub const HAND_PALETTE: [Color32; 8] = [
    Color32::BLACK,
    Color32::RED,
    Color32::from_rgb(0x2d, 0xd4, 0xbf), // teal-400
    Color32::from_rgb(0x38, 0xbd, 0xf8), // sky-400
    Color32::from_rgb(0x34, 0xd3, 0x99), // emerald-400
    Color32::from_rgb(0xfb, 0xbf, 0x24), // amber-400
    Color32::from_rgb(0xa7, 0x8b, 0xfa), // violet-400
    Color32::from_rgb(0x71, 0x71, 0x7a), // zinc-500
];

// =============================================================================
// DIMENSIONS
// =============================================================================
pub const FONT_HEADING: f32 = 16.0;
pub const FONT_LABEL: f32 = 13.0;
pub const CONTROLS_PANEL_WIDTH: f32 = 250.0;
pub const SWATCH_SIZE: f32 = 18.0;
pub const FACE_RIM_WIDTH: f32 = 3.0;
pub const HAND_WIDTH_RANGE: std::ops::RangeInclusive<f32> = 1.0..=20.0;

pub const RADIUS_DEFAULT: f32 = 4.0;
pub const STROKE_DEFAULT: f32 = 1.0;
pub const STROKE_THICK: f32 = 2.0;

pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = BG_BASE;
    visuals.window_fill = BG_ELEVATED;
    visuals.extreme_bg_color = BG_BASE;
    visuals.faint_bg_color = BG_ELEVATED;
    visuals.hyperlink_color = ACCENT;
    visuals.slider_trailing_fill = true;
    visuals.selection.bg_fill = ACCENT.gamma_multiply(0.5);
    visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE);
    visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(STROKE_DEFAULT, TEXT_SECONDARY);
    visuals.widgets.inactive.weak_bg_fill = BG_SURFACE;
    visuals.widgets.inactive.bg_fill = BG_SURFACE;
    visuals.widgets.hovered.weak_bg_fill = BG_HOVER;
    visuals.widgets.hovered.bg_fill = BG_HOVER;
    visuals.interact_cursor = Some(egui::CursorIcon::PointingHand);
    ctx.set_visuals(visuals);

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(SPACING_MD, 6.0);
        style.spacing.button_padding = egui::vec2(SPACING_LG, 6.0);
    });
}

// =============================================================================
// HELPER - Controls panel frame
// =============================================================================
pub fn controls_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_ELEVATED)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
        .inner_margin(egui::Margin::same(SPACING_LG as i8))
}
