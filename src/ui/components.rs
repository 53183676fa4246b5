//! Reusable UI components
//!
//! Small standalone widgets used by the controls panel.

use crate::theme;
use eframe::egui;

/// Clickable color swatch; the selected one gets an accent ring
pub fn color_swatch(
    ui: &mut egui::Ui,
    color: egui::Color32,
    selected: bool,
    size: f32,
) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::click());

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        painter.rect_filled(rect, theme::RADIUS_DEFAULT, color);

        let ring = if selected {
            egui::Stroke::new(theme::STROKE_THICK, theme::ACCENT)
        } else if response.hovered() {
            egui::Stroke::new(theme::STROKE_DEFAULT, theme::TEXT_PRIMARY)
        } else {
            egui::Stroke::new(theme::STROKE_DEFAULT, theme::BORDER_DEFAULT)
        };
        painter.rect_stroke(rect, theme::RADIUS_DEFAULT, ring, egui::StrokeKind::Outside);
    }

    response
}

/// Icon + title row used at the top of each panel section
pub fn section_header(ui: &mut egui::Ui, icon: &str, title: &str) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(icon)
                .size(theme::FONT_HEADING)
                .color(theme::ACCENT),
        );
        ui.label(
            egui::RichText::new(title)
                .size(theme::FONT_HEADING)
                .color(theme::TEXT_PRIMARY)
                .strong(),
        );
    });
    ui.add_space(theme::SPACING_SM);
}

/// Muted caption text
pub fn caption(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(theme::FONT_LABEL)
            .color(theme::TEXT_MUTED),
    );
}
