//! App module - contains the main application state and logic

mod controls;

use crate::clock::{ClockAttributes, ClockView, LocalClock};
use crate::settings::Settings;
use crate::theme;
use crate::types::HourCycle;
use eframe::egui;
use std::path::PathBuf;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) clock: ClockView,
    // Styling as it will be written back to settings.json
    pub(crate) attributes: ClockAttributes,
    pub(crate) hour_cycle: HourCycle,
    pub(crate) show_controls: bool,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, data_dir: PathBuf) -> Self {
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        let clock = ClockView::new(
            Some(&settings.clock),
            settings.hour_cycle,
            &LocalClock,
            Box::new(cc.egui_ctx.clone()),
        );

        Self {
            clock,
            attributes: settings.clock,
            hour_cycle: settings.hour_cycle,
            show_controls: settings.show_controls,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        }
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            show_controls: self.show_controls,
            hour_cycle: self.hour_cycle,
            clock: self.attributes.clone(),
        };
        settings.save(&self.data_dir);
    }
}
