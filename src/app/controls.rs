//! Controls panel: per-hand color and width, hour cycle, reset

use super::App;
use crate::clock::{AnimationPhase, ClockAttributes, ClockView, HandStyles, LocalClock};
use crate::theme;
use crate::types::{Hand, HourCycle};
use crate::ui::components::{caption, color_swatch, section_header};
use eframe::egui;
use tracing::info;

impl App {
    pub fn render_controls(&mut self, ui: &mut egui::Ui) {
        section_header(ui, egui_phosphor::regular::PALETTE, "Hands");

        for hand in Hand::ALL {
            let style = *self.clock.styles().get(hand);
            caption(ui, hand.label());

            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing = egui::vec2(theme::SPACING_SM, theme::SPACING_SM);
                for color in theme::HAND_PALETTE {
                    if color_swatch(ui, color, style.color == color, theme::SWATCH_SIZE).clicked() {
                        self.apply_hand_color(hand, color);
                    }
                }
            });

            let mut width = style.stroke_width;
            let slider = egui::Slider::new(&mut width, theme::HAND_WIDTH_RANGE).text("width");
            if ui.add(slider).changed() {
                self.clock.set_hand_width(hand, width);
                self.attributes.set_width(hand, width);
            }
            ui.add_space(theme::SPACING_MD);
        }

        ui.separator();
        section_header(ui, egui_phosphor::regular::CLOCK, "Hour hand");

        let mut cycle = self.hour_cycle;
        ui.horizontal(|ui| {
            ui.selectable_value(&mut cycle, HourCycle::Day, "24 h turn");
            ui.selectable_value(&mut cycle, HourCycle::HalfDay, "12 h turn");
        });
        if cycle != self.hour_cycle {
            self.hour_cycle = cycle;
            self.restart_clock(ui.ctx());
        }

        let angles = self.clock.angles();
        for hand in Hand::ALL {
            let phase = match self.clock.phase(hand) {
                AnimationPhase::Warmup => "warmup",
                AnimationPhase::Steady => "steady",
                AnimationPhase::Cancelled => "stopped",
            };
            caption(ui, &format!("{}: {:.1}° ({})", hand.label(), angles.get(hand), phase));
        }

        ui.add_space(theme::SPACING_MD);
        ui.horizontal(|ui| {
            let reset = egui::Button::new(format!(
                "{} Reset",
                egui_phosphor::regular::ARROW_COUNTER_CLOCKWISE
            ));
            if ui.add(reset).clicked() {
                info!("Hand styles reset to defaults");
                self.attributes = ClockAttributes::default();
                self.clock.set_styles(HandStyles::default());
            }
            if ui.button("Classic").clicked() {
                info!("Hand styles set to classic");
                self.attributes = ClockAttributes::default();
                self.attributes.set_color(Hand::Hour, egui::Color32::BLACK);
                self.clock.set_styles(HandStyles::classic());
            }
        });

        ui.add_space(theme::SPACING_LG);
        caption(ui, "Press C to toggle this panel");
    }

    fn apply_hand_color(&mut self, hand: Hand, color: egui::Color32) {
        match hand {
            Hand::Second => self.clock.set_second_hand_color(color),
            Hand::Minute => self.clock.set_minute_hand_color(color),
            Hand::Hour => self.clock.set_hour_hand_color(color),
        }
        self.attributes.set_color(hand, color);
    }

    /// Swap in a fresh clock, e.g. after the hour cycle changed. Time is read again.
    fn restart_clock(&mut self, ctx: &egui::Context) {
        info!(hour_cycle = ?self.hour_cycle, "Restarting clock");
        self.clock.detach();
        self.clock = ClockView::new(
            Some(&self.attributes),
            self.hour_cycle,
            &LocalClock,
            Box::new(ctx.clone()),
        );
    }
}
