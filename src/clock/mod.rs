//! Clock module - the animated analog clock widget
//!
//! [`ClockView`] owns one [`HandDriver`] per hand and paints a fresh
//! [`HandAngles`] snapshot every frame. Drivers share a parent cancellation
//! token so the whole clock stops with a single `detach()` (or on drop).

mod angles;
mod driver;
mod render;
mod style;
mod time_source;

pub use driver::AnimationPhase;
pub use style::{ClockAttributes, HandStyles};
pub use time_source::{LocalClock, TimeSource};

use crate::types::{Hand, HandAngles, HourCycle};
use driver::HandDriver;
use eframe::egui;
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Something that can schedule a redraw without blocking
pub trait RepaintSink {
    fn schedule_redraw(&self);
}

impl RepaintSink for egui::Context {
    fn schedule_redraw(&self) {
        self.request_repaint();
    }
}

pub struct ClockView {
    drivers: [HandDriver; 3],
    styles: HandStyles,
    angles: HandAngles,
    cancel: CancellationToken,
    repaint: Box<dyn RepaintSink>,
}

impl ClockView {
    pub fn new(
        attrs: Option<&ClockAttributes>,
        hour_cycle: HourCycle,
        time: &dyn TimeSource,
        repaint: Box<dyn RepaintSink>,
    ) -> Self {
        Self::starting_at(attrs, hour_cycle, time, repaint, Instant::now())
    }

    fn starting_at(
        attrs: Option<&ClockAttributes>,
        hour_cycle: HourCycle,
        time: &dyn TimeSource,
        repaint: Box<dyn RepaintSink>,
        started_at: Instant,
    ) -> Self {
        let now = time.now();
        let angles = angles::initial_angles(now);
        let styles = attrs.map(HandStyles::resolve).unwrap_or_default();
        let cancel = CancellationToken::new();

        info!(
            hour = now.hour,
            minute = now.minute,
            second = now.second,
            ?hour_cycle,
            "Clock created"
        );

        let drivers = Hand::ALL.map(|hand| {
            HandDriver::start(
                hand,
                angles.get(hand),
                hand.period(hour_cycle),
                started_at,
                cancel.child_token(),
            )
        });

        Self {
            drivers,
            styles,
            angles,
            cancel,
            repaint,
        }
    }

    /// Latest snapshot of all three hands
    pub fn angles(&self) -> HandAngles {
        self.angles
    }

    pub fn styles(&self) -> &HandStyles {
        &self.styles
    }

    pub fn phase(&self, hand: Hand) -> AnimationPhase {
        self.drivers[hand.index()].phase()
    }

    pub fn is_detached(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Advance every hand to `now` and request a redraw if anything moved.
    pub fn advance(&mut self, now: Instant) -> HandAngles {
        let mut moved = false;
        for hand in Hand::ALL {
            if let Some(angle) = self.drivers[hand.index()].tick(now) {
                self.angles.set(hand, angle);
                moved = true;
            }
        }
        if moved {
            self.repaint.schedule_redraw();
        }
        self.angles
    }

    pub fn set_hour_hand_color(&mut self, color: egui::Color32) {
        self.set_hand_color(Hand::Hour, color);
    }

    pub fn set_minute_hand_color(&mut self, color: egui::Color32) {
        self.set_hand_color(Hand::Minute, color);
    }

    pub fn set_second_hand_color(&mut self, color: egui::Color32) {
        self.set_hand_color(Hand::Second, color);
    }

    fn set_hand_color(&mut self, hand: Hand, color: egui::Color32) {
        debug!(hand = hand.label(), ?color, "Hand color changed");
        self.styles.get_mut(hand).color = color;
        self.repaint.schedule_redraw();
    }

    pub fn set_hand_width(&mut self, hand: Hand, width: f32) {
        debug!(hand = hand.label(), width, "Hand width changed");
        self.styles.get_mut(hand).stroke_width = width;
        self.repaint.schedule_redraw();
    }

    /// Replace every hand style at once, e.g. after resetting to defaults
    pub fn set_styles(&mut self, styles: HandStyles) {
        self.styles = styles;
        self.repaint.schedule_redraw();
    }

    /// Stop all hand animations. Safe to call more than once.
    pub fn detach(&mut self) {
        if !self.is_detached() {
            self.cancel.cancel();
            info!(angles = ?self.angles, "Clock detached");
        }
    }

    /// Draw callback: take the largest square available and paint face + hands
    pub fn ui(&mut self, ui: &mut egui::Ui) -> egui::Response {
        let (available, response) =
            ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());
        let angles = self.advance(Instant::now());

        if ui.is_rect_visible(available) {
            let bounds = render::face_bounds(available);
            let painter = ui.painter_at(available);
            render::paint_face(&painter, bounds);
            render::paint_hands(&painter, bounds, angles, &self.styles);
        }

        response
    }
}

impl Drop for ClockView {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use crate::types::WallTime;
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Duration;

    #[derive(Clone, Default)]
    struct CountingSink(Rc<Cell<usize>>);

    impl RepaintSink for CountingSink {
        fn schedule_redraw(&self) {
            self.0.set(self.0.get() + 1);
        }
    }

    impl CountingSink {
        fn count(&self) -> usize {
            self.0.get()
        }
    }

    fn clock_at(time: WallTime, t0: Instant) -> (ClockView, CountingSink) {
        let sink = CountingSink::default();
        let view =
            ClockView::starting_at(None, HourCycle::Day, &time, Box::new(sink.clone()), t0);
        (view, sink)
    }

    #[test]
    fn test_initial_snapshot() {
        let (view, sink) = clock_at(WallTime::new(3, 0, 0), Instant::now());
        let angles = view.angles();
        assert_eq!(angles.second, 0.0);
        assert_eq!(angles.minute, 0.0);
        assert!((angles.hour - 90.0).abs() < 1e-3);
        for hand in Hand::ALL {
            assert_eq!(view.phase(hand), AnimationPhase::Warmup);
        }
        assert_eq!(sink.count(), 0);
        assert_eq!(*view.styles(), HandStyles::default());
    }

    #[test]
    fn test_hands_use_their_own_periods() {
        let t0 = Instant::now();
        let (view, _) = clock_at(WallTime::new(0, 0, 0), t0);
        assert_eq!(view.drivers[Hand::Second.index()].period(), SECOND_PERIOD);
        assert_eq!(view.drivers[Hand::Minute.index()].period(), MINUTE_PERIOD);
        assert_eq!(view.drivers[Hand::Hour.index()].period(), HOUR_PERIOD_DAY);
    }

    #[test]
    fn test_second_hand_enters_steady_alone() {
        let t0 = Instant::now();
        let (mut view, sink) = clock_at(WallTime::new(3, 0, 0), t0);

        let angles = view.advance(t0 + SECOND_PERIOD);
        assert_eq!(angles.second, 0.0);
        assert_eq!(view.phase(Hand::Second), AnimationPhase::Steady);
        assert_eq!(view.phase(Hand::Minute), AnimationPhase::Warmup);
        assert_eq!(view.phase(Hand::Hour), AnimationPhase::Warmup);
        assert_eq!(sink.count(), 1);

        let angles = view.advance(t0 + SECOND_PERIOD + Duration::from_secs(30));
        assert!((angles.second - 180.0).abs() < 0.01);
        assert_eq!(sink.count(), 2);
    }

    #[test]
    fn test_setters_update_style_and_redraw() {
        let (mut view, sink) = clock_at(WallTime::new(9, 15, 0), Instant::now());

        view.set_hour_hand_color(egui::Color32::BLUE);
        view.set_minute_hand_color(egui::Color32::GREEN);
        view.set_second_hand_color(egui::Color32::WHITE);
        view.set_hand_width(Hand::Second, 2.0);

        assert_eq!(view.styles().hour.color, egui::Color32::BLUE);
        assert_eq!(view.styles().minute.color, egui::Color32::GREEN);
        assert_eq!(view.styles().second.color, egui::Color32::WHITE);
        assert_eq!(view.styles().second.stroke_width, 2.0);
        assert_eq!(sink.count(), 4);

        view.set_styles(HandStyles::classic());
        assert_eq!(*view.styles(), HandStyles::classic());
        assert_eq!(sink.count(), 5);
    }

    #[test]
    fn test_detach_freezes_hands() {
        let t0 = Instant::now();
        let (mut view, sink) = clock_at(WallTime::new(6, 30, 15), t0);

        let before = view.advance(t0 + Duration::from_secs(10));
        assert_eq!(sink.count(), 1);

        view.detach();
        view.detach();
        assert!(view.is_detached());

        let after = view.advance(t0 + Duration::from_secs(20));
        assert_eq!(before, after);
        assert_eq!(sink.count(), 1);
        for hand in Hand::ALL {
            assert_eq!(view.phase(hand), AnimationPhase::Cancelled);
        }
    }

    #[test]
    fn test_drop_cancels_drivers() {
        let (view, _) = clock_at(WallTime::new(1, 2, 3), Instant::now());
        let token = view.cancel.clone();
        assert!(!token.is_cancelled());
        drop(view);
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_attributes_applied_at_construction() {
        let attrs = ClockAttributes {
            second_hand_color: Some("#2dd4bf".to_string()),
            ..Default::default()
        };
        let view = ClockView::starting_at(
            Some(&attrs),
            HourCycle::HalfDay,
            &WallTime::new(0, 0, 0),
            Box::new(CountingSink::default()),
            Instant::now(),
        );
        assert_eq!(view.styles().second.color, egui::Color32::from_rgb(0x2d, 0xd4, 0xbf));
        assert_eq!(view.drivers[Hand::Hour.index()].period(), HOUR_PERIOD_HALF_DAY);
    }
}
