//! Face and hand painting. Everything here is a pure function of the angle
//! snapshot, the hand styles and the widget bounds.

use super::style::HandStyles;
use crate::theme;
use crate::types::{Hand, HandAngles};
use egui::{vec2, Painter, Pos2, Rect, Stroke};

/// Unit vector pointing from the center toward `angle_deg`, clockwise from 12 o'clock
fn direction(angle_deg: f32) -> egui::Vec2 {
    let rad = angle_deg.to_radians();
    vec2(rad.sin(), -rad.cos())
}

/// Distance from the center to the hand tip. The tip sits `height / divisor`
/// below the top edge before rotation.
pub fn hand_length(bounds: Rect, hand: Hand) -> f32 {
    let tip_y = bounds.top() + bounds.height() / hand.tip_divisor();
    (bounds.center().y - tip_y).max(0.0)
}

/// Center and tip of a hand rotated about the face center
pub fn hand_segment(bounds: Rect, hand: Hand, angle_deg: f32) -> [Pos2; 2] {
    let center = bounds.center();
    let tip = center + direction(angle_deg) * hand_length(bounds, hand);
    [center, tip]
}

fn face_radius(bounds: Rect) -> f32 {
    bounds.width().min(bounds.height()) * 0.5 - theme::FACE_RIM_WIDTH
}

pub fn paint_face(painter: &Painter, bounds: Rect) {
    let center = bounds.center();
    let radius = face_radius(bounds);
    if radius <= 0.0 {
        return;
    }

    painter.circle_filled(center, radius, theme::FACE_FILL);
    painter.circle_stroke(center, radius, Stroke::new(theme::FACE_RIM_WIDTH, theme::FACE_RIM));

    for hour in 0..12 {
        let dir = direction(hour as f32 * 30.0);
        // Quarter marks are longer and heavier
        let (inner, width) = if hour % 3 == 0 { (0.80, 4.0) } else { (0.88, 2.0) };
        painter.line_segment(
            [center + dir * radius * inner, center + dir * radius * 0.95],
            Stroke::new(width, theme::FACE_TICK),
        );
    }
}

pub fn paint_hands(painter: &Painter, bounds: Rect, angles: HandAngles, styles: &HandStyles) {
    for hand in Hand::ALL {
        let style = styles.get(hand);
        painter.line_segment(hand_segment(bounds, hand, angles.get(hand)), style.stroke());
    }

    let cap = styles.hour.stroke_width.max(styles.minute.stroke_width);
    painter.circle_filled(bounds.center(), cap, styles.hour.color);
}

/// Largest square that fits in `available`, centered
pub fn face_bounds(available: Rect) -> Rect {
    let side = available.width().min(available.height());
    Rect::from_center_size(available.center(), vec2(side, side))
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn origin_square(side: f32) -> Rect {
        Rect::from_min_size(pos2(0.0, 0.0), vec2(side, side))
    }

    fn close(a: Pos2, b: Pos2) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn test_twelve_oclock_points_up() {
        let bounds = origin_square(110.0);
        let [center, tip] = hand_segment(bounds, Hand::Second, 0.0);
        assert!(close(center, pos2(55.0, 55.0)));
        // top + 110 / 5.5
        assert!(close(tip, pos2(55.0, 20.0)));
    }

    #[test]
    fn test_quarter_turn_points_right() {
        let bounds = origin_square(120.0);
        let [center, tip] = hand_segment(bounds, Hand::Hour, 90.0);
        // 60 - 120 / 4
        assert!(close(tip, center + vec2(30.0, 0.0)));
    }

    #[test]
    fn test_hand_lengths_by_hand() {
        let bounds = origin_square(120.0);
        assert!((hand_length(bounds, Hand::Minute) - 40.0).abs() < 1e-3);
        assert!((hand_length(bounds, Hand::Hour) - 30.0).abs() < 1e-3);
        assert!(hand_length(bounds, Hand::Hour) < hand_length(bounds, Hand::Minute));
    }

    #[test]
    fn test_full_turn_matches_zero() {
        let bounds = origin_square(200.0);
        let a = hand_segment(bounds, Hand::Minute, 0.0);
        let b = hand_segment(bounds, Hand::Minute, 360.0);
        assert!(close(a[1], b[1]));
    }

    #[test]
    fn test_face_bounds_is_centered_square() {
        let available = Rect::from_min_size(pos2(10.0, 0.0), vec2(300.0, 200.0));
        let face = face_bounds(available);
        assert_eq!(face.width(), 200.0);
        assert_eq!(face.height(), 200.0);
        assert!(close(face.center(), available.center()));
    }
}
