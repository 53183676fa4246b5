//! Hand colors and stroke widths
//!
//! Styling comes from an optional attribute bag (the `clock` section of
//! settings.json). It is resolved once into [`HandStyles`]; anything missing
//! or unparseable falls back to the per-hand default.

use crate::constants::*;
use crate::types::Hand;
use egui::Color32;
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandStyle {
    pub color: Color32,
    pub stroke_width: f32,
}

impl HandStyle {
    pub const fn new(color: Color32, stroke_width: f32) -> Self {
        Self { color, stroke_width }
    }

    pub fn stroke(&self) -> egui::Stroke {
        egui::Stroke::new(self.stroke_width, self.color)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandStyles {
    pub second: HandStyle,
    pub minute: HandStyle,
    pub hour: HandStyle,
}

impl Default for HandStyles {
    fn default() -> Self {
        Self {
            second: HandStyle::new(Color32::BLACK, SECOND_HAND_WIDTH),
            minute: HandStyle::new(Color32::BLACK, MINUTE_HAND_WIDTH),
            hour: HandStyle::new(Color32::RED, HOUR_HAND_WIDTH),
        }
    }
}

impl HandStyles {
    /// All-black hands
    pub fn classic() -> Self {
        Self {
            hour: HandStyle::new(Color32::BLACK, HOUR_HAND_WIDTH),
            ..Self::default()
        }
    }

    pub fn get(&self, hand: Hand) -> &HandStyle {
        match hand {
            Hand::Second => &self.second,
            Hand::Minute => &self.minute,
            Hand::Hour => &self.hour,
        }
    }

    pub fn get_mut(&mut self, hand: Hand) -> &mut HandStyle {
        match hand {
            Hand::Second => &mut self.second,
            Hand::Minute => &mut self.minute,
            Hand::Hour => &mut self.hour,
        }
    }

    pub fn resolve(attrs: &ClockAttributes) -> Self {
        let mut styles = Self::default();
        for hand in Hand::ALL {
            let style = styles.get_mut(hand);
            if let Some(raw) = attrs.color(hand) {
                match parse_color(raw) {
                    Some(color) => style.color = color,
                    None => warn!(hand = hand.label(), value = raw, "Invalid hand color, using default"),
                }
            }
            if let Some(width) = attrs.width(hand) {
                style.stroke_width = width;
            }
        }
        styles
    }
}

/// Styled attributes a host can hand to the clock
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second_hand_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second_hand_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minute_hand_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minute_hand_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hour_hand_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hour_hand_width: Option<f32>,
}

impl ClockAttributes {
    pub fn color(&self, hand: Hand) -> Option<&str> {
        match hand {
            Hand::Second => self.second_hand_color.as_deref(),
            Hand::Minute => self.minute_hand_color.as_deref(),
            Hand::Hour => self.hour_hand_color.as_deref(),
        }
    }

    pub fn width(&self, hand: Hand) -> Option<f32> {
        match hand {
            Hand::Second => self.second_hand_width,
            Hand::Minute => self.minute_hand_width,
            Hand::Hour => self.hour_hand_width,
        }
    }

    pub fn set_color(&mut self, hand: Hand, color: Color32) {
        let value = Some(format_color(color));
        match hand {
            Hand::Second => self.second_hand_color = value,
            Hand::Minute => self.minute_hand_color = value,
            Hand::Hour => self.hour_hand_color = value,
        }
    }

    pub fn set_width(&mut self, hand: Hand, width: f32) {
        match hand {
            Hand::Second => self.second_hand_width = Some(width),
            Hand::Minute => self.minute_hand_width = Some(width),
            Hand::Hour => self.hour_hand_width = Some(width),
        }
    }
}

/// Parse `#rrggbb` or `#rrggbbaa` (leading `#` optional)
pub fn parse_color(raw: &str) -> Option<Color32> {
    let hex = raw.trim().trim_start_matches('#');
    if !hex.is_ascii() || !(hex.len() == 6 || hex.len() == 8) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let (r, g, b) = (channel(0)?, channel(2)?, channel(4)?);
    let a = if hex.len() == 8 { channel(6)? } else { 255 };
    Some(Color32::from_rgba_unmultiplied(r, g, b, a))
}

pub fn format_color(color: Color32) -> String {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    if a == 255 {
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    } else {
        format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_attributes() {
        let styles = HandStyles::resolve(&ClockAttributes::default());
        assert_eq!(styles.second, HandStyle::new(Color32::BLACK, 7.0));
        assert_eq!(styles.minute, HandStyle::new(Color32::BLACK, 8.0));
        assert_eq!(styles.hour, HandStyle::new(Color32::RED, 9.0));
        assert_eq!(HandStyles::classic().hour, HandStyle::new(Color32::BLACK, 9.0));
    }

    #[test]
    fn test_attributes_override_defaults() {
        let attrs = ClockAttributes {
            hour_hand_color: Some("#00ff00".to_string()),
            minute_hand_width: Some(3.5),
            ..Default::default()
        };
        let styles = HandStyles::resolve(&attrs);
        assert_eq!(styles.hour.color, Color32::from_rgb(0, 255, 0));
        assert_eq!(styles.hour.stroke_width, 9.0);
        assert_eq!(styles.minute.stroke_width, 3.5);
        assert_eq!(styles.second, HandStyles::default().second);
    }

    #[test]
    fn test_bad_color_falls_back() {
        let attrs = ClockAttributes {
            second_hand_color: Some("not a color".to_string()),
            ..Default::default()
        };
        assert_eq!(HandStyles::resolve(&attrs).second.color, Color32::BLACK);
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("#ff0000"), Some(Color32::RED));
        assert_eq!(parse_color("2dd4bf"), Some(Color32::from_rgb(0x2d, 0xd4, 0xbf)));
        assert_eq!(parse_color("#000000ff"), Some(Color32::BLACK));
        assert_eq!(parse_color("#fff"), None);
        assert_eq!(parse_color("#gg0000"), None);
        assert_eq!(parse_color(""), None);
    }

    #[test]
    fn test_set_color_writes_hex() {
        let mut attrs = ClockAttributes::default();
        attrs.set_color(Hand::Minute, Color32::from_rgb(0x2d, 0xd4, 0xbf));
        attrs.set_width(Hand::Minute, 4.0);
        assert_eq!(attrs.minute_hand_color.as_deref(), Some("#2dd4bf"));
        assert_eq!(attrs.width(Hand::Minute), Some(4.0));
        assert_eq!(attrs.color(Hand::Hour), None);
    }

    #[test]
    fn test_attributes_json_keys() {
        let json = r##"{"hour_hand_color":"#0000ff","second_hand_width":2.0}"##;
        let attrs: ClockAttributes = serde_json::from_str(json).unwrap();
        assert_eq!(attrs.hour_hand_color.as_deref(), Some("#0000ff"));
        assert_eq!(attrs.second_hand_width, Some(2.0));
        assert_eq!(attrs.minute_hand_color, None);

        let out = serde_json::to_string(&ClockAttributes::default()).unwrap();
        assert_eq!(out, "{}");
    }
}
