//fleetboard/src/palette.rs

// Display colors for calendar events. This file maps event categories to
// the background/border pair the rendering widget expects. It has NO
// dependencies on any widget crate so it can be used from core logic and
// tests alike.

use crate::model::EventCategory;

/// Background/border pair handed to the rendering widget.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ColorPair {
    pub background: &'static str,
    pub border: &'static str,
}

/// Neutral gray pair used for `Other` and anything else without a
/// dedicated entry in the table.
pub const FALLBACK_COLORS: ColorPair = ColorPair {
    background: "#6c757d",
    border: "#545b62",
};

/// Returns the color pair for a category. Categories without a dedicated
/// entry get `FALLBACK_COLORS`.
pub fn category_colors(category: EventCategory) -> ColorPair {
    match category {
        EventCategory::Delivery => ColorPair {
            background: "#007bff",
            border: "#0056b3",
        },
        EventCategory::Pickup => ColorPair {
            background: "#28a745",
            border: "#1e7e34",
        },
        EventCategory::Return => ColorPair {
            background: "#dc3545",
            border: "#bd2130",
        },
        EventCategory::Maintenance => ColorPair {
            background: "#ffc107",
            border: "#d39e00",
        },
        _ => FALLBACK_COLORS,
    }
}

/// Parse a hex color string like "#RRGGBB" or "RRGGBB" into u8 tuple.
pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() < 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Determines if text on top of this color should be black or white.
/// Input components are expected in [0, 255] range.
pub fn is_dark(r: u8, g: u8, b: u8) -> bool {
    // Perceptual luminance approximation
    let brightness =
        0.299 * (r as f32 / 255.0) + 0.587 * (g as f32 / 255.0) + 0.114 * (b as f32 / 255.0);
    brightness < 0.5
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn delivery_gets_the_blue_pair() {
        let colors = category_colors(EventCategory::Delivery);
        assert_eq!(colors.background, "#007bff");
        assert_eq!(colors.border, "#0056b3");
    }

    #[test]
    fn other_falls_back_to_neutral_gray() {
        let colors = category_colors(EventCategory::Other);
        assert_eq!(colors, FALLBACK_COLORS);
        assert_eq!(colors.background, "#6c757d");
        assert_eq!(colors.border, "#545b62");
    }

    #[test]
    fn every_category_yields_parseable_hex() {
        for category in EventCategory::iter() {
            let colors = category_colors(category);
            assert!(parse_hex(colors.background).is_some(), "{category}");
            assert!(parse_hex(colors.border).is_some(), "{category}");
        }
    }

    #[test]
    fn parse_hex_accepts_leading_hash() {
        assert_eq!(parse_hex("#007bff"), Some((0x00, 0x7b, 0xff)));
        assert_eq!(parse_hex("007bff"), Some((0x00, 0x7b, 0xff)));
        assert_eq!(parse_hex("#fff"), None);
    }

    #[test]
    fn delivery_blue_wants_white_text() {
        let (r, g, b) = parse_hex("#007bff").unwrap();
        assert!(is_dark(r, g, b));
    }
}
