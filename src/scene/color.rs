//! Linear color scale
//!
//! Maps cell depth to a fill color by per-channel linear interpolation
//! between two endpoint colors, the way the quadtree demo shades deeper
//! cells darker green. The scale extrapolates outside its domain by
//! default and can be switched to clamping.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Color scale errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScaleError {
    /// Range endpoint is not a parseable hex color
    #[error("Invalid hex color: {0}")]
    InvalidHexColor(String),
}

/// An sRGB color
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rgb` shorthand or `#rrggbb` hex notation.
    pub fn parse_hex(s: &str) -> Result<Self, ScaleError> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        let invalid = || ScaleError::InvalidHexColor(s.to_string());

        // Length checks below count bytes; non-ASCII input would land a
        // slice off a char boundary and panic instead of erroring
        if !digits.is_ascii() {
            return Err(invalid());
        }

        match digits.len() {
            // Shorthand: each digit doubles, so "#efe" is "#eeffee"
            3 => {
                let mut channels = [0u8; 3];
                for (i, ch) in digits.chars().enumerate() {
                    let v = ch.to_digit(16).ok_or_else(invalid)? as u8;
                    channels[i] = v * 16 + v;
                }
                Ok(Self::new(channels[0], channels[1], channels[2]))
            }
            6 => {
                let r = u8::from_str_radix(&digits[0..2], 16).map_err(|_| invalid())?;
                let g = u8::from_str_radix(&digits[2..4], 16).map_err(|_| invalid())?;
                let b = u8::from_str_radix(&digits[4..6], 16).map_err(|_| invalid())?;
                Ok(Self::new(r, g, b))
            }
            _ => Err(invalid()),
        }
    }

    /// Format as lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Linear mapping from a numeric domain to a two-color range
#[derive(Clone, Copy, Debug)]
pub struct ColorScale {
    domain: (f64, f64),
    range: (Rgb, Rgb),
    clamp: bool,
}

impl ColorScale {
    /// Create an unclamped scale over the given domain and color range.
    pub fn new(domain: (f64, f64), range: (Rgb, Rgb)) -> Self {
        Self { domain, range, clamp: false }
    }

    /// Switch the scale to clamp inputs to the domain endpoints.
    pub fn clamped(mut self) -> Self {
        self.clamp = true;
        self
    }

    /// Color for the given domain value.
    ///
    /// Outside the domain the interpolation parameter extrapolates
    /// linearly (channels saturate at 0 and 255) unless the scale is
    /// clamped. A degenerate domain yields the range start.
    pub fn color_at(&self, value: f64) -> Rgb {
        let (d0, d1) = self.domain;
        let span = d1 - d0;
        let mut t = if span == 0.0 { 0.0 } else { (value - d0) / span };
        if self.clamp {
            t = t.clamp(0.0, 1.0);
        }

        let lerp = |a: u8, b: u8| -> u8 {
            let v = f64::from(a) + (f64::from(b) - f64::from(a)) * t;
            v.round().clamp(0.0, 255.0) as u8
        };

        Rgb::new(
            lerp(self.range.0.r, self.range.1.r),
            lerp(self.range.0.g, self.range.1.g),
            lerp(self.range.0.b, self.range.1.b),
        )
    }

    /// Hex color string for the given domain value.
    pub fn hex_at(&self, value: f64) -> String {
        self.color_at(value).to_hex()
    }
}

/// Serializable scale description used in the paint configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ColorScaleConfig {
    /// Domain endpoints, typically [0, max quadtree depth]
    pub domain: [f64; 2],

    /// Range endpoints as hex color strings
    pub range: [String; 2],

    /// Whether to clamp inputs to the domain
    #[serde(default)]
    pub clamp: bool,
}

impl Default for ColorScaleConfig {
    fn default() -> Self {
        Self {
            // Max depth of the quadtree
            domain: [0.0, 8.0],
            range: ["#efe".to_string(), "#060".to_string()],
            clamp: false,
        }
    }
}

impl TryFrom<&ColorScaleConfig> for ColorScale {
    type Error = ScaleError;

    fn try_from(config: &ColorScaleConfig) -> Result<Self, ScaleError> {
        let start = Rgb::parse_hex(&config.range[0])?;
        let end = Rgb::parse_hex(&config.range[1])?;
        let scale = ColorScale::new((config.domain[0], config.domain[1]), (start, end));
        Ok(if config.clamp { scale.clamped() } else { scale })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shorthand_hex() {
        assert_eq!(Rgb::parse_hex("#efe"), Ok(Rgb::new(0xee, 0xff, 0xee)));
        assert_eq!(Rgb::parse_hex("#060"), Ok(Rgb::new(0x00, 0x66, 0x00)));
    }

    #[test]
    fn test_parse_full_hex() {
        assert_eq!(Rgb::parse_hex("#1a2b3c"), Ok(Rgb::new(0x1a, 0x2b, 0x3c)));
        assert_eq!(Rgb::parse_hex("1a2b3c"), Ok(Rgb::new(0x1a, 0x2b, 0x3c)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Rgb::parse_hex("#efg").is_err());
        assert!(Rgb::parse_hex("#12345").is_err());
        assert!(Rgb::parse_hex("").is_err());
    }

    #[test]
    fn test_parse_rejects_multibyte_without_panicking() {
        // Six bytes but two chars; must error, not slice mid-character
        assert_eq!(Rgb::parse_hex("€€"), Err(ScaleError::InvalidHexColor("€€".to_string())));
        assert!(Rgb::parse_hex("#€€").is_err());
        assert!(Rgb::parse_hex("#ff€").is_err());
        assert!(Rgb::parse_hex("éée").is_err());
    }

    #[test]
    fn test_endpoints() {
        let scale = ColorScale::new((0.0, 8.0), (Rgb::new(0xee, 0xff, 0xee), Rgb::new(0, 0x66, 0)));
        assert_eq!(scale.hex_at(0.0), "#eeffee");
        assert_eq!(scale.hex_at(8.0), "#006600");
    }

    #[test]
    fn test_midpoint_is_channel_linear() {
        let scale = ColorScale::new((0.0, 2.0), (Rgb::new(0, 0, 0), Rgb::new(100, 200, 50)));
        assert_eq!(scale.color_at(1.0), Rgb::new(50, 100, 25));
    }

    #[test]
    fn test_extrapolation_saturates() {
        let scale = ColorScale::new((0.0, 8.0), (Rgb::new(0xee, 0xff, 0xee), Rgb::new(0, 0x66, 0)));
        // Past the dark end every channel bottoms out
        assert_eq!(scale.color_at(100.0), Rgb::new(0, 0, 0));
        // Before the light end the green channel tops out first
        assert_eq!(scale.color_at(-100.0).g, 255);
    }

    #[test]
    fn test_clamped_pins_to_endpoints() {
        let scale = ColorScale::new((0.0, 8.0), (Rgb::new(0xee, 0xff, 0xee), Rgb::new(0, 0x66, 0)))
            .clamped();
        assert_eq!(scale.hex_at(100.0), "#006600");
        assert_eq!(scale.hex_at(-1.0), "#eeffee");
    }

    #[test]
    fn test_degenerate_domain() {
        let scale = ColorScale::new((4.0, 4.0), (Rgb::new(10, 10, 10), Rgb::new(20, 20, 20)));
        assert_eq!(scale.color_at(4.0), Rgb::new(10, 10, 10));
        assert_eq!(scale.color_at(9.0), Rgb::new(10, 10, 10));
    }

    #[test]
    fn test_config_conversion() {
        let config = ColorScaleConfig::default();
        let scale = ColorScale::try_from(&config).expect("default config should convert");
        assert_eq!(scale.hex_at(0.0), "#eeffee");

        let bad = ColorScaleConfig { range: ["#zzz".to_string(), "#060".to_string()], ..Default::default() };
        assert!(ColorScale::try_from(&bad).is_err());
    }
}
