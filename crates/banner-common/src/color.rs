//! Opaque RGB colors and their textual forms.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BannerError;

/// An opaque 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Rgb::new(r, g, b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.r, self.g, self.b)
    }
}

/// Parses `"r,g,b"` or `"#rrggbb"`.
impl FromStr for Rgb {
    type Err = BannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if let Some(hex) = trimmed.strip_prefix('#') {
            return parse_hex(trimmed, hex);
        }

        if trimmed.contains(',') {
            return parse_triplet(trimmed);
        }

        Err(BannerError::invalid_color(s, "expected \"r,g,b\" or \"#rrggbb\""))
    }
}

fn parse_hex(original: &str, hex: &str) -> Result<Rgb, BannerError> {
    // from_str_radix alone would accept a leading '+'
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(BannerError::invalid_color(original, "hex colors need exactly 6 digits"));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16)
            .map_err(|_| BannerError::invalid_color(original, "invalid hex digit"))
    };

    Ok(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

fn parse_triplet(original: &str) -> Result<Rgb, BannerError> {
    let parts: Vec<&str> = original.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(BannerError::invalid_color(
            original,
            format!("expected 3 components, got {}", parts.len()),
        ));
    }

    let mut channels = [0u8; 3];
    for (slot, part) in channels.iter_mut().zip(&parts) {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BannerError::invalid_color(
                original,
                format!("'{}' is not a decimal number", part),
            ));
        }
        *slot = part.parse::<u8>().map_err(|_| {
            BannerError::invalid_color(original, format!("'{}' is not in 0..=255", part))
        })?;
    }

    Ok(Rgb::from(channels))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_triplet() {
        assert_eq!("60,80,57".parse::<Rgb>().unwrap(), Rgb::new(60, 80, 57));
        assert_eq!(" 1 , 2 ,3 ".parse::<Rgb>().unwrap(), Rgb::new(1, 2, 3));
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!("#808080".parse::<Rgb>().unwrap(), Rgb::new(128, 128, 128));
        assert_eq!("#3c5039".parse::<Rgb>().unwrap(), Rgb::new(60, 80, 57));
        assert_eq!("#FFFFFF".parse::<Rgb>().unwrap(), Rgb::WHITE);
    }

    #[test]
    fn test_rejects_color_names() {
        for name in ["white", "Grey", "red"] {
            let err = name.parse::<Rgb>().unwrap_err();
            assert!(matches!(err, BannerError::InvalidColor { .. }), "{name}");
        }
    }

    #[test]
    fn test_rejects_out_of_range_component() {
        let err = "256,0,0".parse::<Rgb>().unwrap_err();
        assert!(matches!(err, BannerError::InvalidColor { .. }));
        assert!(err.to_string().contains("256"));
    }

    #[test]
    fn test_rejects_wrong_arity() {
        assert!("1,2".parse::<Rgb>().is_err());
        assert!("1,2,3,4".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_rejects_bad_hex() {
        assert!("#12345".parse::<Rgb>().is_err());
        assert!("#zzzzzz".parse::<Rgb>().is_err());
        assert!("#ééé".parse::<Rgb>().is_err());
        assert!("#+f+f+f".parse::<Rgb>().is_err());
        assert!("#-12345".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_rejects_signed_components() {
        assert!("+1,+2,+3".parse::<Rgb>().is_err());
        assert!("1,-0,3".parse::<Rgb>().is_err());
        assert!("1,,3".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_rejects_unknown_text() {
        assert!("chartreuse-ish".parse::<Rgb>().is_err());
        assert!("".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        let color = Rgb::new(128, 128, 128);
        assert_eq!(color.to_string(), "128,128,128");
        assert_eq!(color.to_string().parse::<Rgb>().unwrap(), color);
    }
}
