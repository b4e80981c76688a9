use crate::error::{ColorError, FormatIssue};
use std::{fmt, str::FromStr};

/// An opaque sRGB color with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
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

    /// Parse a `RRGGBB` hex color, with or without a leading `#`. Either letter case is accepted.
    pub fn from_hex(hex: &str) -> Result<Rgb, ColorError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);

        let count = digits.chars().count();
        if count != 6 {
            return Err(ColorError::invalid(hex, FormatIssue::Length(count)));
        }

        let mut channels = [0u8; 3];
        let mut chars = digits.chars();

        for channel in channels.iter_mut() {
            for _ in 0..2 {
                // the length check above guarantees two more chars per channel
                let c = chars.next().unwrap_or_default();
                let nibble = c
                    .to_digit(16)
                    .ok_or_else(|| ColorError::invalid(hex, FormatIssue::Digit(c)))?;

                *channel = (*channel << 4) | nibble as u8;
            }
        }

        let [r, g, b] = channels;
        Ok(Rgb::new(r, g, b))
    }

    /// The canonical uppercase `#RRGGBB` form.
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    pub fn components(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    pub fn max_channel(self) -> u8 {
        self.r.max(self.g).max(self.b)
    }

    pub fn min_channel(self) -> u8 {
        self.r.min(self.g).min(self.b)
    }

    /// HSL lightness in `0.0..=1.0`, computed as the midpoint of the largest and smallest channel.
    pub fn lightness(self) -> f32 {
        (self.max_channel() as u32 + self.min_channel() as u32) as f32 / 2.0 / 255.0
    }

    pub(crate) fn distance_squared(self, other: Rgb) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;

        (dr * dr + dg * dg + db * db) as u32
    }

    /// Euclidean distance between two colors in RGB space.
    pub fn distance(self, other: Rgb) -> f64 {
        (self.distance_squared(other) as f64).sqrt()
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Rgb::new(r, g, b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Rgb::new(r, g, b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgb::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}
