use crate::{
    details::ColorDetails,
    named::{nearest_name_in, NamedColor, CATALOG},
    rgb::Rgb,
    shade::{shades_of, ShadeInfo, RAMP_LEN},
};

/// A color picked from a point of an image.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorSample {
    hex: String,
    rgb: Rgb,
    name: String,
    x: u32,
    y: u32,
}

impl ColorSample {
    /// Sample `rgb` at pixel `(x, y)`, naming it from the built-in catalog.
    pub fn new(rgb: Rgb, x: u32, y: u32) -> ColorSample {
        Self::with_catalog(rgb, x, y, &CATALOG)
    }

    pub fn with_catalog(rgb: Rgb, x: u32, y: u32, catalog: &[NamedColor]) -> ColorSample {
        Self {
            hex: rgb.to_hex(),
            rgb,
            name: nearest_name_in(catalog, rgb).to_owned(),
            x,
            y,
        }
    }

    pub fn hex(&self) -> &str {
        &self.hex
    }

    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Pixel coordinates in the source image.
    pub fn position(&self) -> (u32, u32) {
        (self.x, self.y)
    }

    /// Hue in degrees, saturation and lightness.
    pub fn hsl(&self) -> (f32, f32, f32) {
        crate::rgb_to_hsl(self.rgb.components())
    }

    /// The channels as `r, g, b`, ready to be copied as text.
    pub fn rgb_string(&self) -> String {
        format!("{}, {}, {}", self.rgb.r, self.rgb.g, self.rgb.b)
    }

    pub fn details(&self) -> ColorDetails {
        ColorDetails::from_rgb(self.rgb)
    }

    pub fn shades(&self) -> [ShadeInfo; RAMP_LEN] {
        shades_of(self.rgb)
    }
}
