use crate::rgb::Rgb;

/// A reference color with a human-friendly name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NamedColor {
    name: &'static str,
    rgb: Rgb,
}

/// The built-in naming catalog. The order matters: ties in distance go to the earlier entry.
pub static CATALOG: [NamedColor; 25] = [
    NamedColor::new("Crimson", 220, 20, 60),
    NamedColor::new("Coral Reef", 255, 127, 80),
    NamedColor::new("Tangerine", 255, 165, 0),
    NamedColor::new("Golden Hour", 255, 215, 0),
    NamedColor::new("Sunflower", 255, 223, 0),
    NamedColor::new("Fresh Lime", 50, 205, 50),
    NamedColor::new("Forest", 34, 139, 34),
    NamedColor::new("Ocean Teal", 0, 128, 128),
    NamedColor::new("Aquamarine", 127, 255, 212),
    NamedColor::new("Sky Canvas", 135, 206, 235),
    NamedColor::new("Sapphire", 0, 0, 255),
    NamedColor::new("Midnight", 0, 0, 128),
    NamedColor::new("Royal Plum", 128, 0, 128),
    NamedColor::new("Wisteria", 186, 85, 211),
    NamedColor::new("Fuchsia", 255, 0, 255),
    NamedColor::new("Blush", 255, 192, 203),
    NamedColor::new("Rose Petal", 255, 0, 127),
    NamedColor::new("Sienna", 160, 82, 45),
    NamedColor::new("Sandstone", 210, 180, 140),
    NamedColor::new("Ivory", 255, 255, 240),
    NamedColor::new("Pure White", 255, 255, 255),
    NamedColor::new("Platinum", 229, 228, 226),
    NamedColor::new("Stone", 128, 128, 128),
    NamedColor::new("Graphite", 54, 69, 79),
    NamedColor::new("Obsidian", 0, 0, 0),
];

/// Returned by [`nearest_name_in`] when given an empty catalog.
pub const UNKNOWN_NAME: &str = "Unknown";

impl NamedColor {
    pub const fn new(name: &'static str, r: u8, g: u8, b: u8) -> Self {
        Self {
            name,
            rgb: Rgb::new(r, g, b),
        }
    }

    pub fn name(self) -> &'static str {
        self.name
    }

    pub fn rgb(self) -> Rgb {
        self.rgb
    }
}

/// Find the catalog entry closest to `rgb` by Euclidean distance. The first entry wins a tie.
pub fn nearest(catalog: &[NamedColor], rgb: Rgb) -> Option<NamedColor> {
    // min_by_key keeps the first of several equal minimums
    catalog
        .iter()
        .copied()
        .min_by_key(|entry| entry.rgb.distance_squared(rgb))
}

/// The name of the built-in catalog entry closest to `rgb`.
pub fn nearest_name(rgb: Rgb) -> &'static str {
    nearest_name_in(&CATALOG, rgb)
}

pub fn nearest_name_in(catalog: &[NamedColor], rgb: Rgb) -> &'static str {
    nearest(catalog, rgb).map_or(UNKNOWN_NAME, NamedColor::name)
}
