use crate::{
    error::ColorError,
    mixture::{estimate_mixture, ColorMixture},
    rgb::Rgb,
};
use std::fmt;

const NEUTRAL_MAX_SPREAD: u8 = 20;
const RED_DOMINANCE: i32 = 30;
const SECONDARY_DOMINANCE: i32 = 20;
const LIGHT_MIN_LIGHTNESS: f32 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Family {
    Neutral,
    Red,
    Orange,
    Pink,
    Green,
    Blue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Temperature {
    Warm,
    Cool,
    Neutral,
}

/// A descriptive label picked by the classifier. These are heuristic, not a standard naming system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TechnicalName {
    PureWhiteTint,
    LightGray,
    MediumGray,
    Charcoal,
    NearBlack,
    CoralTint,
    Vermillion,
    RosePink,
    Crimson,
    Salmon,
    TrueRed,
    Peach,
    BurntOrange,
    BlushPink,
    DeepRose,
    Mint,
    Teal,
    Lime,
    Olive,
    Sage,
    ForestGreen,
    Lavender,
    Violet,
    SkyBlue,
    Cerulean,
    Periwinkle,
    Navy,
}

/// Everything the classifier derives from a single color.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorDetails {
    technical_name: TechnicalName,
    family: Family,
    temperature: Temperature,
    mixture: ColorMixture,
}

impl Family {
    pub fn as_str(self) -> &'static str {
        match self {
            Family::Neutral => "Neutral",
            Family::Red => "Red",
            Family::Orange => "Orange",
            Family::Pink => "Pink",
            Family::Green => "Green",
            Family::Blue => "Blue",
        }
    }

    pub fn temperature(self) -> Temperature {
        match self {
            Family::Neutral => Temperature::Neutral,
            Family::Red | Family::Orange | Family::Pink => Temperature::Warm,
            Family::Green | Family::Blue => Temperature::Cool,
        }
    }
}

impl Temperature {
    pub fn as_str(self) -> &'static str {
        match self {
            Temperature::Warm => "Warm",
            Temperature::Cool => "Cool",
            Temperature::Neutral => "Neutral",
        }
    }
}

impl TechnicalName {
    pub fn as_str(self) -> &'static str {
        use TechnicalName::*;

        match self {
            PureWhiteTint => "Pure White Tint",
            LightGray => "Light Gray",
            MediumGray => "Medium Gray",
            Charcoal => "Charcoal",
            NearBlack => "Near Black",
            CoralTint => "Coral Tint",
            Vermillion => "Vermillion",
            RosePink => "Rose Pink",
            Crimson => "Crimson",
            Salmon => "Salmon",
            TrueRed => "True Red",
            Peach => "Peach",
            BurntOrange => "Burnt Orange",
            BlushPink => "Blush Pink",
            DeepRose => "Deep Rose",
            Mint => "Mint",
            Teal => "Teal",
            Lime => "Lime",
            Olive => "Olive",
            Sage => "Sage",
            ForestGreen => "Forest Green",
            Lavender => "Lavender",
            Violet => "Violet",
            SkyBlue => "Sky Blue",
            Cerulean => "Cerulean",
            Periwinkle => "Periwinkle",
            Navy => "Navy",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_str!(Family, Temperature, TechnicalName);

impl ColorDetails {
    pub fn from_rgb(rgb: Rgb) -> ColorDetails {
        let (technical_name, family) = classify_rgb(rgb);

        ColorDetails {
            technical_name,
            family,
            temperature: family.temperature(),
            mixture: estimate_mixture(rgb),
        }
    }

    pub fn technical_name(&self) -> TechnicalName {
        self.technical_name
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn temperature(&self) -> Temperature {
        self.temperature
    }

    pub fn mixture(&self) -> &ColorMixture {
        &self.mixture
    }
}

/// Describe a `RRGGBB` hex color (leading `#` optional).
pub fn classify(hex: &str) -> Result<ColorDetails, ColorError> {
    Rgb::from_hex(hex).map(ColorDetails::from_rgb)
}

fn classify_rgb(rgb: Rgb) -> (TechnicalName, Family) {
    use TechnicalName::*;

    let lightness = rgb.lightness();
    let pick = |light, saturated| if lightness > LIGHT_MIN_LIGHTNESS { light } else { saturated };

    if rgb.max_channel() - rgb.min_channel() < NEUTRAL_MAX_SPREAD {
        let name = if lightness > 0.9 {
            PureWhiteTint
        } else if lightness > 0.7 {
            LightGray
        } else if lightness > 0.4 {
            MediumGray
        } else if lightness > 0.15 {
            Charcoal
        } else {
            NearBlack
        };

        return (name, Family::Neutral);
    }

    let (r, g, b) = (rgb.r as i32, rgb.g as i32, rgb.b as i32);

    // channel ties resolve in red, green, blue order
    if r >= g && r >= b {
        if r > g + RED_DOMINANCE && r > b + RED_DOMINANCE {
            let name = if g > b + SECONDARY_DOMINANCE {
                pick(CoralTint, Vermillion)
            } else if b > g + SECONDARY_DOMINANCE {
                pick(RosePink, Crimson)
            } else {
                pick(Salmon, TrueRed)
            };

            (name, Family::Red)
        } else if g > b {
            (pick(Peach, BurntOrange), Family::Orange)
        } else {
            (pick(BlushPink, DeepRose), Family::Pink)
        }
    } else if g >= r && g >= b {
        let name = if b > r + SECONDARY_DOMINANCE {
            pick(Mint, Teal)
        } else if r > b + SECONDARY_DOMINANCE {
            pick(Lime, Olive)
        } else {
            pick(Sage, ForestGreen)
        };

        (name, Family::Green)
    } else {
        let name = if r > g + SECONDARY_DOMINANCE {
            pick(Lavender, Violet)
        } else if g > r + SECONDARY_DOMINANCE {
            pick(SkyBlue, Cerulean)
        } else {
            pick(Periwinkle, Navy)
        };

        (name, Family::Blue)
    }
}
