use crate::{error::ColorError, rgb::Rgb};
use std::fmt;

/// How many tints and how many shades surround the base color.
pub const RAMP_STEPS: u8 = 4;
/// Percentage moved toward white or black per step.
pub const STEP_PERCENT: u32 = 15;
pub const RAMP_LEN: usize = 2 * RAMP_STEPS as usize + 1;

const STEP_FACTOR: f32 = 0.15;

/// Position of a color in a shade ramp, from four steps lighter to four steps darker.
///
/// Only steps inside the ramp can be built, so the percentage is always between 40 and 160.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i8", into = "i8"))]
pub struct ShadeStep {
    // positive is lighter, negative is darker
    offset: i8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShadeInfo {
    rgb: Rgb,
    step: ShadeStep,
}

impl ShadeStep {
    pub const BASE: ShadeStep = ShadeStep { offset: 0 };

    /// `step` tints toward white, `1..=4`.
    pub fn lighter(step: u8) -> Option<ShadeStep> {
        (1..=RAMP_STEPS).contains(&step).then(|| ShadeStep { offset: step as i8 })
    }

    /// `step` shades toward black, `1..=4`.
    pub fn darker(step: u8) -> Option<ShadeStep> {
        (1..=RAMP_STEPS).contains(&step).then(|| ShadeStep { offset: -(step as i8) })
    }

    /// The step at `index` in a light-to-dark ramp.
    fn at(index: usize) -> ShadeStep {
        ShadeStep {
            offset: RAMP_STEPS as i8 - index as i8,
        }
    }

    /// Steps toward white when positive, toward black when negative.
    pub fn offset(self) -> i8 {
        self.offset
    }

    pub fn is_base(self) -> bool {
        self.offset == 0
    }

    pub fn percentage(self) -> u32 {
        (100 + self.offset as i32 * STEP_PERCENT as i32) as u32
    }

    fn apply(self, rgb: Rgb) -> Rgb {
        let (r, g, b) = rgb.components();
        let step = self.offset.unsigned_abs();

        if self.offset > 0 {
            let amount = (1.0 + step as f32 * STEP_FACTOR) - 1.0;
            let lighten = |c: u8| (c as f32 + (255 - c) as f32 * amount).round().min(255.0) as u8;

            Rgb::new(lighten(r), lighten(g), lighten(b))
        } else if self.offset < 0 {
            let factor = 1.0 - step as f32 * STEP_FACTOR;
            let darken = |c: u8| (c as f32 * factor).round().max(0.0) as u8;

            Rgb::new(darken(r), darken(g), darken(b))
        } else {
            rgb
        }
    }
}

impl TryFrom<i8> for ShadeStep {
    type Error = ColorError;

    fn try_from(offset: i8) -> Result<Self, Self::Error> {
        match offset {
            0 => Some(ShadeStep::BASE),
            o if o > 0 => ShadeStep::lighter(o as u8),
            o => ShadeStep::darker(o.unsigned_abs()),
        }
        .ok_or(ColorError::ShadeStepOutOfRange(offset))
    }
}

impl From<ShadeStep> for i8 {
    fn from(step: ShadeStep) -> Self {
        step.offset
    }
}

impl fmt::Display for ShadeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let percent = self.offset.unsigned_abs() as u32 * STEP_PERCENT;

        if self.offset > 0 {
            write!(f, "+{}%", percent)
        } else if self.offset < 0 {
            write!(f, "-{}%", percent)
        } else {
            f.write_str("Base")
        }
    }
}

impl ShadeInfo {
    pub fn rgb(self) -> Rgb {
        self.rgb
    }

    pub fn step(self) -> ShadeStep {
        self.step
    }

    pub fn hex(self) -> String {
        self.rgb.to_hex()
    }

    pub fn label(self) -> String {
        self.step.to_string()
    }

    pub fn percentage(self) -> u32 {
        self.step.percentage()
    }
}

/// Build the tint/shade ramp for a `RRGGBB` hex color (leading `#` optional).
pub fn generate_shades(hex: &str) -> Result<[ShadeInfo; RAMP_LEN], ColorError> {
    Rgb::from_hex(hex).map(shades_of)
}

/// Four tints, the base color and four shades, ordered from lightest to darkest.
///
/// Tints move each channel toward 255 and shades scale each channel toward 0, both in 15% steps.
pub fn shades_of(rgb: Rgb) -> [ShadeInfo; RAMP_LEN] {
    std::array::from_fn(|index| {
        let step = ShadeStep::at(index);

        ShadeInfo {
            rgb: step.apply(rgb),
            step,
        }
    })
}
