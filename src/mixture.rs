use crate::rgb::Rgb;
use std::fmt;

const CHANNEL_PRESENCE: u8 = 50;
const WHITE_MIN_AVERAGE: f32 = 200.0;
const BLACK_MAX_AVERAGE: f32 = 80.0;
const WHITE_MAX_SHARE: f32 = 30.0;
const BLACK_MAX_SHARE: f32 = 40.0;

/// One of the constituent colors a sample is approximated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Pigment {
    Red,
    Yellow,
    Green,
    Blue,
    White,
    Black,
}

impl Pigment {
    pub fn as_str(self) -> &'static str {
        match self {
            Pigment::Red => "Red",
            Pigment::Yellow => "Yellow",
            Pigment::Green => "Green",
            Pigment::Blue => "Blue",
            Pigment::White => "White",
            Pigment::Black => "Black",
        }
    }

    /// The color used to draw this pigment's chip.
    pub fn swatch(self) -> Rgb {
        match self {
            Pigment::Red => Rgb::new(0xE5, 0x39, 0x35),
            Pigment::Yellow => Rgb::new(0xFD, 0xD8, 0x35),
            Pigment::Green => Rgb::new(0x43, 0xA0, 0x47),
            Pigment::Blue => Rgb::new(0x1E, 0x88, 0xE5),
            Pigment::White => Rgb::new(0xFA, 0xFA, 0xFA),
            Pigment::Black => Rgb::new(0x21, 0x21, 0x21),
        }
    }
}

impl fmt::Display for Pigment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MixtureComponent {
    pub pigment: Pigment,
    pub percentage: u32,
}

/// An approximate recipe for a color as shares of a few pigments.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorMixture {
    components: Vec<MixtureComponent>,
}

impl ColorMixture {
    pub fn components(&self) -> &[MixtureComponent] {
        &self.components
    }

    pub fn colors(&self) -> impl Iterator<Item = Pigment> + '_ {
        self.components.iter().map(|component| component.pigment)
    }

    pub fn percentages(&self) -> impl Iterator<Item = u32> + '_ {
        self.components.iter().map(|component| component.percentage)
    }

    pub fn percentage_of(&self, pigment: Pigment) -> Option<u32> {
        self.components
            .iter()
            .find(|component| component.pigment == pigment)
            .map(|component| component.percentage)
    }

    pub fn total(&self) -> u32 {
        self.percentages().sum()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    fn push(&mut self, pigment: Pigment, share: f32) {
        self.components.push(MixtureComponent {
            pigment,
            percentage: round_share(share),
        });
    }

    fn normalize(&mut self) {
        let sum = self.total();

        if sum > 0 {
            for component in &mut self.components {
                component.percentage = round_share(component.percentage as f32 / sum as f32 * 100.0);
            }
        }
    }
}

/// Approximate `rgb` as a blend of red, yellow or green, blue, white and black, normalized to about 100%.
///
/// Every channel above 50 contributes its share of the channel total. Green reads as yellow when red and green
/// are both strong and blue is not. A bright average adds white, a dark average adds black.
///
/// Every share is rounded on its own after normalizing, so the total is not always exactly 100. Over all colors
/// it lands in `99..=102`; pale grays such as `(236, 239, 239)` reach 102.
pub fn estimate_mixture(rgb: Rgb) -> ColorMixture {
    let (r, g, b) = rgb.components();
    let mut mixture = ColorMixture::default();

    // a channel only contributes when it's above 50, so a zero total never reaches the division
    let total = (r as u32 + g as u32 + b as u32) as f32;

    if r > CHANNEL_PRESENCE {
        mixture.push(Pigment::Red, r as f32 / total * 100.0);
    }

    if g > CHANNEL_PRESENCE {
        let pigment = if r > 100 && g > 100 && b < 150 {
            Pigment::Yellow
        } else {
            Pigment::Green
        };

        mixture.push(pigment, g as f32 / total * 100.0);
    }

    if b > CHANNEL_PRESENCE {
        mixture.push(Pigment::Blue, b as f32 / total * 100.0);
    }

    let average = total / 3.0;
    if average > WHITE_MIN_AVERAGE {
        mixture.push(
            Pigment::White,
            (average - WHITE_MIN_AVERAGE) / (255.0 - WHITE_MIN_AVERAGE) * WHITE_MAX_SHARE,
        );
    } else if average < BLACK_MAX_AVERAGE {
        mixture.push(
            Pigment::Black,
            (BLACK_MAX_AVERAGE - average) / BLACK_MAX_AVERAGE * BLACK_MAX_SHARE,
        );
    }

    mixture.normalize();
    mixture
}

fn round_share(share: f32) -> u32 {
    share.round().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(mixture: &ColorMixture) -> Vec<(Pigment, u32)> {
        mixture.colors().zip(mixture.percentages()).collect()
    }

    #[test]
    fn black_is_pure_black() {
        let mixture = estimate_mixture(Rgb::BLACK);
        assert_eq!(pairs(&mixture), vec![(Pigment::Black, 100)]);
    }

    #[test]
    fn white_splits_between_channels_and_white() {
        // 33% per channel and 30% white before normalizing over 129
        let mixture = estimate_mixture(Rgb::WHITE);
        assert_eq!(
            pairs(&mixture),
            vec![
                (Pigment::Red, 26),
                (Pigment::Green, 26),
                (Pigment::Blue, 26),
                (Pigment::White, 23),
            ]
        );
    }

    #[test]
    fn strong_red_and_green_read_as_yellow() {
        let mixture = estimate_mixture(Rgb::new(255, 215, 0));
        assert_eq!(pairs(&mixture), vec![(Pigment::Red, 54), (Pigment::Yellow, 46)]);
        assert_eq!(mixture.percentage_of(Pigment::Green), None);
    }

    #[test]
    fn dark_colors_get_black() {
        // total 120, average 40: red 50%, black 20% -> 71/29
        let mixture = estimate_mixture(Rgb::new(60, 30, 30));
        assert_eq!(pairs(&mixture), vec![(Pigment::Red, 71), (Pigment::Black, 29)]);
    }

    #[test]
    fn mid_tones_get_neither_white_nor_black() {
        let mixture = estimate_mixture(Rgb::new(230, 57, 70));
        assert_eq!(mixture.percentage_of(Pigment::White), None);
        assert_eq!(mixture.percentage_of(Pigment::Black), None);
        assert_eq!(mixture.colors().collect::<Vec<_>>(), vec![Pigment::Red, Pigment::Green, Pigment::Blue]);
        assert!((99..=101).contains(&mixture.total()));
    }

    #[test]
    fn pigment_swatches() {
        assert_eq!(Pigment::Red.swatch().to_hex(), "#E53935");
        assert_eq!(Pigment::Black.swatch().to_hex(), "#212121");
        assert_eq!(Pigment::Yellow.to_string(), "Yellow");
    }
}
