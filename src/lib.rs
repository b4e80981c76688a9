// Copyright 2022 Spanfile
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Sample colors from an image and describe them.
//!
//! Every pixel picked with a [`Picker`] becomes a [`ColorSample`] carrying its hex code and the nearest name from a
//! small catalog. Any color can then be described further:
//!
//! * [`classify`] derives a family, a warm/cool temperature and a descriptive technical name,
//! * [`estimate_mixture`] approximates it as shares of a few pigments,
//! * [`generate_shades`] builds a ramp of four tints and four shades around it.
//!
//! All of these are pure functions of their input. Hex input is `RRGGBB` with an optional leading `#`; anything else
//! is rejected with [`ColorError::InvalidColorFormat`].
//!
//! ```
//! let details = swatchbook::classify("#E63946").unwrap();
//! assert_eq!(details.family().as_str(), "Red");
//!
//! let ramp = swatchbook::generate_shades("#E63946").unwrap();
//! assert_eq!(ramp[4].hex(), "#E63946");
//! ```

mod details;
mod error;
mod mixture;
mod named;
mod picker;
mod rgb;
mod sample;
mod shade;

pub use crate::{
    details::{classify, ColorDetails, Family, TechnicalName, Temperature},
    error::{ColorError, FormatIssue},
    mixture::{estimate_mixture, ColorMixture, MixtureComponent, Pigment},
    named::{nearest, nearest_name, nearest_name_in, NamedColor, CATALOG, UNKNOWN_NAME},
    picker::{Palette, Picker, PickerBuilder},
    rgb::Rgb,
    sample::ColorSample,
    shade::{generate_shades, shades_of, ShadeInfo, ShadeStep, RAMP_LEN, RAMP_STEPS, STEP_PERCENT},
};
pub use image;

use palette::IntoColor;

fn rgb_to_hsl(rgb: (u8, u8, u8)) -> (f32, f32, f32) {
    let raw = palette::Srgb::from_components(rgb);
    let raw_float: palette::Srgb<f32> = raw.into_format();
    let hsl: palette::Hsl = raw_float.into_color();
    let (h, s, l) = hsl.into_components();

    (h.to_positive_degrees(), s, l)
}
