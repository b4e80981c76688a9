use crate::{
    named::{NamedColor, CATALOG},
    rgb::Rgb,
    sample::ColorSample,
};
use image::ImageBuffer;
use log::{debug, trace};

/// Picked samples in the order they were picked.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Palette {
    samples: Vec<ColorSample>,
}

/// A color picking session over a single image.
pub struct Picker<P>
where
    P: image::Pixel<Subpixel = u8> + 'static,
{
    image: ImageBuffer<P, Vec<<P as image::Pixel>::Subpixel>>,
    catalog: &'static [NamedColor],
    canvas_size: Option<(u32, u32)>,
    palette: Palette,
}

pub struct PickerBuilder<P>
where
    P: image::Pixel<Subpixel = u8> + 'static,
{
    image: ImageBuffer<P, Vec<<P as image::Pixel>::Subpixel>>,
    catalog: &'static [NamedColor],
    canvas_size: Option<(u32, u32)>,
}

impl Palette {
    pub fn new() -> Palette {
        Palette::default()
    }

    pub fn push(&mut self, sample: ColorSample) {
        self.samples.push(sample);
    }

    /// Remove the sample at `index`, keeping the order of the rest. Out of range indices are ignored.
    pub fn remove(&mut self, index: usize) -> Option<ColorSample> {
        if index < self.samples.len() {
            Some(self.samples.remove(index))
        } else {
            None
        }
    }

    pub fn get(&self, index: usize) -> Option<&ColorSample> {
        self.samples.get(index)
    }

    pub fn samples(&self) -> &[ColorSample] {
        &self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ColorSample> {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a ColorSample;
    type IntoIter = std::slice::Iter<'a, ColorSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

impl IntoIterator for Palette {
    type Item = ColorSample;
    type IntoIter = std::vec::IntoIter<ColorSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.into_iter()
    }
}

impl FromIterator<ColorSample> for Palette {
    fn from_iter<I: IntoIterator<Item = ColorSample>>(iter: I) -> Self {
        Self {
            samples: iter.into_iter().collect(),
        }
    }
}

impl<P> Picker<P>
where
    P: image::Pixel<Subpixel = u8> + 'static,
{
    pub fn from_image(image: ImageBuffer<P, Vec<<P as image::Pixel>::Subpixel>>) -> PickerBuilder<P> {
        PickerBuilder::from_image(image)
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Read the color under pixel `(x, y)` without recording it.
    pub fn sample_at(&self, x: u32, y: u32) -> Option<ColorSample> {
        let (width, height) = self.image.dimensions();
        if x >= width || y >= height {
            trace!("({}, {}) is outside the {}x{} image", x, y, width, height);
            return None;
        }

        let rgb = pixel_to_rgb(self.image.get_pixel(x, y));
        Some(ColorSample::with_catalog(rgb, x, y, self.catalog))
    }

    /// Sample pixel `(x, y)` and add it to the palette.
    pub fn pick(&mut self, x: u32, y: u32) -> Option<&ColorSample> {
        let sample = self.sample_at(x, y)?;
        debug!("picked {} ({}) at ({}, {})", sample.hex(), sample.name(), x, y);

        self.palette.push(sample);
        self.palette.samples.last()
    }

    /// Map a position on the display canvas to pixel coordinates in the image.
    ///
    /// Each axis is scaled by `image size / canvas size` and truncated. Without a canvas size, or with an empty
    /// canvas, there is nothing to map against. Non-finite positions map to nothing as well.
    pub fn canvas_to_pixel(&self, canvas_x: f32, canvas_y: f32) -> Option<(u32, u32)> {
        if !canvas_x.is_finite() || !canvas_y.is_finite() {
            return None;
        }

        let (canvas_width, canvas_height) = self.canvas_size.filter(|&(w, h)| w > 0 && h > 0)?;
        let (width, height) = self.image.dimensions();

        let scale_x = width as f32 / canvas_width as f32;
        let scale_y = height as f32 / canvas_height as f32;

        let pixel_x = (canvas_x * scale_x) as i64;
        let pixel_y = (canvas_y * scale_y) as i64;
        trace!("canvas ({}, {}) -> pixel ({}, {})", canvas_x, canvas_y, pixel_x, pixel_y);

        Some((u32::try_from(pixel_x).ok()?, u32::try_from(pixel_y).ok()?))
    }

    pub fn sample_at_canvas(&self, canvas_x: f32, canvas_y: f32) -> Option<ColorSample> {
        let (x, y) = self.canvas_to_pixel(canvas_x, canvas_y)?;
        self.sample_at(x, y)
    }

    pub fn pick_at_canvas(&mut self, canvas_x: f32, canvas_y: f32) -> Option<&ColorSample> {
        let (x, y) = self.canvas_to_pixel(canvas_x, canvas_y)?;
        self.pick(x, y)
    }

    pub fn remove(&mut self, index: usize) -> Option<ColorSample> {
        let removed = self.palette.remove(index);

        if let Some(sample) = &removed {
            debug!("removed {} from position {}", sample.hex(), index);
        }

        removed
    }

    /// End the session, handing over the palette if anything was picked.
    pub fn finish(self) -> Option<Palette> {
        if self.palette.is_empty() {
            None
        } else {
            Some(self.palette)
        }
    }
}

impl<P> PickerBuilder<P>
where
    P: image::Pixel<Subpixel = u8> + 'static,
{
    pub fn from_image(image: ImageBuffer<P, Vec<<P as image::Pixel>::Subpixel>>) -> Self {
        Self {
            image,
            catalog: &CATALOG,
            canvas_size: None,
        }
    }

    /// Name samples from `catalog` instead of the built-in one.
    pub fn catalog(self, catalog: &'static [NamedColor]) -> Self {
        Self { catalog, ..self }
    }

    /// The size the image is displayed at, used by the `*_at_canvas` methods.
    pub fn canvas_size(self, width: u32, height: u32) -> Self {
        Self {
            canvas_size: Some((width, height)),
            ..self
        }
    }

    pub fn clear_canvas_size(self) -> Self {
        Self {
            canvas_size: None,
            ..self
        }
    }

    pub fn build(self) -> Picker<P> {
        Picker {
            image: self.image,
            catalog: self.catalog,
            canvas_size: self.canvas_size,
            palette: Palette::new(),
        }
    }
}

fn pixel_to_rgb<P>(pixel: &P) -> Rgb
where
    P: image::Pixel<Subpixel = u8>,
{
    Rgb::from(pixel.to_rgb().0)
}
