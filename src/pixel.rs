use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::grid::Grid;

/// One RGBA8 cell. Field order is the byte order in the image buffer.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Pod, Zeroable, Serialize, Deserialize)]
pub struct Pixel {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Pixel {
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self { red, green, blue, alpha }
    }

    /// "Over" compositing of `fill` onto this pixel.
    ///
    /// Colour channels become `fill*a + self*(1-a)` with `a = fill.alpha/255`.
    /// Alpha becomes `fill.alpha + self.alpha*(1-a)`, so an opaque background
    /// stays opaque.
    pub fn blend_over(&mut self, fill: Pixel) {
        let alpha = fill.alpha as f32 / 255.0;
        let to_u8 = |v: f32| v.round().clamp(0.0, 255.0) as u8;
        let mix = |src: u8, dst: u8| to_u8(src as f32 * alpha + dst as f32 * (1.0 - alpha));
        self.red = mix(fill.red, self.red);
        self.green = mix(fill.green, self.green);
        self.blue = mix(fill.blue, self.blue);
        self.alpha = to_u8(fill.alpha as f32 + self.alpha as f32 * (1.0 - alpha));
    }
}

/// Blends `fill` into the pixel at column `x`, row `y`. Scans write through
/// `BlendWriter`, which applies the same `blend_over` to the cell it is handed.
///
/// Panics if the coordinate is outside the grid.
pub fn blend(grid: &mut Grid<Pixel>, x: u32, y: u32, fill: Pixel) {
    grid.get_mut(x, y).blend_over(fill);
}
