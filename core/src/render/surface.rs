//! Rendered bitmap surface

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, Rgba, RgbaImage};
use sha2::{Digest, Sha256};

use super::ModuleGrid;
use crate::style::HexColor;
use crate::Result;

/// In-memory RGBA pixel grid produced by a renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    image: RgbaImage,
}

impl Surface {
    /// Rasterize `grid` onto a `size` x `size` surface.
    ///
    /// Pixel `(px, py)` takes the color of module
    /// `(px * n / size, py * n / size)` where `n` is the grid width.
    pub fn rasterize(grid: &ModuleGrid, size: u32, foreground: HexColor, background: HexColor) -> Self {
        let n = grid.width() as u64;
        let scale = u64::from(size);
        let fg = Rgba(foreground.to_rgba());
        let bg = Rgba(background.to_rgba());

        let image = RgbaImage::from_fn(size, size, |px, py| {
            let x = (u64::from(px) * n / scale) as usize;
            let y = (u64::from(py) * n / scale) as usize;
            if grid.is_dark(x, y) { fg } else { bg }
        });

        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// RGBA value at `(x, y)`.
    ///
    /// Panics if the coordinates are outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.image.get_pixel(x, y).0
    }

    /// SHA-256 of the raw pixels as lowercase hex
    pub fn digest(&self) -> String {
        Sha256::digest(self.image.as_raw())
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect()
    }

    /// Encode the surface as a PNG file
    pub fn to_png(&self) -> Result<Vec<u8>> {
        let mut png = Vec::new();
        PngEncoder::new(&mut png).write_image(
            self.image.as_raw(),
            self.width(),
            self.height(),
            ExtendedColorType::Rgba8,
        )?;
        Ok(png)
    }
}
