//! Encoded QR module grid

use qrcode::{Color, EcLevel, QrCode};

use crate::constants::MARGIN_MODULES;
use crate::{Error, Result};

/// Square grid of dark/light modules, quiet zone included
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleGrid {
    width: usize,
    dark: Vec<bool>,
}

impl ModuleGrid {
    /// Encode `text` as a QR symbol.
    ///
    /// With `include_margin` the symbol is surrounded by a light quiet zone
    /// of `MARGIN_MODULES` on every side.
    pub fn encode(text: &str, ec_level: EcLevel, include_margin: bool) -> Result<Self> {
        let code = QrCode::with_error_correction_level(text.as_bytes(), ec_level)
            .map_err(|e| Error::Encode(e.to_string()))?;

        let symbol_width = code.width();
        let margin = if include_margin { MARGIN_MODULES } else { 0 };
        let width = symbol_width + 2 * margin;

        let mut dark = vec![false; width * width];
        for (i, color) in code.to_colors().into_iter().enumerate() {
            if color == Color::Dark {
                let (x, y) = (i % symbol_width, i / symbol_width);
                dark[(y + margin) * width + x + margin] = true;
            }
        }

        Ok(Self { width, dark })
    }

    /// Width (and height) in modules
    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether the module at `(x, y)` is dark. Out of range is light.
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.width && self.dark[y * self.width + x]
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.dark.chunks(self.width)
    }
}
