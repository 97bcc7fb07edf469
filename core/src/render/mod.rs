//! QR rendering: symbol encoding and rasterization
//!
//! A [`Renderer`] turns a [`RenderRequest`] into a [`Surface`]. Rendering is
//! a pure function of the request, so identical requests always produce
//! byte-identical surfaces.

mod grid;
mod surface;

use qrcode::EcLevel;

use crate::style::HexColor;
use crate::Result;

pub use grid::ModuleGrid;
pub use surface::Surface;

/// Everything a renderer needs to draw one QR symbol
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    /// Text to encode, placeholder already applied
    pub text: String,
    /// Output width and height in pixels
    pub size: u32,
    pub ec_level: EcLevel,
    pub foreground: HexColor,
    pub background: HexColor,
    /// Surround the symbol with a quiet zone
    pub include_margin: bool,
}

impl RenderRequest {
    /// Encode the request text into a module grid
    pub fn module_grid(&self) -> Result<ModuleGrid> {
        ModuleGrid::encode(&self.text, self.ec_level, self.include_margin)
    }
}

/// Produces a bitmap surface from a render request
pub trait Renderer {
    fn render(&self, request: &RenderRequest) -> Result<Surface>;
}

/// Default renderer backed by the `qrcode` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct QrRenderer;

impl Renderer for QrRenderer {
    fn render(&self, request: &RenderRequest) -> Result<Surface> {
        let grid = request.module_grid()?;
        let surface = Surface::rasterize(&grid, request.size, request.foreground, request.background);

        tracing::debug!(
            "rendered {} modules onto {}x{} surface ({})",
            grid.width(),
            surface.width(),
            surface.height(),
            surface.digest()
        );
        Ok(surface)
    }
}
