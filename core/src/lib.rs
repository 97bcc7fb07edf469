//! qrstudio core - QR code generator library
//!
//! This library holds the generator form state, color presets, the QR
//! renderer and the PNG exporter. A [`Studio`] session applies input
//! events to the form and re-renders the bitmap after each one.

pub mod constants;
pub mod export;
pub mod form;
pub mod render;
pub mod session;
pub mod style;

mod error;

pub use error::{Error, Result};

use std::path::PathBuf;

/// Configuration for a generator session
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory exported images are saved into
    pub output_dir: PathBuf,
    /// Text rendered while the form text is empty
    pub placeholder_text: String,
    /// Surround the symbol with a quiet zone
    pub include_margin: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            placeholder_text: constants::PLACEHOLDER_TEXT.to_string(),
            include_margin: true,
        }
    }
}

fn default_output_dir() -> PathBuf {
    dirs::download_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

// Re-export key types for convenience
pub use export::{ExportedImage, Exporter};
pub use form::{FormEvent, FormState};
pub use render::{ModuleGrid, QrRenderer, RenderRequest, Renderer, Surface};
pub use session::Studio;
pub use style::{find_preset, presets, presets_json, ColorPreset, HexColor};
