//! Colors and preset themes

mod color;
mod preset;

pub use color::HexColor;
pub use preset::{find_preset, presets, presets_json, ColorPreset};
