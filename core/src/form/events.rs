//! Form input events

use crate::style::{ColorPreset, HexColor};

/// A single user interaction with the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// Text field edited
    TextChanged(String),
    /// Foreground color picked
    ForegroundChanged(HexColor),
    /// Background color picked
    BackgroundChanged(HexColor),
    /// Size slider moved (clamped on apply)
    SizeChanged(u32),
    /// Preset theme button pressed
    PresetSelected(&'static ColorPreset),
}
