//! Form state: text, colors and size

use serde::Serialize;

use super::FormEvent;
use crate::constants::{
    DEFAULT_BACKGROUND, DEFAULT_FOREGROUND, DEFAULT_SIZE, ERROR_CORRECTION, MAX_SIZE, MIN_SIZE,
};
use crate::render::RenderRequest;
use crate::style::{presets, ColorPreset, HexColor};
use crate::Result;

/// Current contents of the generator form.
///
/// `size` always lies within `[MIN_SIZE, MAX_SIZE]` and colors are always
/// valid, so any state can be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormState {
    text: String,
    foreground: HexColor,
    background: HexColor,
    size: u32,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            text: String::new(),
            foreground: DEFAULT_FOREGROUND,
            background: DEFAULT_BACKGROUND,
            size: DEFAULT_SIZE,
        }
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn foreground(&self) -> HexColor {
        self.foreground
    }

    pub fn background(&self) -> HexColor {
        self.background
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_foreground(&mut self, color: HexColor) {
        self.foreground = color;
    }

    pub fn set_background(&mut self, color: HexColor) {
        self.background = color;
    }

    /// Set the size, clamped into `[MIN_SIZE, MAX_SIZE]`
    pub fn set_size(&mut self, size: u32) {
        self.size = size.clamp(MIN_SIZE, MAX_SIZE);
    }

    /// Set both colors from a preset
    pub fn apply_preset(&mut self, preset: &ColorPreset) {
        self.foreground = preset.foreground;
        self.background = preset.background;
    }

    /// The preset matching both current colors, if any
    pub fn active_preset(&self) -> Option<&'static ColorPreset> {
        presets()
            .iter()
            .find(|p| p.foreground == self.foreground && p.background == self.background)
    }

    /// Apply a single input event
    pub fn apply(&mut self, event: FormEvent) {
        match event {
            FormEvent::TextChanged(text) => self.set_text(text),
            FormEvent::ForegroundChanged(color) => self.set_foreground(color),
            FormEvent::BackgroundChanged(color) => self.set_background(color),
            FormEvent::SizeChanged(size) => self.set_size(size),
            FormEvent::PresetSelected(preset) => self.apply_preset(preset),
        }
    }

    /// Export is only possible once some text has been entered
    pub fn can_export(&self) -> bool {
        !self.text.is_empty()
    }

    /// Text to encode: the input, or `placeholder` while it is empty
    pub fn render_text<'a>(&'a self, placeholder: &'a str) -> &'a str {
        if self.text.is_empty() {
            placeholder
        } else {
            &self.text
        }
    }

    /// Build the renderer input for the current state
    pub fn render_request(&self, placeholder: &str, include_margin: bool) -> RenderRequest {
        RenderRequest {
            text: self.render_text(placeholder).to_string(),
            size: self.size,
            ec_level: ERROR_CORRECTION,
            foreground: self.foreground,
            background: self.background,
            include_margin,
        }
    }

    /// Pretty JSON snapshot of the state
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
