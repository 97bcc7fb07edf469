//! High-level studio session that ties the form, renderer and exporter together

use std::path::PathBuf;

use crate::export::{ExportedImage, Exporter};
use crate::form::{FormEvent, FormState};
use crate::render::{ModuleGrid, QrRenderer, RenderRequest, Renderer, Surface};
use crate::style::ColorPreset;
use crate::{Config, Result};

/// One generator session.
///
/// Every accepted event re-renders the surface synchronously, so the
/// surface always reflects the current state unless the last render failed.
pub struct Studio<R: Renderer = QrRenderer> {
    config: Config,
    state: FormState,
    renderer: R,
    surface: Option<Surface>,
}

impl Studio<QrRenderer> {
    /// Create a session with the default renderer and form state
    pub fn new(config: Config) -> Result<Self> {
        Self::with_renderer(config, QrRenderer)
    }
}

impl<R: Renderer> Studio<R> {
    /// Create a session with a custom renderer
    pub fn with_renderer(config: Config, renderer: R) -> Result<Self> {
        Self::with_state(config, renderer, FormState::default())
    }

    /// Create a session starting from `state`
    pub fn with_state(config: Config, renderer: R, state: FormState) -> Result<Self> {
        let mut studio = Self {
            config,
            state,
            renderer,
            surface: None,
        };
        studio.rerender()?;
        Ok(studio)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Current surface, `None` if the last render failed
    pub fn surface(&self) -> Option<&Surface> {
        self.surface.as_ref()
    }

    pub fn can_export(&self) -> bool {
        self.state.can_export()
    }

    pub fn active_preset(&self) -> Option<&'static ColorPreset> {
        self.state.active_preset()
    }

    /// Renderer input for the current state
    pub fn render_request(&self) -> RenderRequest {
        self.state
            .render_request(&self.config.placeholder_text, self.config.include_margin)
    }

    /// Apply one input event and re-render
    pub fn dispatch(&mut self, event: FormEvent) -> Result<()> {
        tracing::debug!("form event: {:?}", event);
        self.state.apply(event);
        self.rerender()
    }

    /// Module grid of the current state, for text previews
    pub fn preview_grid(&self) -> Result<ModuleGrid> {
        self.render_request().module_grid()
    }

    /// Export the current surface as PNG
    pub fn export(&self) -> Result<ExportedImage> {
        Exporter::export(&self.state, self.surface.as_ref())
    }

    /// Export and save into the configured output directory
    pub fn export_to_disk(&self) -> Result<PathBuf> {
        self.export()?.save_to(&self.config.output_dir)
    }

    fn rerender(&mut self) -> Result<()> {
        let request = self.render_request();
        match self.renderer.render(&request) {
            Ok(surface) => {
                self.surface = Some(surface);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("render failed: {}", e);
                self.surface = None;
                Err(e)
            }
        }
    }
}
