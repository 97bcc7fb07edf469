//! PNG export of the rendered surface

use std::fs;
use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use crate::constants::{EXPORT_FILE_NAME, PNG_DATA_URI_PREFIX};
use crate::form::FormState;
use crate::render::Surface;
use crate::{Error, Result};

/// A PNG ready to be saved under its fixed file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedImage {
    pub file_name: &'static str,
    pub png: Vec<u8>,
}

impl ExportedImage {
    /// `data:image/png;base64,...` URI of the image
    pub fn data_uri(&self) -> String {
        format!("{}{}", PNG_DATA_URI_PREFIX, BASE64.encode(&self.png))
    }

    /// Write the image into `dir`, replacing any previous export there
    pub fn save_to(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(self.file_name);
        fs::write(&path, &self.png)?;

        tracing::info!("saved {} ({} bytes)", path.display(), self.png.len());
        Ok(path)
    }
}

/// Serializes the current surface for download
pub struct Exporter;

impl Exporter {
    /// Export `surface` as PNG.
    ///
    /// Fails with `ExportDisabled` while the form text is empty and with
    /// `SurfaceMissing` when nothing has been rendered.
    pub fn export(state: &FormState, surface: Option<&Surface>) -> Result<ExportedImage> {
        if !state.can_export() {
            return Err(Error::ExportDisabled);
        }
        let surface = surface.ok_or(Error::SurfaceMissing)?;

        let png = surface.to_png()?;
        tracing::info!(
            "exported {}x{} surface as {}",
            surface.width(),
            surface.height(),
            EXPORT_FILE_NAME
        );

        Ok(ExportedImage {
            file_name: EXPORT_FILE_NAME,
            png,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PLACEHOLDER_TEXT;
    use crate::render::{QrRenderer, Renderer};

    fn rendered(state: &FormState) -> Surface {
        QrRenderer
            .render(&state.render_request(PLACEHOLDER_TEXT, true))
            .unwrap()
    }

    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("qrstudio-{}-{}", name, std::process::id()))
    }

    #[test]
    fn test_export_disabled_without_text() {
        let state = FormState::new();
        let surface = rendered(&state);

        assert!(matches!(
            Exporter::export(&state, Some(&surface)),
            Err(Error::ExportDisabled)
        ));
    }

    #[test]
    fn test_export_fails_fast_without_surface() {
        let mut state = FormState::new();
        state.set_text("https://example.com");

        assert!(matches!(
            Exporter::export(&state, None),
            Err(Error::SurfaceMissing)
        ));
    }

    #[test]
    fn test_export_png_and_data_uri() {
        let mut state = FormState::new();
        state.set_text("https://example.com");
        let surface = rendered(&state);

        let image = Exporter::export(&state, Some(&surface)).unwrap();
        assert_eq!(image.file_name, "qrcode.png");
        assert_eq!(&image.png[..8], b"\x89PNG\r\n\x1a\n");

        let uri = image.data_uri();
        let encoded = uri.strip_prefix("data:image/png;base64,").unwrap();
        assert_eq!(BASE64.decode(encoded).unwrap(), image.png);
    }

    #[test]
    fn test_save_to_writes_fixed_name() {
        let mut state = FormState::new();
        state.set_text("save me");
        let image = Exporter::export(&state, Some(&rendered(&state))).unwrap();

        let dir = scratch_dir("save");
        let path = image.save_to(&dir).unwrap();
        assert_eq!(path, dir.join("qrcode.png"));
        assert_eq!(fs::read(&path).unwrap(), image.png);

        // A second export replaces the first
        state.set_text("save me again");
        let second = Exporter::export(&state, Some(&rendered(&state))).unwrap();
        second.save_to(&dir).unwrap();
        assert_eq!(fs::read(&path).unwrap(), second.png);

        fs::remove_dir_all(&dir).unwrap();
    }
}
