//! Centralized constants
//!
//! Bounds, defaults and fixed names shared by the form, the renderer and
//! the exporter.

use qrcode::EcLevel;

use crate::style::HexColor;

/// Smallest accepted QR size in pixels
pub const MIN_SIZE: u32 = 100;

/// Largest accepted QR size in pixels
pub const MAX_SIZE: u32 = 300;

/// Size used when the form is first created
pub const DEFAULT_SIZE: u32 = 200;

/// Default foreground (module) color
pub const DEFAULT_FOREGROUND: HexColor = HexColor::from_rgb(0x00, 0x00, 0x00);

/// Default background color
pub const DEFAULT_BACKGROUND: HexColor = HexColor::from_rgb(0xFF, 0xFF, 0xFF);

/// Text rendered while the input field is empty
pub const PLACEHOLDER_TEXT: &str = "https://example.com";

/// Error correction is always the highest level
pub const ERROR_CORRECTION: EcLevel = EcLevel::H;

/// Quiet zone width in modules when the margin is enabled
pub const MARGIN_MODULES: usize = 4;

/// File name of every exported image
pub const EXPORT_FILE_NAME: &str = "qrcode.png";

/// Prefix of PNG data URIs
pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";
