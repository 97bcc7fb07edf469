//! UI utilities for terminal output.

mod banner;
mod qr;

pub use banner::print_banner;
pub use qr::{color_swatch, print_qr_code, render_qr_code};
