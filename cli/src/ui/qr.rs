//! QR code preview and color display in the terminal.

use qrstudio_core::{HexColor, ModuleGrid};

/// Render a module grid as terminal text.
///
/// Uses Unicode block characters for compact display where each
/// character represents 2 vertical modules, drawn in the form's colors
/// with 24-bit ANSI escapes.
pub fn render_qr_code(grid: &ModuleGrid, foreground: HexColor, background: HexColor) -> String {
    let colors = paint(foreground, background);
    let width = grid.width();
    let mut out = String::new();

    // ▀ = top dark, bottom light
    // ▄ = top light, bottom dark
    // █ = both dark
    // (space) = both light
    for y in (0..width).step_by(2) {
        out.push_str(&colors);
        for x in 0..width {
            let top = grid.is_dark(x, y);
            let bottom = grid.is_dark(x, y + 1);

            out.push(match (top, bottom) {
                (true, true) => '█',
                (true, false) => '▀',
                (false, true) => '▄',
                (false, false) => ' ',
            });
        }
        out.push_str("\x1b[0m\n");
    }

    out
}

/// Print a module grid to the terminal.
pub fn print_qr_code(grid: &ModuleGrid, foreground: HexColor, background: HexColor) {
    print!("{}", render_qr_code(grid, foreground, background));
}

/// Two-cell swatch showing a foreground/background pair.
pub fn color_swatch(foreground: HexColor, background: HexColor) -> String {
    format!("{}▀▄\x1b[0m", paint(foreground, background))
}

fn paint(foreground: HexColor, background: HexColor) -> String {
    let [fr, fg, fb] = foreground.rgb();
    let [br, bg, bb] = background.rgb();
    format!("\x1b[38;2;{};{};{}m\x1b[48;2;{};{};{}m", fr, fg, fb, br, bg, bb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use qrstudio_core::constants::ERROR_CORRECTION;

    const BLACK: HexColor = HexColor::from_rgb(0, 0, 0);
    const WHITE: HexColor = HexColor::from_rgb(0xFF, 0xFF, 0xFF);

    #[test]
    fn test_two_modules_per_line() {
        let grid = ModuleGrid::encode("preview", ERROR_CORRECTION, true).unwrap();
        let text = render_qr_code(&grid, BLACK, WHITE);

        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), grid.width().div_ceil(2));
        for line in &lines {
            assert!(line.starts_with("\x1b[38;2;0;0;0m\x1b[48;2;255;255;255m"));
            assert!(line.ends_with("\x1b[0m"));
        }
    }

    #[test]
    fn test_quiet_zone_is_blank() {
        let grid = ModuleGrid::encode("preview", ERROR_CORRECTION, true).unwrap();
        let text = render_qr_code(&grid, BLACK, WHITE);

        // First two lines cover margin rows only
        let first = text.lines().next().unwrap();
        let body: String = first.chars().filter(|c| !c.is_ascii() || *c == ' ').collect();
        assert_eq!(body, " ".repeat(grid.width()));
    }

    #[test]
    fn test_swatch_uses_both_colors() {
        let swatch = color_swatch(HexColor::from_rgb(0xF8, 0xF9, 0xFA), HexColor::from_rgb(0x21, 0x25, 0x29));
        assert!(swatch.contains("38;2;248;249;250"));
        assert!(swatch.contains("48;2;33;37;41"));
    }
}
