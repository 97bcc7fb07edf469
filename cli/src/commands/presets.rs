//! Presets command implementation.

use qrstudio_core::{presets, presets_json};

use crate::ui::color_swatch;

/// Print the built-in color presets.
pub fn list_presets(json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", presets_json()?);
        return Ok(());
    }

    println!("\n\x1b[1mColor presets\x1b[0m");
    println!("═══════════════════════════════════════");
    for preset in presets() {
        println!(
            "  {}  \x1b[1m{:<10}\x1b[0m {} on {}",
            color_swatch(preset.foreground, preset.background),
            preset.name,
            preset.foreground,
            preset.background
        );
    }
    println!();
    Ok(())
}

