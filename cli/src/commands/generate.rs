//! Generate command implementation.

use std::path::PathBuf;

use clap::Args;
use qrstudio_core::{find_preset, Config, FormEvent, HexColor, Studio};

use crate::ui::print_qr_code;

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Text or URL to encode
    #[arg(default_value = "")]
    text: String,

    /// Color preset to start from
    #[arg(short, long)]
    preset: Option<String>,

    /// Foreground color (#RRGGBB), overrides the preset
    #[arg(long)]
    fg: Option<HexColor>,

    /// Background color (#RRGGBB), overrides the preset
    #[arg(long)]
    bg: Option<HexColor>,

    /// Size in pixels, clamped to 100..=300
    #[arg(short, long)]
    size: Option<u32>,

    /// Directory to save qrcode.png into
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Render without the quiet zone
    #[arg(long)]
    no_margin: bool,

    /// Show the QR code in the terminal
    #[arg(long)]
    preview: bool,

    /// Print a PNG data URI instead of writing a file
    #[arg(long)]
    data_uri: bool,
}

impl GenerateArgs {
    /// Form events in the order the form would receive them.
    fn events(&self) -> qrstudio_core::Result<Vec<FormEvent>> {
        let mut events = vec![FormEvent::TextChanged(self.text.clone())];

        if let Some(name) = &self.preset {
            events.push(FormEvent::PresetSelected(find_preset(name)?));
        }
        if let Some(fg) = self.fg {
            events.push(FormEvent::ForegroundChanged(fg));
        }
        if let Some(bg) = self.bg {
            events.push(FormEvent::BackgroundChanged(bg));
        }
        if let Some(size) = self.size {
            events.push(FormEvent::SizeChanged(size));
        }

        Ok(events)
    }

    fn config(&self) -> Config {
        let mut config = Config {
            include_margin: !self.no_margin,
            ..Config::default()
        };
        if let Some(out) = &self.out {
            config.output_dir = out.clone();
        }
        config
    }
}

/// Build the form from flags and export the result.
pub fn generate(args: GenerateArgs) -> anyhow::Result<()> {
    let mut studio = Studio::new(args.config())?;
    for event in args.events()? {
        studio.dispatch(event)?;
    }

    let state = studio.state();
    if args.preview {
        print_qr_code(&studio.preview_grid()?, state.foreground(), state.background());
    }

    if !studio.can_export() {
        println!("\x1b[1;33m!\x1b[0m Nothing to export: enter some text first.");
        return Ok(());
    }

    if args.data_uri {
        println!("{}", studio.export()?.data_uri());
    } else {
        let path = studio.export_to_disk()?;
        println!("\x1b[1;32m✓\x1b[0m Saved {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: GenerateArgs,
    }

    fn parse(argv: &[&str]) -> GenerateArgs {
        TestCli::try_parse_from(std::iter::once("generate").chain(argv.iter().copied()))
            .unwrap()
            .args
    }

    #[test]
    fn test_custom_colors_follow_preset() {
        let args = parse(&["hello", "--preset", "dark", "--fg", "#112233"]);
        let events = args.events().unwrap();

        assert_eq!(events[0], FormEvent::TextChanged("hello".to_string()));
        assert_eq!(events[1], FormEvent::PresetSelected(find_preset("Dark").unwrap()));
        assert_eq!(events[2], FormEvent::ForegroundChanged(HexColor::from_rgb(0x11, 0x22, 0x33)));
        assert_eq!(events.len(), 3);
    }

    #[test]
    fn test_text_defaults_to_empty() {
        let args = parse(&[]);
        assert_eq!(args.events().unwrap(), vec![FormEvent::TextChanged(String::new())]);
    }

    #[test]
    fn test_rejects_bad_color_and_preset() {
        assert!(TestCli::try_parse_from(["generate", "x", "--bg", "white"]).is_err());
        assert!(parse(&["x", "--preset", "Neon"]).events().is_err());
    }

    #[test]
    fn test_config_from_flags() {
        let args = parse(&["x", "--no-margin", "--out", "/tmp/qr"]);
        let config = args.config();
        assert!(!config.include_margin);
        assert_eq!(config.output_dir, PathBuf::from("/tmp/qr"));
    }

    #[test]
    fn test_generate_writes_png() {
        let dir = std::env::temp_dir().join(format!("qrstudio-cli-{}", std::process::id()));
        let out = dir.to_string_lossy().to_string();
        generate(parse(&["https://example.com", "--size", "300", "--out", &out])).unwrap();

        let png = std::fs::read(dir.join("qrcode.png")).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_generate_empty_text_writes_nothing() {
        let dir = std::env::temp_dir().join(format!("qrstudio-cli-empty-{}", std::process::id()));
        let out = dir.to_string_lossy().to_string();
        generate(parse(&["--out", &out])).unwrap();

        assert!(!dir.join("qrcode.png").exists());
    }
}
