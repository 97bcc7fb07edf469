//! Interactive command implementation.
//!
//! Each input line is one form interaction. State changes re-render the
//! QR code immediately; `export` saves the current image.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use qrstudio_core::{find_preset, Config, FormEvent, HexColor, Renderer, Studio};

use crate::ui::{color_swatch, print_banner, render_qr_code};

const HELP: &str = "\
Commands:
  text <value>    set the text to encode
  clear           empty the text
  fg <#RRGGBB>    set the foreground color
  bg <#RRGGBB>    set the background color
  preset <name>   apply a color preset
  size <px>       set the size (100-300)
  show            preview the QR code
  state           print the form as JSON
  export          save qrcode.png
  help            show this help
  quit            leave";

/// One parsed input line
#[derive(Debug, PartialEq)]
enum Command {
    Event(FormEvent),
    Show,
    State,
    Export,
    Help,
    Quit,
}

/// Parse an input line. Blank lines yield `None`.
///
/// The `text` value is everything after the first separator, kept
/// verbatim, so leading and trailing spaces survive.
fn parse_command(line: &str) -> anyhow::Result<Option<Command>> {
    let line = line.trim_end_matches(['\r', '\n']).trim_start();
    if line.trim().is_empty() {
        return Ok(None);
    }

    let (word, raw) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = raw.trim();

    let command = match word {
        "text" if !raw.is_empty() => Command::Event(FormEvent::TextChanged(raw.to_string())),
        "text" => anyhow::bail!("usage: text <value> (use `clear` to empty it)"),
        "clear" => Command::Event(FormEvent::TextChanged(String::new())),
        "fg" => Command::Event(FormEvent::ForegroundChanged(HexColor::parse(rest)?)),
        "bg" => Command::Event(FormEvent::BackgroundChanged(HexColor::parse(rest)?)),
        "preset" => Command::Event(FormEvent::PresetSelected(find_preset(rest)?)),
        "size" => {
            let size = rest
                .parse()
                .with_context(|| format!("invalid size: {:?}", rest))?;
            Command::Event(FormEvent::SizeChanged(size))
        }
        "show" => Command::Show,
        "state" => Command::State,
        "export" => Command::Export,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => anyhow::bail!("unknown command: {} (try `help`)", other),
    };

    Ok(Some(command))
}

/// Run an interactive session on stdin/stdout.
pub fn run_interactive(out: Option<PathBuf>) -> anyhow::Result<()> {
    let mut config = Config::default();
    if let Some(out) = out {
        config.output_dir = out;
    }

    print_banner();
    let mut studio = Studio::new(config)?;
    let stdin = io::stdin();
    run_session(&mut studio, stdin.lock(), io::stdout().lock())
}

/// Drive `studio` from `input` until EOF or `quit`.
fn run_session<R: Renderer>(
    studio: &mut Studio<R>,
    input: impl BufRead,
    mut output: impl Write,
) -> anyhow::Result<()> {
    writeln!(output, "Type `help` for commands.")?;
    write_status(studio, &mut output)?;

    for line in input.lines() {
        let line = line?;

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(output, "\x1b[1;31m✗\x1b[0m {}", e)?;
                continue;
            }
        };

        match command {
            Command::Event(event) => {
                if let Err(e) = studio.dispatch(event) {
                    writeln!(output, "\x1b[1;31m✗\x1b[0m {}", e)?;
                }
                write_status(studio, &mut output)?;
            }
            Command::Show => {
                let state = studio.state();
                match studio.preview_grid() {
                    Ok(grid) => write!(
                        output,
                        "{}",
                        render_qr_code(&grid, state.foreground(), state.background())
                    )?,
                    Err(e) => writeln!(output, "\x1b[1;31m✗\x1b[0m {}", e)?,
                }
            }
            Command::State => match studio.state().to_json() {
                Ok(json) => writeln!(output, "{}", json)?,
                Err(e) => writeln!(output, "\x1b[1;31m✗\x1b[0m {}", e)?,
            },
            Command::Export => {
                if !studio.can_export() {
                    writeln!(output, "\x1b[1;33m!\x1b[0m Export disabled: enter some text first.")?;
                    continue;
                }
                match studio.export_to_disk() {
                    Ok(path) => writeln!(output, "\x1b[1;32m✓\x1b[0m Saved {}", path.display())?,
                    Err(e) => writeln!(output, "\x1b[1;31m✗\x1b[0m {}", e)?,
                }
            }
            Command::Help => writeln!(output, "{}", HELP)?,
            Command::Quit => break,
        }
    }

    Ok(())
}

/// One-line summary of the form.
fn write_status<R: Renderer>(studio: &Studio<R>, output: &mut impl Write) -> io::Result<()> {
    let state = studio.state();
    let preset = studio.active_preset().map(|p| p.name).unwrap_or("custom");
    let export = if studio.can_export() { "export enabled" } else { "export disabled" };

    writeln!(
        output,
        "{} {}px · {} on {} · {} · {}",
        color_swatch(state.foreground(), state.background()),
        state.size(),
        state.foreground(),
        state.background(),
        preset,
        export
    )
}
