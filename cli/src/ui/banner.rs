//! Startup banner.

const TITLE: &str = "qrstudio";
const TAGLINE: &str = "QR codes with style, as PNG";
const INNER_WIDTH: usize = 38;

/// Boxed title and tagline, each line centered.
pub fn banner() -> String {
    let rule = "═".repeat(INNER_WIDTH);
    let row = |text: &str, style: &str| {
        format!(
            "\x1b[1;36m║\x1b[0m{}{:^width$}\x1b[0m\x1b[1;36m║\x1b[0m\n",
            style,
            text,
            width = INNER_WIDTH
        )
    };

    let mut out = format!("\n\x1b[1;36m╔{}╗\x1b[0m\n", rule);
    out.push_str(&row(TITLE, "\x1b[1m"));
    out.push_str(&row(TAGLINE, ""));
    out.push_str(&format!("\x1b[1;36m╚{}╝\x1b[0m\n", rule));
    out
}

/// Print the application banner.
pub fn print_banner() {
    println!("{}", banner());
}
