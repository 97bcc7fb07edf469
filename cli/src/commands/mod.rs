//! CLI command implementations.

mod generate;
mod interactive;
mod presets;

pub use generate::{generate, GenerateArgs};
pub use interactive::run_interactive;
pub use presets::list_presets;
