//! Error handling utilities for the CLI.

use scriptvec::{Error, RenderConfig, render_error_to};

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, Error>;

/// Build the render configuration for the `--no-color` flag.
pub fn render_config(no_color: bool) -> RenderConfig<'static> {
    RenderConfig {
        color: !no_color,
        ..Default::default()
    }
}

/// Render an error to stderr.
pub fn render(error: &Error, no_color: bool) {
    render_error_to(error, &mut std::io::stderr(), &render_config(no_color)).ok();
}

/// Render an error to stderr and exit with code 1.
pub fn render_and_exit(error: Error, no_color: bool) -> ! {
    render(&error, no_color);
    std::process::exit(1);
}
