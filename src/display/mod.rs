//! Terminal display and formatting utilities.
//!
//! Handles colorized JSON output and token status rendering for
//! human-readable terminal output.

pub mod json_printer;
pub mod token_status;

use std::io::IsTerminal;

/// Whether stdout should receive ANSI colors.
///
/// Colors are disabled when stdout is not a terminal or `NO_COLOR` is set.
pub fn use_color() -> bool {
    std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
}

/// Wrap text in green (`ok`) or red, when colors are enabled.
pub fn paint_status(text: &str, ok: bool, use_color: bool) -> String {
    match (use_color, ok) {
        (false, _) => text.to_string(),
        (true, true) => format!("\x1b[1;32m{text}\x1b[0m"),
        (true, false) => format!("\x1b[1;31m{text}\x1b[0m"),
    }
}
