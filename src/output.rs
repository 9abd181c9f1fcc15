//! # Output Configuration
//!
//! This module controls how rit writes user-facing messages: whether colors
//! and symbols are used, and the small formatting helpers shared by the
//! commands (success and error notices, service name capitalization).
//!
//! ## Respecting User Preferences
//!
//! The module respects the following environment variables and flags:
//! - `--color=never|always|auto` - CLI flag for color control
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rit::output::{OutputConfig, success};
//!
//! let config = OutputConfig::from_env_and_flag("auto");
//! success(&config, &mut std::io::stdout(), "Github credential saved!")?;
//! ```

use std::env;
use std::io::{self, Write};

use console::style;

/// Output configuration for controlling colors and symbols.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors and symbols should be used in output.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from environment and CLI flag.
    ///
    /// # Arguments
    /// * `color_flag` - The value of the --color CLI flag: "always", "never", or "auto"
    ///
    /// In auto mode, colors are disabled if:
    /// - `NO_COLOR` environment variable is set (any value, including empty)
    /// - `CLICOLOR=0` is set
    /// - `TERM=dumb` is set
    /// - stdout is not a TTY (unless `CLICOLOR_FORCE=1`)
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    fn detect_color_support() -> bool {
        // The presence of the variable (even if empty) disables colors
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }

        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }

        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    /// Create a configuration with colors always enabled.
    pub fn with_color() -> Self {
        Self { use_color: true }
    }

    /// Create a configuration with colors always disabled.
    pub fn without_color() -> Self {
        Self { use_color: false }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

/// Returns the symbol when colors are enabled, otherwise the plain text
/// alternative.
pub fn emoji<'a>(config: &OutputConfig, emoji_str: &'a str, plain: &'a str) -> &'a str {
    if config.use_color { emoji_str } else { plain }
}

/// Write a success line, e.g. `✔ Github credential saved!`.
pub fn success<W: Write + ?Sized>(
    config: &OutputConfig,
    out: &mut W,
    message: &str,
) -> io::Result<()> {
    let mark = emoji(config, "✔", "[OK]");
    if config.use_color {
        writeln!(out, "{}", style(format!("{} {}", mark, message)).green())
    } else {
        writeln!(out, "{} {}", mark, message)
    }
}

/// Write an error notice, e.g. `✖ invalid input`.
pub fn error<W: Write + ?Sized>(
    config: &OutputConfig,
    out: &mut W,
    message: &str,
) -> io::Result<()> {
    let mark = emoji(config, "✖", "[ERROR]");
    if config.use_color {
        writeln!(out, "{}", style(format!("{} {}", mark, message)).red())
    } else {
        writeln!(out, "{} {}", mark, message)
    }
}

/// Upper-case the first letter of every word.
///
/// Words are runs of letters, digits and `_`; anything else separates them.
/// `"github"` becomes `"Github"`, `"my-service"` becomes `"My-Service"`.
pub fn title_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut at_word_start = true;
    for ch in input.chars() {
        if !(ch.is_alphanumeric() || ch == '_') {
            at_word_start = true;
            result.push(ch);
        } else if at_word_start {
            at_word_start = false;
            result.extend(ch.to_uppercase());
        } else {
            result.push(ch);
        }
    }
    result
}
