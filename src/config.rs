// ══════════════════════════════════════════════════════════════════════════════
// CONFIG MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Logger configuration: the severity threshold, how the level is rendered in
// the prefix, the timestamp pattern, and the styling capability that wraps the
// finished prefix in color. Every field has a default, so `Config::default()`
// is a valid debug-threshold, symbol-indicator configuration.

use std::str::FromStr;
use colored::Colorize;
use thiserror::Error;
use crate::level::Level;

/// Default timestamp pattern: ISO-8601 with timezone offset.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Styling capability: maps a finished prefix to its styled form for a level.
/// Injected rather than hard-wired so the logger stays portable to sinks that
/// do not understand ANSI escapes.
pub type Styler = fn(Level, &str) -> String;

/// Wraps the text in the level's fixed display color. `colored` itself falls
/// back to plain text when the stream is not a terminal or NO_COLOR is set.
pub fn ansi_styler(level: Level, text: &str) -> String {
	text.color(level.color()).to_string()
}

/// Identity styler for environments without ANSI support.
pub fn plain_styler(_level: Level, text: &str) -> String {
	text.to_string()
}

/// How the severity is rendered in the prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
	/// No level indicator at all.
	None,
	/// Upper-case name, right-padded to 5 characters ("INFO ", "ERROR").
	Full,
	/// Single upper-case initial letter ("D", "I", "W", "E").
	Initial,
	/// The level's fixed glyph.
	Symbol,
}

impl Indicator {
	/// Renders the indicator fragment for a level, including the single
	/// leading space that separates it from the timestamp.
	pub fn fragment(self, level: Level) -> String {
		match self {
			Indicator::None => String::new(),
			Indicator::Full => format!(" {:<5}", level.upper()),
			Indicator::Initial => format!(" {}", level.initial()),
			Indicator::Symbol => format!(" {}", level.glyph()),
		}
	}
}

impl FromStr for Indicator {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"none" => Ok(Indicator::None),
			"full" => Ok(Indicator::Full),
			"initial" => Ok(Indicator::Initial),
			"symbol" => Ok(Indicator::Symbol),
			other => Err(ConfigError::UnknownIndicator(other.to_string())),
		}
	}
}

/// Rejection of an unrecognized level or indicator name. Unknown names fail
/// fast here instead of being coerced to a default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
	#[error("unknown log level '{0}' (expected debug, info, warn or error)")]
	UnknownLevel(String),
	#[error("unknown level indicator '{0}' (expected none, full, initial or symbol)")]
	UnknownIndicator(String),
}

/// Logger configuration, frozen once handed to the logger.
#[derive(Debug, Clone)]
pub struct Config {
	/// Lowest severity that produces output.
	pub min_level: Level,
	/// How the level appears in the prefix.
	pub indicator: Indicator,
	/// chrono strftime pattern for the timestamp; empty renders no timestamp.
	pub timestamp_format: String,
	/// Emit one extra blank line after every log call.
	pub trailing_newline: bool,
	/// Styling capability applied to the finished prefix.
	pub styler: Styler,
}

impl Default for Config {
	fn default() -> Self {
		Config {
			min_level: Level::Debug,
			indicator: Indicator::Symbol,
			timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
			trailing_newline: false,
			styler: ansi_styler,
		}
	}
}
