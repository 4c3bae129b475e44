// ══════════════════════════════════════════════════════════════════════════════
// LEVEL MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Defines the four severity levels and the fixed metadata attached to each one:
// display name, glyph, color, and which standard stream the level routes to.
// The metadata is a static table — nothing here is configurable per instance.

use std::fmt;
use std::str::FromStr;
use colored::Color;
use crate::config::ConfigError;

/// Severity of a log call, in ascending order of importance.
///
/// The derived `Ord` follows declaration order, so threshold checks are plain
/// comparisons: `level >= min_level`. Discriminants double as indices into the
/// logger's per-level enabled table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
	Debug = 0,
	Info = 1,
	Warn = 2,
	Error = 3,
}

impl Level {
	/// All levels, ascending.
	pub const ALL: [Level; 4] = [Level::Debug, Level::Info, Level::Warn, Level::Error];

	/// Lower-case display name.
	pub const fn name(self) -> &'static str {
		match self {
			Level::Debug => "debug",
			Level::Info => "info",
			Level::Warn => "warn",
			Level::Error => "error",
		}
	}

	/// Upper-case display name, unpadded.
	pub const fn upper(self) -> &'static str {
		match self {
			Level::Debug => "DEBUG",
			Level::Info => "INFO",
			Level::Warn => "WARN",
			Level::Error => "ERROR",
		}
	}

	/// Single upper-case initial letter.
	pub const fn initial(self) -> char {
		match self {
			Level::Debug => 'D',
			Level::Info => 'I',
			Level::Warn => 'W',
			Level::Error => 'E',
		}
	}

	/// Fixed display glyph for the symbol indicator mode.
	pub const fn glyph(self) -> &'static str {
		match self {
			Level::Debug => "●",
			Level::Info => "𝒊",
			Level::Warn => "⚠",
			Level::Error => "✘",
		}
	}

	/// Fixed display color for the prefix.
	pub const fn color(self) -> Color {
		match self {
			Level::Debug => Color::Magenta,
			Level::Info => Color::Blue,
			Level::Warn => Color::Yellow,
			Level::Error => Color::Red,
		}
	}

	/// Whether the console routes this level to stderr rather than stdout.
	pub const fn uses_stderr(self) -> bool {
		matches!(self, Level::Warn | Level::Error)
	}
}

impl fmt::Display for Level {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Level {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"debug" => Ok(Level::Debug),
			"info" => Ok(Level::Info),
			"warn" => Ok(Level::Warn),
			"error" => Ok(Level::Error),
			other => Err(ConfigError::UnknownLevel(other.to_string())),
		}
	}
}
