// ══════════════════════════════════════════════════════════════════════════════
// LOGGER MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// The logger itself: decides once at construction which severities are live,
// builds the timestamped, colorized prefix, and dispatches finished lines to
// the sink. Immutable after construction; every log call only reads frozen
// state, so a shared reference is all a caller ever needs.

use std::fmt::{self, Write as _};
use std::sync::Arc;
use chrono::{DateTime, Local, TimeZone};
use crate::config::Config;
use crate::level::Level;
use crate::sink::{ConsoleSink, Sink};

pub struct Logger {
	config: Config,
	enabled: [bool; 4],
	sink: Arc<dyn Sink + Send + Sync>,
}

impl Logger {
	/// Builds a logger writing to the standard console streams.
	pub fn new(config: Config) -> Self {
		Self::with_sink(config, Arc::new(ConsoleSink))
	}

	/// Builds a logger writing to an arbitrary sink. The enabled table is
	/// computed here, once: a severity below the threshold is permanently
	/// dead for this instance and its methods do no work at all.
	pub fn with_sink(config: Config, sink: Arc<dyn Sink + Send + Sync>) -> Self {
		let mut enabled = [false; 4];
		for level in Level::ALL {
			enabled[level as usize] = level >= config.min_level;
		}
		Logger { config, enabled, sink }
	}

	/// Whether a severity survived the construction-time threshold.
	pub fn is_enabled(&self, level: Level) -> bool {
		self.enabled[level as usize]
	}

	/// Computes the prefix for an explicit timestamp and level. Pure and
	/// deterministic, and it ignores the enabled table, so tests can call it
	/// directly without depending on the wall clock.
	pub fn prefix<Tz>(&self, time: &DateTime<Tz>, level: Level) -> String
	where
		Tz: TimeZone,
		Tz::Offset: fmt::Display,
	{
		// 1. Timestamp. A malformed pattern aborts the write mid-render
		//    rather than panicking; whatever was rendered stays.
		let mut body = String::new();
		if !self.config.timestamp_format.is_empty() {
			let _ = write!(body, "{}", time.format(&self.config.timestamp_format));
		}

		// 2. Level indicator, with its leading separator space.
		body.push_str(&self.config.indicator.fragment(level));

		// 3. An empty timestamp leaves the indicator's separator dangling.
		let body = body.trim_start();
		if body.is_empty() {
			return String::new();
		}

		// 4. Color wrap.
		(self.config.styler)(level, body)
	}

	/// Logs a sequence of display-renderable parts at the given level. The
	/// prefix and each part are joined with single spaces, in order, into one
	/// line handed to the sink.
	pub fn log(&self, level: Level, parts: &[&dyn fmt::Display]) {
		if !self.enabled[level as usize] {
			return;
		}

		let mut line = self.prefix(&Local::now(), level);
		for part in parts {
			if !line.is_empty() {
				line.push(' ');
			}
			let _ = write!(line, "{}", part);
		}

		self.sink.write_line(level, &line);
		if self.config.trailing_newline {
			self.sink.write_line(level, "");
		}
	}

	pub fn debug<D: fmt::Display>(&self, message: D) {
		self.log(Level::Debug, &[&message]);
	}

	pub fn info<D: fmt::Display>(&self, message: D) {
		self.log(Level::Info, &[&message]);
	}

	pub fn warn<D: fmt::Display>(&self, message: D) {
		self.log(Level::Warn, &[&message]);
	}

	pub fn error<D: fmt::Display>(&self, message: D) {
		self.log(Level::Error, &[&message]);
	}
}

impl Default for Logger {
	fn default() -> Self {
		Self::new(Config::default())
	}
}
