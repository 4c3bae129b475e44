// ╔══════════════════════════════════════════════════════════════════════════════╗
// ║                                 TINTLOG                                       ║
// ║                  Tinted, Timestamped Console Logging                          ║
// ╚══════════════════════════════════════════════════════════════════════════════╝
//
// A minimal leveled console logger. Each call gets a colorized prefix built
// from the current timestamp and a level indicator, then goes to the right
// console stream: debug/info to stdout, warn/error to stderr.
//
// The threshold is decided once, at construction. Severities below `min_level`
// are permanently dead for that logger instance — a dead call does no work at
// all, not even reading the clock, so leaving debug calls in hot paths is free
// when the threshold is raised.
//
// Quick start:
//
//   use tintlog::{Config, Level, Logger};
//
//   let log = Logger::new(Config { min_level: Level::Info, ..Config::default() });
//   log.info("deck ready");
//   log.debug("never rendered");             // below threshold, zero work
//   tintlog::warn!(log, "tape", 3, "wobbly"); // variadic, space-joined
//
// The prefix is a pure function of (timestamp, level, config) and is exposed
// as `Logger::prefix` so tests can feed a fixed timestamp instead of "now".
// Output goes through the `Sink` trait; swap in `MemorySink` to capture lines.

pub mod config;
pub mod level;
pub mod logger;
pub mod macros;
pub mod sink;

pub use config::{
	ansi_styler, plain_styler, Config, ConfigError, Indicator, Styler, DEFAULT_TIMESTAMP_FORMAT,
};
pub use level::Level;
pub use logger::Logger;
pub use sink::{ConsoleSink, MemorySink, Sink};
