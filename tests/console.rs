// ══════════════════════════════════════════════════════════════════════════════
// CONSOLE INTEGRATION TESTS
// ══════════════════════════════════════════════════════════════════════════════
//
// Exercises the public surface the way a host application would: build a
// logger from a config, log through the methods and macros, and assert on the
// captured lines.

use std::sync::Arc;
use chrono::{FixedOffset, TimeZone};
use serial_test::serial;
use tintlog::{plain_styler, Config, Indicator, Level, Logger, MemorySink};

#[test]
fn warn_threshold_with_initial_indicator() {
	let sink = Arc::new(MemorySink::new());
	let config = Config {
		min_level: Level::Warn,
		indicator: Indicator::Initial,
		styler: plain_styler,
		..Config::default()
	};
	let logger = Logger::with_sink(config, sink.clone());

	logger.info("x");
	assert!(sink.is_empty());

	logger.warn("y");
	let lines = sink.lines();
	assert_eq!(lines.len(), 1);
	assert_eq!(lines[0].0, Level::Warn);
	assert!(lines[0].1.contains('W'));
	assert!(lines[0].1.ends_with(" y"));
}

#[test]
#[serial]
fn warn_prefix_carries_color_styling() {
	colored::control::set_override(true);
	let logger = Logger::new(Config {
		min_level: Level::Warn,
		indicator: Indicator::Initial,
		..Config::default()
	});

	let time = FixedOffset::east_opt(0)
		.unwrap()
		.with_ymd_and_hms(2026, 1, 2, 3, 4, 5)
		.unwrap();
	let prefix = logger.prefix(&time, Level::Warn);
	colored::control::unset_override();

	assert!(prefix.contains('W'));
	assert!(prefix.contains('\u{1b}'), "expected ANSI styling, got {:?}", prefix);
}

#[test]
fn default_logger_passes_parts_through_after_the_prefix() {
	let sink = Arc::new(MemorySink::new());
	let logger = Logger::with_sink(
		Config { styler: plain_styler, ..Config::default() },
		sink.clone(),
	);

	logger.log(Level::Debug, &[&"a", &1, &"{b: 2}"]);

	let lines = sink.lines();
	assert_eq!(lines.len(), 1);
	assert_eq!(lines[0].0, Level::Debug);
	assert!(lines[0].1.ends_with(" a 1 {b: 2}"));
}

#[test]
fn level_names_parse_for_host_configuration() {
	let level: Level = "warn".parse().unwrap();
	let mode: Indicator = "full".parse().unwrap();
	let logger = Logger::with_sink(
		Config {
			min_level: level,
			indicator: mode,
			timestamp_format: String::new(),
			styler: plain_styler,
			..Config::default()
		},
		Arc::new(MemorySink::new()),
	);

	assert!(!logger.is_enabled(Level::Info));
	assert!(logger.is_enabled(Level::Warn));
	assert!("silent".parse::<Level>().is_err());
	assert!("badge".parse::<Indicator>().is_err());
}

#[test]
fn variadic_macros_join_arguments_with_spaces() {
	let sink = Arc::new(MemorySink::new());
	let logger = Logger::with_sink(
		Config {
			indicator: Indicator::None,
			timestamp_format: String::new(),
			styler: plain_styler,
			..Config::default()
		},
		sink.clone(),
	);

	tintlog::error!(logger, "write failed on", "side-b", "code", 32);
	assert_eq!(
		sink.lines(),
		vec![(Level::Error, "write failed on side-b code 32".to_string())]
	);
}

#[test]
fn independent_loggers_do_not_share_state() {
	let quiet_sink = Arc::new(MemorySink::new());
	let loud_sink = Arc::new(MemorySink::new());
	let quiet = Logger::with_sink(
		Config { min_level: Level::Error, ..Config::default() },
		quiet_sink.clone(),
	);
	let loud = Logger::with_sink(Config::default(), loud_sink.clone());

	quiet.info("suppressed");
	loud.info("kept");

	assert!(quiet_sink.is_empty());
	assert_eq!(loud_sink.lines().len(), 1);
}
