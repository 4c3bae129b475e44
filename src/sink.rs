// ══════════════════════════════════════════════════════════════════════════════
// SINK MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// The output seam. A sink receives one finished line per log call and owns the
// routing to an actual destination. `ConsoleSink` is the stdout/stderr console
// pair; `MemorySink` captures lines for inspection in tests.

use std::sync::Mutex;
use crate::level::Level;

/// Destination for finished log lines. One `write_line` per log call, plus
/// one empty line when the logger is configured with a trailing newline.
pub trait Sink {
	fn write_line(&self, level: Level, line: &str);
}

/// The standard console pair: debug and info to stdout, warn and error to
/// stderr. No buffering beyond what the stream macros already do.
pub struct ConsoleSink;

impl Sink for ConsoleSink {
	fn write_line(&self, level: Level, line: &str) {
		if level.uses_stderr() {
			eprintln!("{}", line);
		} else {
			println!("{}", line);
		}
	}
}

/// Capture sink: records every line with its level so tests can assert on
/// exactly what was (or was not) emitted.
#[derive(Default)]
pub struct MemorySink {
	lines: Mutex<Vec<(Level, String)>>,
}

impl MemorySink {
	pub fn new() -> Self {
		Self::default()
	}

	/// Snapshot of everything written so far, in write order.
	pub fn lines(&self) -> Vec<(Level, String)> {
		self.lines.lock().unwrap().clone()
	}

	pub fn is_empty(&self) -> bool {
		self.lines.lock().unwrap().is_empty()
	}
}

impl Sink for MemorySink {
	fn write_line(&self, level: Level, line: &str) {
		self.lines.lock().unwrap().push((level, line.to_string()));
	}
}
