// ══════════════════════════════════════════════════════════════════════════════
// MACROS MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Variadic front door: `debug!(logger, "stage", attempt, err)` logs every
// argument in order, space-separated, anything that implements Display.

/// Logs a sequence of values at debug severity.
#[macro_export]
macro_rules! debug {
	($logger:expr, $($part:expr),+ $(,)?) => {
		$logger.log($crate::Level::Debug, &[$(&$part as &dyn ::std::fmt::Display),+])
	};
}

/// Logs a sequence of values at info severity.
#[macro_export]
macro_rules! info {
	($logger:expr, $($part:expr),+ $(,)?) => {
		$logger.log($crate::Level::Info, &[$(&$part as &dyn ::std::fmt::Display),+])
	};
}

/// Logs a sequence of values at warn severity.
#[macro_export]
macro_rules! warn {
	($logger:expr, $($part:expr),+ $(,)?) => {
		$logger.log($crate::Level::Warn, &[$(&$part as &dyn ::std::fmt::Display),+])
	};
}

/// Logs a sequence of values at error severity.
#[macro_export]
macro_rules! error {
	($logger:expr, $($part:expr),+ $(,)?) => {
		$logger.log($crate::Level::Error, &[$(&$part as &dyn ::std::fmt::Display),+])
	};
}
