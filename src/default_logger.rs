use crate::{AutologError, DecorationFlags, Logger, Severity};
use std::{path::Path, sync::LazyLock};

/// Name of the environment variable from which the default logger reads its
/// initial threshold, e.g. `AUTOLOG_LEVEL=debug`.
pub const ENV_LEVEL: &str = "AUTOLOG_LEVEL";

static DEFAULT_LOGGER: LazyLock<Logger> = LazyLock::new(|| {
    Logger::builder()
        .try_env_threshold(ENV_LEVEL)
        .unwrap_or_else(|_| Logger::builder())
        .build()
});

/// The process-wide default logger.
///
/// It is created with default settings on first use, see [`LoggerBuilder`](crate::LoggerBuilder);
/// an invalid value of [`ENV_LEVEL`] is ignored.
/// The macros [`log!`](crate::log), [`log_info!`](crate::log_info) etc. write to it.
pub fn logger() -> &'static Logger {
    &DEFAULT_LOGGER
}

/// Sets the threshold of the default logger.
pub fn set_level(threshold: Severity) {
    logger().set_threshold(threshold);
}

/// Replaces the decoration flags of the default logger.
pub fn set_flags(flags: DecorationFlags) {
    logger().set_flags(flags);
}

/// Switches the trailing newline of the default logger on or off.
pub fn set_log_newline(newline: bool) {
    let logger = logger();
    logger.set_flags(logger.flags().with(DecorationFlags::APPEND_NEWLINE, newline));
}

/// Sets the identity of the default logger.
pub fn set_identity(name: &str) {
    logger().set_identity(name);
}

/// Redirects the default logger to the given file, or, with an empty path,
/// back to terminal or syslog.
pub fn set_log_file_path<P: AsRef<Path>>(path: P) {
    logger().set_file_path(path);
}

/// Routes the macros of the [`log`] crate to the default logger.
///
/// # Errors
///
/// [`AutologError::Log`] if another logger had already been installed.
pub fn init_log_bridge() -> Result<(), AutologError> {
    logger().bridge()
}
