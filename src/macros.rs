/// Writes a message of the given severity to the given logger.
///
/// The source file and line of the call are captured. The format arguments are
/// not evaluated if the severity does not pass the logger's threshold.
///
/// ```rust
/// use autolog::{log_to, Logger, Severity};
///
/// let logger = Logger::new();
/// log_to!(logger, Severity::Warning, "{} of {} workers are busy", 7, 8);
/// ```
#[macro_export]
macro_rules! log_to {
    ($logger:expr, $severity:expr, $($arg:tt)+) => {{
        let severity: $crate::Severity = $severity;
        let logger = &$logger;
        if logger.enabled(severity) {
            logger.emit(
                ::core::file!(),
                ::core::line!(),
                severity,
                ::core::format_args!($($arg)+),
            );
        }
    }};
}

/// Writes a message of the given severity to the [default logger](crate::logger).
///
/// ```rust
/// use autolog::{log, Severity};
///
/// log!(Severity::Notice, "configuration reloaded from {}", "/etc/app.conf");
/// ```
#[macro_export]
macro_rules! log {
    ($severity:expr, $($arg:tt)+) => {
        $crate::log_to!($crate::logger(), $severity, $($arg)+)
    };
}

/// Writes an emergency message to the default logger.
#[macro_export]
macro_rules! log_emerg {
    ($($arg:tt)+) => ($crate::log!($crate::Severity::Emergency, $($arg)+));
}

/// Writes an alert message to the default logger.
#[macro_export]
macro_rules! log_alert {
    ($($arg:tt)+) => ($crate::log!($crate::Severity::Alert, $($arg)+));
}

/// Writes a critical message to the default logger.
#[macro_export]
macro_rules! log_crit {
    ($($arg:tt)+) => ($crate::log!($crate::Severity::Critical, $($arg)+));
}

/// Writes an error message to the default logger.
#[macro_export]
macro_rules! log_err {
    ($($arg:tt)+) => ($crate::log!($crate::Severity::Error, $($arg)+));
}

/// Writes a warning to the default logger.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)+) => ($crate::log!($crate::Severity::Warning, $($arg)+));
}

/// Writes a notice to the default logger.
#[macro_export]
macro_rules! log_notice {
    ($($arg:tt)+) => ($crate::log!($crate::Severity::Notice, $($arg)+));
}

/// Writes an info message to the default logger.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)+) => ($crate::log!($crate::Severity::Info, $($arg)+));
}

/// Writes a debug message to the default logger.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)+) => ($crate::log!($crate::Severity::Debug, $($arg)+));
}
