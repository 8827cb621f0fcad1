use crate::{
    deferred_now::DeferredNow,
    formats::{location_prefix, Message},
    sink::Sink,
    util::{eprint_err, lock_or_recover},
    AutologError, DecorationFlags, ErrorChannel, Identity, LoggerBuilder, Severity, SinkKind,
};
use std::{
    fmt,
    path::{Path, PathBuf},
    sync::{
        atomic::{AtomicBool, AtomicU8, Ordering},
        Mutex, PoisonError,
    },
};

/// A logger that writes leveled messages to exactly one output: the terminal, the syslog,
/// or a log file.
///
/// Create it with [`Logger::new`] or, for more control, with [`Logger::builder`].
/// By default, the output is chosen from the process context: if stdout is an
/// interactive terminal, log lines are written there, otherwise messages are sent
/// to the syslog. Setting a log file path with [`Logger::set_file_path`] redirects
/// the output to that file until the path is cleared again.
///
/// Use the macros ([`log_to!`](crate::log_to), or [`log!`](crate::log) and its
/// siblings for the default instance) to emit messages; they capture the source location.
///
/// ```rust
/// use autolog::{log_to, Logger, Severity};
///
/// let logger = Logger::builder().threshold(Severity::Debug).build();
/// log_to!(logger, Severity::Notice, "listening on port {}", 8080);
/// ```
///
/// A logger can be shared between threads; all methods take `&self`.
/// Logging never fails visibly: a message that cannot be written is dropped, optionally
/// with a report on the configured [`ErrorChannel`].
pub struct Logger {
    threshold: AtomicU8,
    flags: AtomicU8,
    interactive: bool,
    error_channel: ErrorChannel,
    // true if the logger serves as backend of the `log` facade
    bridged: AtomicBool,
    state: Mutex<State>,
}

// Owns the resources of the logger.
struct State {
    identity: Identity,
    sink: Sink,
}

impl Logger {
    /// Creates a logger with default settings, see [`LoggerBuilder`].
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Returns a builder for a logger.
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub(crate) fn from_parts(
        threshold: Severity,
        flags: DecorationFlags,
        identity: Identity,
        interactive: bool,
        o_file_path: Option<PathBuf>,
        error_channel: ErrorChannel,
    ) -> Self {
        let sink = match o_file_path {
            Some(path) if !path.as_os_str().is_empty() => Sink::file(&path),
            _ => Sink::auto(interactive, &identity),
        };
        Self {
            threshold: AtomicU8::new(threshold as u8),
            flags: AtomicU8::new(flags.bits()),
            interactive,
            error_channel,
            bridged: AtomicBool::new(false),
            state: Mutex::new(State { identity, sink }),
        }
    }

    /// Returns true if messages of the given severity would currently be written.
    #[inline]
    #[must_use]
    pub fn enabled(&self, severity: Severity) -> bool {
        severity as u8 <= self.threshold.load(Ordering::Relaxed)
    }

    /// Writes a message, if its severity passes the threshold.
    ///
    /// `file` and `line` denote the source location of the log call; usually they are
    /// provided by one of the macros.
    ///
    /// Messages that are less severe than the threshold cost nothing but a comparison.
    /// This method never fails: if the message cannot be written, it is dropped.
    pub fn emit(&self, file: &str, line: u32, severity: Severity, args: fmt::Arguments) {
        if !self.enabled(severity) {
            return;
        }

        let flags = self.flags();
        let location = location_prefix(flags, file, line);

        // no lock is held while formatting, so that log calls from within
        // `Display` implementations of logged values work
        let (identity, sink) = {
            let state = lock_or_recover(&self.state, &self.error_channel);
            (state.identity.clone(), state.sink.clone())
        };

        let msg = Message {
            severity,
            location: location.as_str(),
            args,
        };
        if let Err(e) = sink.write(&mut DeferredNow::new(), &msg, &identity, flags) {
            eprint_err(
                &self.error_channel,
                sink.error_code(),
                "writing log line failed",
                &e,
            );
        }
    }

    /// Like [`Logger::emit`], but takes a raw syslog priority value.
    ///
    /// Only the low-order bits are evaluated, see [`Severity::from_raw`].
    pub fn emit_raw(&self, file: &str, line: u32, priority: u32, args: fmt::Arguments) {
        self.emit(file, line, Severity::from_raw(priority), args);
    }

    /// Flushes the output.
    pub fn flush(&self) {
        let sink = lock_or_recover(&self.state, &self.error_channel).sink.clone();
        if let Err(e) = sink.flush() {
            eprint_err(&self.error_channel, sink.error_code(), "flushing failed", &e);
        }
    }

    /// The least severe severity that is still written.
    #[must_use]
    pub fn threshold(&self) -> Severity {
        Severity::from_u8(self.threshold.load(Ordering::Relaxed))
    }

    /// Replaces the threshold; messages that are less severe are dropped.
    pub fn set_threshold(&self, threshold: Severity) {
        self.threshold.store(threshold as u8, Ordering::Relaxed);
        if self.bridged.load(Ordering::Relaxed) {
            log::set_max_level(threshold.to_level_filter());
        }
    }

    /// The current decoration flags.
    #[must_use]
    pub fn flags(&self) -> DecorationFlags {
        DecorationFlags::from_bits_truncate(self.flags.load(Ordering::Relaxed))
    }

    /// Replaces all decoration flags at once.
    pub fn set_flags(&self, flags: DecorationFlags) {
        self.flags.store(flags.bits(), Ordering::Relaxed);
    }

    /// The identity with which log lines are tagged.
    #[must_use]
    pub fn identity(&self) -> Identity {
        lock_or_recover(&self.state, &self.error_channel)
            .identity
            .clone()
    }

    /// Replaces the identity.
    ///
    /// Names longer than [`MAX_IDENTITY_LEN`](crate::MAX_IDENTITY_LEN) bytes are truncated.
    /// If the syslog is the current output, the syslog registration is renewed, so that
    /// subsequent messages are tagged with the new identity.
    pub fn set_identity(&self, name: &str) {
        let mut state = lock_or_recover(&self.state, &self.error_channel);
        state.identity = Identity::new(name);
        if state.sink.kind() == SinkKind::Syslog {
            state.sink.close();
            state.sink = Sink::auto(false, &state.identity);
        }
    }

    /// Redirects the output to the given file, or, if `path` is empty,
    /// re-runs the automatic selection of terminal or syslog.
    ///
    /// The file is opened in append mode for each log line and closed right after.
    pub fn set_file_path<P: AsRef<Path>>(&self, path: P) {
        let path = path.as_ref();
        let mut state = lock_or_recover(&self.state, &self.error_channel);
        state.sink.close();
        state.sink = if path.as_os_str().is_empty() {
            Sink::auto(self.interactive, &state.identity)
        } else {
            Sink::file(path)
        };
    }

    /// Stops writing to a log file and re-runs the automatic selection of terminal or syslog.
    pub fn clear_file_path(&self) {
        self.set_file_path("");
    }

    /// The path of the log file, if the output goes to a file.
    #[must_use]
    pub fn file_path(&self) -> Option<PathBuf> {
        lock_or_recover(&self.state, &self.error_channel)
            .sink
            .file_path()
            .map(Path::to_path_buf)
    }

    /// The kind of the current output.
    #[must_use]
    pub fn sink_kind(&self) -> SinkKind {
        lock_or_recover(&self.state, &self.error_channel).sink.kind()
    }

    /// Returns true if stdout was found (or declared) to be an interactive terminal.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Makes this logger the backend of the [`log`] facade, so that the macros of the `log`
    /// crate are routed to it.
    ///
    /// The logger lives until the end of the program; the returned reference can be used
    /// to reconfigure it. Changing the threshold also adjusts `log::max_level()`.
    ///
    /// # Errors
    ///
    /// [`AutologError::Log`] if a logger had already been installed.
    pub fn install(self) -> Result<&'static Logger, AutologError> {
        let logger: &'static Logger = Box::leak(Box::new(self));
        logger.bridge()?;
        Ok(logger)
    }

    pub(crate) fn bridge(&'static self) -> Result<(), AutologError> {
        log::set_logger(self)?;
        self.bridged.store(true, Ordering::Relaxed);
        log::set_max_level(self.threshold().to_level_filter());
        Ok(())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.state
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .sink
            .close();
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Logger")
            .field("threshold", &self.threshold())
            .field("flags", &self.flags())
            .field("interactive", &self.interactive)
            .field("sink", &self.sink_kind())
            .finish_non_exhaustive()
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.enabled(metadata.level().into())
    }

    fn log(&self, record: &log::Record) {
        self.emit(
            record.file().unwrap_or("<unknown>"),
            record.line().unwrap_or(0),
            record.level().into(),
            *record.args(),
        );
    }

    fn flush(&self) {
        Logger::flush(self);
    }
}
