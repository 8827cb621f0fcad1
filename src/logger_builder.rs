use crate::{AutologError, DecorationFlags, ErrorChannel, Identity, Logger, Severity};
use std::{io::IsTerminal, path::PathBuf};

/// Builder for a [`Logger`].
///
/// Is created with [`Logger::builder`].
///
/// Without further configuration, the logger
///
/// * writes messages of severity [`Severity::Info`] and more severe,
/// * decorates them with [`DecorationFlags::default`]
///   (the file name and line of the log call, and a trailing newline),
/// * uses the name of the running process as identity,
/// * writes to stdout if stdout is an interactive terminal, and to the syslog otherwise,
/// * drops errors silently ([`ErrorChannel::DevNull`]).
#[derive(Debug, Clone)]
pub struct LoggerBuilder {
    threshold: Severity,
    flags: DecorationFlags,
    o_identity: Option<Identity>,
    o_interactive: Option<bool>,
    o_file_path: Option<PathBuf>,
    error_channel: ErrorChannel,
}

impl LoggerBuilder {
    pub(crate) fn new() -> Self {
        Self {
            threshold: Severity::Info,
            flags: DecorationFlags::default(),
            o_identity: None,
            o_interactive: None,
            o_file_path: None,
            error_channel: ErrorChannel::default(),
        }
    }

    /// Sets the initial threshold.
    #[must_use]
    pub fn threshold(mut self, threshold: Severity) -> Self {
        self.threshold = threshold;
        self
    }

    /// Reads the initial threshold from the given environment variable, if it is set.
    ///
    /// The value is parsed with [`Severity::from_str`](std::str::FromStr::from_str),
    /// e.g. `AUTOLOG_LEVEL=debug`.
    ///
    /// # Errors
    ///
    /// [`AutologError::Severity`] if the variable is set but does not name a severity.
    pub fn try_env_threshold(mut self, var: &str) -> Result<Self, AutologError> {
        if let Ok(value) = std::env::var(var) {
            self.threshold = value.parse()?;
        }
        Ok(self)
    }

    /// Sets the initial decoration flags.
    #[must_use]
    pub fn flags(mut self, flags: DecorationFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Sets the identity explicitly, rather than using the process name.
    #[must_use]
    pub fn identity(mut self, name: &str) -> Self {
        self.o_identity = Some(Identity::new(name));
        self
    }

    /// Declares whether stdout is to be treated as an interactive terminal,
    /// instead of probing it.
    #[must_use]
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.o_interactive = Some(interactive);
        self
    }

    /// Writes to the given file from the start; an empty path is ignored.
    #[must_use]
    pub fn file_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.o_file_path = Some(path.into());
        self
    }

    /// Where to report failures that are absorbed during logging.
    #[must_use]
    pub fn error_channel(mut self, error_channel: ErrorChannel) -> Self {
        self.error_channel = error_channel;
        self
    }

    /// Creates the logger.
    #[must_use]
    pub fn build(self) -> Logger {
        let interactive = self
            .o_interactive
            .unwrap_or_else(|| std::io::stdout().is_terminal());
        let identity = self
            .o_identity
            .unwrap_or_else(|| Identity::detect().unwrap_or_default());
        Logger::from_parts(
            self.threshold,
            self.flags,
            identity,
            interactive,
            self.o_file_path,
            self.error_channel,
        )
    }
}
