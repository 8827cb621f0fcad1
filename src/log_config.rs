use crate::{AutologError, DecorationFlags, Logger, Severity};
use serde_derive::Deserialize;
use std::path::{Path, PathBuf};

/// Settings that can be read from a TOML file and applied to a running [`Logger`].
///
/// Only available with optional crate feature `config`.
///
/// All entries are optional; missing entries leave the logger's setting unchanged.
///
/// ```toml
/// level = "debug"
/// newline = true
/// file_line = false
/// full_path = true
/// colors = false
/// identity = "myproc"
/// file = "/var/log/myproc.log"   # an empty string switches back to terminal or syslog
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// The threshold.
    pub level: Option<Severity>,
    /// [`DecorationFlags::APPEND_NEWLINE`].
    pub newline: Option<bool>,
    /// [`DecorationFlags::INCLUDE_FILE_LINE`].
    pub file_line: Option<bool>,
    /// [`DecorationFlags::INCLUDE_FULL_PATH`].
    pub full_path: Option<bool>,
    /// [`DecorationFlags::COLORED_LEVEL`].
    pub colors: Option<bool>,
    /// The identity.
    pub identity: Option<String>,
    /// The log file.
    pub file: Option<PathBuf>,
}

impl LogConfig {
    /// Parses the configuration from TOML text.
    ///
    /// # Errors
    ///
    /// [`AutologError::Toml`] if the text is not valid.
    pub fn from_toml_str(s: &str) -> Result<Self, AutologError> {
        Ok(toml::from_str(s)?)
    }

    /// Reads the configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// [`AutologError::Io`] if the file cannot be read,
    /// [`AutologError::Toml`] if its content is not valid.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AutologError> {
        Self::from_toml_str(&std::fs::read_to_string(path)?)
    }

    fn apply_flags(&self, flags: DecorationFlags) -> DecorationFlags {
        [
            (self.newline, DecorationFlags::APPEND_NEWLINE),
            (self.file_line, DecorationFlags::INCLUDE_FILE_LINE),
            (self.full_path, DecorationFlags::INCLUDE_FULL_PATH),
            (self.colors, DecorationFlags::COLORED_LEVEL),
        ]
        .into_iter()
        .fold(flags, |flags, (o_on, flag)| match o_on {
            Some(on) => flags.with(flag, on),
            None => flags,
        })
    }
}

impl Logger {
    /// Applies the given configuration.
    ///
    /// Only available with optional crate feature `config`.
    pub fn apply_config(&self, config: &LogConfig) {
        if let Some(level) = config.level {
            self.set_threshold(level);
        }
        self.set_flags(config.apply_flags(self.flags()));
        if let Some(ref identity) = config.identity {
            self.set_identity(identity);
        }
        if let Some(ref file) = config.file {
            self.set_file_path(file);
        }
    }
}
