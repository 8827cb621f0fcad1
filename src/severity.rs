use crate::AutologError;
use std::{fmt, str::FromStr};

/// Syslog severity.
///
/// The ordering follows the syslog priorities, see
/// [RFC 5424](https://datatracker.ietf.org/doc/rfc5424):
/// a lower value means a more severe message.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Severity {
    /// System is unusable.
    Emergency = 0,
    /// Action must be taken immediately.
    Alert = 1,
    /// Critical conditions.
    Critical = 2,
    /// Error conditions.
    Error = 3,
    /// Warning conditions.
    Warning = 4,
    /// Normal but significant condition.
    Notice = 5,
    /// Informational messages.
    Info = 6,
    /// Debug-level messages.
    Debug = 7,
}

// Mask that extracts the priority from a syslog priority value (`LOG_PRI`)
const PRI_MASK: u8 = 0x07;

impl Severity {
    /// All severities, from the most to the least severe.
    pub const ALL: [Severity; 8] = [
        Severity::Emergency,
        Severity::Alert,
        Severity::Critical,
        Severity::Error,
        Severity::Warning,
        Severity::Notice,
        Severity::Info,
        Severity::Debug,
    ];

    /// Converts a raw syslog priority value into a `Severity`.
    ///
    /// Only the low-order bits are considered, so facility or flag bits that
    /// a caller might have or-ed into the value are ignored.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_raw(raw: u32) -> Self {
        Self::from_u8(raw as u8)
    }

    pub(crate) const fn from_u8(v: u8) -> Self {
        match v & PRI_MASK {
            0 => Self::Emergency,
            1 => Self::Alert,
            2 => Self::Critical,
            3 => Self::Error,
            4 => Self::Warning,
            5 => Self::Notice,
            6 => Self::Info,
            _ => Self::Debug,
        }
    }

    /// The short name that is used in log lines, e.g. `"err"` or `"warn"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Emergency => "emerg",
            Self::Alert => "alert",
            Self::Critical => "crit",
            Self::Error => "err",
            Self::Warning => "warn",
            Self::Notice => "notice",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }

    #[cfg(unix)]
    pub(crate) fn to_nix(self) -> nix::syslog::Severity {
        use nix::syslog::Severity as S;
        match self {
            Self::Emergency => S::LOG_EMERG,
            Self::Alert => S::LOG_ALERT,
            Self::Critical => S::LOG_CRIT,
            Self::Error => S::LOG_ERR,
            Self::Warning => S::LOG_WARNING,
            Self::Notice => S::LOG_NOTICE,
            Self::Info => S::LOG_INFO,
            Self::Debug => S::LOG_DEBUG,
        }
    }

    /// The most verbose `log::LevelFilter` that still lets messages of this severity pass.
    pub(crate) fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Self::Emergency | Self::Alert | Self::Critical | Self::Error => {
                log::LevelFilter::Error
            }
            Self::Warning => log::LevelFilter::Warn,
            Self::Notice | Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Trace,
        }
    }
}

impl From<log::Level> for Severity {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Severity::Error,
            log::Level::Warn => Severity::Warning,
            log::Level::Info => Severity::Info,
            log::Level::Debug | log::Level::Trace => Severity::Debug,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // `pad` so that width and alignment specs like `{:<5}` work
        f.pad(self.name())
    }
}

impl FromStr for Severity {
    type Err = AutologError;

    /// Accepts the short names used in log lines as well as the long variant names,
    /// case-insensitively (`"warn"`, `"warning"`, `"WARNING"`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "emerg" | "emergency" | "panic" => Ok(Self::Emergency),
            "alert" => Ok(Self::Alert),
            "crit" | "critical" => Ok(Self::Critical),
            "err" | "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warning),
            "notice" => Ok(Self::Notice),
            "info" => Ok(Self::Info),
            "debug" | "trace" => Ok(Self::Debug),
            _ => Err(AutologError::Severity(s.to_string())),
        }
    }
}

#[cfg(feature = "config")]
impl<'de> serde::Deserialize<'de> for Severity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
