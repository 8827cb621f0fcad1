mod file_sink;
mod syslog_sink;
mod terminal_sink;

pub(crate) use self::{file_sink::FileSink, syslog_sink::SyslogSink, terminal_sink::TerminalSink};
use crate::{
    deferred_now::DeferredNow, formats::Message, util::ErrorCode, DecorationFlags, Identity,
};
use std::path::Path;

/// The kinds of output a [`Logger`](crate::Logger) can write to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SinkKind {
    /// Log lines go to stdout.
    Terminal,
    /// Log messages go to the system log.
    Syslog,
    /// Log lines are appended to a file.
    File,
}

// The active output of a logger.
//
// Clones are cheap; they are taken as snapshots so that writing happens without
// holding the logger's lock. Only the instance owned by the logger is ever closed.
#[derive(Clone, Debug)]
pub(crate) enum Sink {
    Terminal(TerminalSink),
    Syslog(SyslogSink),
    File(FileSink),
}
impl Sink {
    // Terminal if stdout is interactive, syslog otherwise.
    pub(crate) fn auto(interactive: bool, identity: &Identity) -> Self {
        if interactive {
            Self::Terminal(TerminalSink)
        } else {
            Self::Syslog(SyslogSink::open(identity))
        }
    }

    pub(crate) fn file(path: &Path) -> Self {
        Self::File(FileSink::new(path))
    }

    pub(crate) fn kind(&self) -> SinkKind {
        match self {
            Self::Terminal(_) => SinkKind::Terminal,
            Self::Syslog(_) => SinkKind::Syslog,
            Self::File(_) => SinkKind::File,
        }
    }

    pub(crate) fn file_path(&self) -> Option<&Path> {
        match self {
            Self::File(f) => Some(f.path()),
            _ => None,
        }
    }

    // Write out a log line.
    pub(crate) fn write(
        &self,
        now: &mut DeferredNow,
        msg: &Message,
        identity: &Identity,
        flags: DecorationFlags,
    ) -> std::io::Result<()> {
        match self {
            Self::Terminal(w) => w.write(now, msg, identity, flags),
            Self::Syslog(w) => w.write(msg),
            Self::File(w) => w.write(now, msg, identity, flags),
        }
    }

    pub(crate) fn flush(&self) -> std::io::Result<()> {
        match self {
            Self::Terminal(w) => w.flush(),
            Self::Syslog(_) | Self::File(_) => Ok(()),
        }
    }

    // Releases the resources held by the sink (the syslog registration).
    pub(crate) fn close(&self) {
        if let Self::Syslog(w) = self {
            w.close();
        }
    }

    pub(crate) fn error_code(&self) -> ErrorCode {
        match self {
            Self::Terminal(_) => ErrorCode::Write,
            Self::Syslog(_) => ErrorCode::Syslog,
            Self::File(_) => ErrorCode::File,
        }
    }
}
