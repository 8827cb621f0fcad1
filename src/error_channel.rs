use std::path::PathBuf;

/// Where failures are reported that the logger absorbs while writing.
///
/// Logging calls never return errors to the caller. If writing to a sink fails
/// (e.g. the log file cannot be opened, or the syslog rejects a message), the message is
/// dropped. By default, this happens silently; choose a different channel to make such
/// failures visible, e.g. while setting up a program.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ErrorChannel {
    /// Drop the error reports.
    #[default]
    DevNull,
    /// Write the error reports to stderr.
    StdErr,
    /// Write the error reports to stdout.
    StdOut,
    /// Append the error reports to the given file.
    File(PathBuf),
}
