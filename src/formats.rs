use crate::{deferred_now::DeferredNow, DecorationFlags, Identity, Severity};
use std::{fmt, io::Write};

// Capacity of the buffer that holds the source location prefix
pub(crate) const LOCATION_CAPA: usize = 256;

/// A log message on its way to a sink.
pub(crate) struct Message<'a> {
    pub(crate) severity: Severity,
    // `(<file>:<line>) ` or empty
    pub(crate) location: &'a str,
    pub(crate) args: fmt::Arguments<'a>,
}

// Stack buffer with fixed capacity; content that does not fit is silently dropped.
pub(crate) struct FixedBuf<const N: usize> {
    buf: [u8; N],
    len: usize,
}
impl<const N: usize> FixedBuf<N> {
    pub(crate) const fn new() -> Self {
        Self {
            buf: [0; N],
            len: 0,
        }
    }

    pub(crate) fn as_str(&self) -> &str {
        // only complete UTF-8 sequences are ever copied in
        std::str::from_utf8(&self.buf[..self.len]).unwrap_or_default()
    }
}
impl<const N: usize> fmt::Write for FixedBuf<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let mut n = s.len().min(N - self.len);
        while !s.is_char_boundary(n) {
            n -= 1;
        }
        self.buf[self.len..self.len + n].copy_from_slice(&s.as_bytes()[..n]);
        self.len += n;
        Ok(())
    }
}

// Renders `(<file>:<line>) ` according to the flags, or nothing.
// The line number is right-aligned with width 3.
pub(crate) fn location_prefix(
    flags: DecorationFlags,
    file: &str,
    line: u32,
) -> FixedBuf<LOCATION_CAPA> {
    use fmt::Write as _;

    let mut prefix = FixedBuf::new();
    if !flags.wants_location() {
        return prefix;
    }
    if flags.contains(DecorationFlags::INCLUDE_FULL_PATH) {
        write!(prefix, "({file}:{line:3}) ").ok();
    } else {
        write!(prefix, "({}:{line:3}) ", basename(file)).ok();
    }
    prefix
}

fn basename(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Writes a terminal or file line:
/// `<timestamp> <severity> <identity>[<pid>]: <location><message>`.
pub(crate) fn write_line(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    msg: &Message,
    identity: &Identity,
    flags: DecorationFlags,
    colored: bool,
) -> std::io::Result<()> {
    write!(w, "{} ", now.format_log_time())?;
    write_severity(w, msg.severity, colored)?;
    write!(
        w,
        " {identity}[{pid}]: {location}{args}",
        pid = std::process::id(),
        location = msg.location,
        args = msg.args
    )?;
    if flags.contains(DecorationFlags::APPEND_NEWLINE) {
        w.write_all(b"\n")?;
    }
    Ok(())
}

/// Writes what the syslog gets: location and message, without framing.
pub(crate) fn write_syslog_message(w: &mut dyn Write, msg: &Message) -> std::io::Result<()> {
    write!(w, "{}{}", msg.location, msg.args)
}

#[cfg(feature = "colors")]
fn write_severity(w: &mut dyn Write, severity: Severity, colored: bool) -> std::io::Result<()> {
    if colored {
        let style = style(severity);
        write!(w, "{}{severity:<5}{}", style.prefix(), style.suffix())
    } else {
        write!(w, "{severity:<5}")
    }
}

#[cfg(not(feature = "colors"))]
fn write_severity(w: &mut dyn Write, severity: Severity, _colored: bool) -> std::io::Result<()> {
    write!(w, "{severity:<5}")
}

#[cfg(feature = "colors")]
fn style(severity: Severity) -> nu_ansi_term::Style {
    use nu_ansi_term::{Color, Style};
    match severity {
        Severity::Emergency | Severity::Alert | Severity::Critical => Color::Red.bold(),
        Severity::Error => Color::Red.normal(),
        Severity::Warning => Color::Yellow.normal(),
        Severity::Notice | Severity::Info => Style::new(),
        Severity::Debug => Style::new().dimmed(),
    }
}

#[cfg(test)]
mod test {
    use super::{location_prefix, write_line, FixedBuf, Message, LOCATION_CAPA};
    use crate::{deferred_now::DeferredNow, DecorationFlags as F, Identity, Severity};
    use std::fmt::Write;

    #[test]
    fn test_location_prefix() {
        let file = "src/net/conn.rs";
        assert_eq!(
            location_prefix(F::INCLUDE_FILE_LINE, file, 42).as_str(),
            "(conn.rs: 42) "
        );
        assert_eq!(
            location_prefix(F::INCLUDE_FULL_PATH, file, 42).as_str(),
            "(src/net/conn.rs: 42) "
        );
        assert_eq!(
            location_prefix(F::INCLUDE_FULL_PATH | F::INCLUDE_FILE_LINE, file, 7).as_str(),
            "(src/net/conn.rs:  7) "
        );
        assert_eq!(location_prefix(F::APPEND_NEWLINE, file, 42).as_str(), "");
        assert_eq!(
            location_prefix(F::INCLUDE_FILE_LINE, "src\\win.rs", 1).as_str(),
            "(win.rs:  1) "
        );
    }

    #[test]
    fn test_location_prefix_truncates() {
        let file = format!("/{}.rs", "d".repeat(400));
        let prefix = location_prefix(F::INCLUDE_FULL_PATH, &file, 42);
        assert_eq!(prefix.as_str().len(), LOCATION_CAPA);
        assert!(prefix.as_str().starts_with("(/ddd"));
    }

    #[test]
    fn test_fixed_buf_keeps_utf8_intact() {
        let mut buf = FixedBuf::<5>::new();
        buf.write_str("abcä").unwrap();
        buf.write_str("ö").unwrap();
        assert_eq!(buf.as_str(), "abcä");
    }

    fn render(
        severity: Severity,
        location: &str,
        flags: F,
        colored: bool,
        args: std::fmt::Arguments,
    ) -> String {
        let mut out = Vec::new();
        let msg = Message {
            severity,
            location,
            args,
        };
        write_line(
            &mut out,
            &mut DeferredNow::new(),
            &msg,
            &Identity::new("myproc"),
            flags,
            colored,
        )
        .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_write_line() {
        let line = render(
            Severity::Warning,
            "(main.rs: 12) ",
            F::APPEND_NEWLINE,
            false,
            format_args!("disk {}% full", 93),
        );
        let expected = format!(
            " warn  myproc[{}]: (main.rs: 12) disk 93% full\n",
            std::process::id()
        );
        assert!(line.ends_with(&expected), "unexpected line: {line}");
        assert_eq!(line.len(), 19 + expected.len());
    }

    #[test]
    fn test_write_line_without_newline() {
        let line = render(Severity::Notice, "", F::empty(), false, format_args!("plain"));
        assert!(line.ends_with(&format!(" notice myproc[{}]: plain", std::process::id())));
    }

    #[cfg(feature = "colors")]
    #[test]
    fn test_colored_severity() {
        let line = render(Severity::Error, "", F::empty(), true, format_args!("boom"));
        assert!(line.contains("\u{1b}["));
        assert!(line.contains("err  "));
    }
}
