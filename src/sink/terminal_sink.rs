use crate::{
    deferred_now::DeferredNow,
    formats::{write_line, Message},
    util::write_buffered,
    DecorationFlags, Identity,
};
use std::io::Write;

// Writes log lines to stdout.
#[derive(Clone, Copy, Debug)]
pub(crate) struct TerminalSink;

impl TerminalSink {
    pub(crate) fn write(
        self,
        now: &mut DeferredNow,
        msg: &Message,
        identity: &Identity,
        flags: DecorationFlags,
    ) -> std::io::Result<()> {
        let colored = flags.contains(DecorationFlags::COLORED_LEVEL);
        write_buffered(
            |buffer| write_line(buffer, now, msg, identity, flags, colored),
            |line| {
                let mut w = std::io::stdout().lock();
                w.write_all(line)?;
                w.flush()
            },
        )
    }

    pub(crate) fn flush(self) -> std::io::Result<()> {
        std::io::stdout().lock().flush()
    }
}
