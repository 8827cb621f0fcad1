use crate::{
    deferred_now::DeferredNow,
    formats::{write_line, Message},
    util::write_buffered,
    DecorationFlags, Identity,
};
use std::{fs::OpenOptions, io::Write, path::Path, sync::Arc};

// Appends log lines to a file.
//
// The file is opened for each line and closed right after, so that external
// log rotation (rename or delete) is picked up without any further ado.
#[derive(Clone, Debug)]
pub(crate) struct FileSink {
    path: Arc<Path>,
}

impl FileSink {
    pub(crate) fn new(path: &Path) -> Self {
        Self {
            path: Arc::from(path),
        }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn write(
        &self,
        now: &mut DeferredNow,
        msg: &Message,
        identity: &Identity,
        flags: DecorationFlags,
    ) -> std::io::Result<()> {
        write_buffered(
            |buffer| write_line(buffer, now, msg, identity, flags, false),
            |line| {
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&self.path)?
                    .write_all(line)
            },
        )
    }
}
