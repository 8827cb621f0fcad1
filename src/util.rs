use crate::ErrorChannel;
use std::{
    cell::RefCell,
    io::Write,
    sync::{Mutex, MutexGuard},
};

#[derive(Copy, Clone, Debug)]
pub(crate) enum ErrorCode {
    Write,
    File,
    Syslog,
    Poison,
}
impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::Write => "Write",
            Self::File => "File",
            Self::Syslog => "Syslog",
            Self::Poison => "Poison",
        }
    }
}

// Reports an absorbed failure on the error channel; reporting never fails visibly.
pub(crate) fn eprint_err(
    channel: &ErrorChannel,
    code: ErrorCode,
    msg: &str,
    err: &dyn std::error::Error,
) {
    let line = format!(
        "[autolog][ERRCODE::{}] {msg}, caused by {err}\n",
        code.as_str()
    );
    match channel {
        ErrorChannel::DevNull => {}
        ErrorChannel::StdErr => {
            std::io::stderr().write_all(line.as_bytes()).ok();
        }
        ErrorChannel::StdOut => {
            std::io::stdout().write_all(line.as_bytes()).ok();
        }
        ErrorChannel::File(path) => {
            if let Ok(mut file) = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
            {
                file.write_all(line.as_bytes()).ok();
            }
        }
    }
}

// Locks the mutex, and continues with the inner value if a panicking thread had poisoned it
pub(crate) fn lock_or_recover<'a, T>(
    mutex: &'a Mutex<T>,
    channel: &ErrorChannel,
) -> MutexGuard<'a, T> {
    mutex.lock().unwrap_or_else(|e| {
        eprint_err(channel, ErrorCode::Poison, "logger state was poisoned", &e);
        mutex.clear_poison();
        e.into_inner()
    })
}

// Thread-local buffer
pub(crate) fn buffer_with<F>(f: F)
where
    F: FnOnce(&RefCell<Vec<u8>>),
{
    thread_local! {
        static BUFFER: RefCell<Vec<u8>> = RefCell::new(Vec::with_capacity(200));
    }
    BUFFER.with(f);
}

// Renders into the thread-local buffer and hands the complete line to `write`.
//
// Recursive logging (a log call in a Display impl of a logged value) finds the
// thread-local buffer borrowed and falls back to a temporary one.
pub(crate) fn write_buffered<R, W>(render: R, write: W) -> std::io::Result<()>
where
    R: FnOnce(&mut Vec<u8>) -> std::io::Result<()>,
    W: FnOnce(&[u8]) -> std::io::Result<()>,
{
    let mut result = Ok(());
    buffer_with(|tl_buf| match tl_buf.try_borrow_mut() {
        Ok(mut buffer) => {
            buffer.clear();
            result = render(&mut *buffer).and_then(|()| write(&buffer[..]));
            buffer.clear();
        }
        Err(_e) => {
            let mut tmp_buf = Vec::<u8>::with_capacity(200);
            result = render(&mut tmp_buf).and_then(|()| write(&tmp_buf));
        }
    });
    result
}
