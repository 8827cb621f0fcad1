use crate::{formats::Message, Identity};

#[cfg(unix)]
pub(crate) use self::posix::SyslogSink;
#[cfg(not(unix))]
pub(crate) use self::unsupported::SyslogSink;

#[cfg(unix)]
mod posix {
    use super::{Identity, Message};
    use crate::{formats::write_syslog_message, util::write_buffered};
    use nix::syslog::{closelog, openlog, syslog, Facility, LogFlags};
    use std::{
        ffi::{CStr, CString, OsStr},
        os::unix::ffi::OsStrExt,
        sync::{
            atomic::{AtomicBool, Ordering},
            Arc, Mutex, MutexGuard,
        },
    };

    // `openlog` keeps a pointer to the ident, so the idents have to live until the end
    // of the process. Each distinct ident is allocated once and reused afterwards.
    static REGISTRATION: Mutex<Registration> = Mutex::new(Registration {
        idents: Vec::new(),
        current: None,
    });

    struct Registration {
        idents: Vec<&'static CStr>,
        // the ident passed to the last `openlog`, `None` if the syslog is closed
        current: Option<Option<&'static CStr>>,
    }
    impl Registration {
        fn intern(&mut self, identity: &Identity) -> Option<&'static CStr> {
            if identity.is_empty() {
                // let the C library choose the program name
                return None;
            }
            let bytes = identity.as_str().as_bytes();
            if let Some(ident) = self.idents.iter().find(|i| i.to_bytes() == bytes) {
                return Some(*ident);
            }
            // `Identity` never contains NUL bytes
            let ident: &'static CStr =
                Box::leak(CString::new(bytes).unwrap_or_default().into_boxed_c_str());
            self.idents.push(ident);
            Some(ident)
        }

        fn register(&mut self, ident: Option<&'static CStr>) -> std::io::Result<()> {
            if self.current.is_some() {
                closelog();
                self.current = None;
            }

            // nix openlog bindings have a Linux-specific signature
            #[cfg(target_os = "linux")]
            openlog(ident, LogFlags::LOG_PID, Facility::LOG_DAEMON)?;
            #[cfg(not(target_os = "linux"))]
            openlog(
                ident.map(|i| OsStr::from_bytes(i.to_bytes())),
                LogFlags::LOG_PID,
                Facility::LOG_DAEMON,
            )?;

            self.current = Some(ident);
            Ok(())
        }
    }

    fn registration() -> MutexGuard<'static, Registration> {
        // the registration state stays consistent even if a holder panicked
        REGISTRATION
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    // Forwards messages to the syslog, via the POSIX `syslog` function.
    //
    // The registration is process-wide: if several loggers write to the syslog under
    // different idents, each change of the writing logger costs a `closelog` and an `openlog`.
    //
    // Clones share the `closed` flag, so that a snapshot taken before `close`
    // drops its messages instead of registering again.
    #[derive(Clone, Debug)]
    pub(crate) struct SyslogSink {
        ident: Option<&'static CStr>,
        closed: Arc<AtomicBool>,
    }

    impl SyslogSink {
        // Registers with the syslog under the given identity.
        //
        // A failing registration is not fatal: `write` retries it.
        pub(crate) fn open(identity: &Identity) -> Self {
            let mut registration = registration();
            let ident = registration.intern(identity);
            registration.register(ident).ok();
            Self {
                ident,
                closed: Arc::new(AtomicBool::new(false)),
            }
        }

        pub(crate) fn write(&self, msg: &Message) -> std::io::Result<()> {
            write_buffered(
                |buffer| write_syslog_message(buffer, msg),
                |text| {
                    let mut registration = registration();
                    if self.closed.load(Ordering::Acquire) {
                        // the logger has switched to another output meanwhile
                        return Ok(());
                    }
                    // another logger instance might have registered with a different ident
                    if registration.current != Some(self.ident) {
                        registration.register(self.ident)?;
                    }
                    Ok(syslog(msg.severity.to_nix(), OsStr::from_bytes(text))?)
                },
            )
        }

        // Closes the syslog, unless another logger instance has taken it over.
        pub(crate) fn close(&self) {
            let mut registration = registration();
            self.closed.store(true, Ordering::Release);
            if registration.current == Some(self.ident) {
                closelog();
                registration.current = None;
            }
        }

        #[cfg(test)]
        pub(crate) fn ident(&self) -> Option<&'static CStr> {
            self.ident
        }
    }

}

#[cfg(not(unix))]
mod unsupported {
    use super::{Identity, Message};

    // There is no syslog on this platform; messages are dropped.
    #[derive(Clone, Copy, Debug)]
    pub(crate) struct SyslogSink;

    impl SyslogSink {
        pub(crate) fn open(_identity: &Identity) -> Self {
            Self
        }

        pub(crate) fn write(&self, _msg: &Message) -> std::io::Result<()> {
            Ok(())
        }

        pub(crate) fn close(&self) {}
    }
}
