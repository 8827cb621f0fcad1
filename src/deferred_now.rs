use chrono::{DateTime, Local};

// Timestamp layout of the terminal and file lines
const TS_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Deferred timestamp creation.
///
/// The timestamp is only taken when a sink asks for it, so messages that end up
/// in the syslog (which stamps them itself) never pay for it.
#[derive(Debug, Default)]
pub(crate) struct DeferredNow(Option<DateTime<Local>>);

impl<'a> DeferredNow {
    pub(crate) fn new() -> Self {
        Self(None)
    }

    // The first caller generates the timestamp.
    pub(crate) fn now(&'a mut self) -> &'a DateTime<Local> {
        self.0.get_or_insert_with(Local::now)
    }

    pub(crate) fn format_log_time(&mut self) -> impl std::fmt::Display + '_ {
        self.now().format(TS_FORMAT)
    }
}

#[cfg(test)]
mod test {
    #[test]
    fn test_deferred_now() {
        let mut deferred_now = super::DeferredNow::new();
        let now = deferred_now.now().to_string();
        std::thread::sleep(std::time::Duration::from_millis(300));
        let again = deferred_now.now().to_string();
        assert_eq!(now, again);
    }

    #[test]
    fn test_format_log_time() {
        let mut deferred_now = super::DeferredNow::new();
        let ts = deferred_now.format_log_time().to_string();
        // e.g. 2021/04/01 13:05:09
        assert_eq!(ts.len(), 19);
        assert_eq!(&ts[4..5], "/");
        assert_eq!(&ts[10..11], " ");
    }
}
