use std::{fmt, path::PathBuf, sync::Arc};

/// Maximum length of an identity, in bytes.
pub const MAX_IDENTITY_LEN: usize = 31;

/// The short process name that tags each log line, and under which the process
/// registers with the syslog.
///
/// Holds at most [`MAX_IDENTITY_LEN`] bytes; longer names are truncated (at a
/// character boundary), and a name is cut at an embedded NUL character.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Identity(Arc<str>);

impl Identity {
    /// Creates an identity from the given name, truncating it if necessary.
    #[must_use]
    pub fn new(name: &str) -> Self {
        let name = name.split('\0').next().unwrap_or_default();
        let mut end = name.len().min(MAX_IDENTITY_LEN);
        while !name.is_char_boundary(end) {
            end -= 1;
        }
        Self(Arc::from(&name[..end]))
    }

    /// Determines the name of the running process.
    ///
    /// On linux, the name is read from `/proc/self/status`; otherwise, or if that fails,
    /// the file stem of the executable is used.
    /// Returns `None` if neither is available.
    #[must_use]
    pub fn detect() -> Option<Self> {
        proc_status_name()
            .or_else(executable_name)
            .filter(|name| !name.is_empty())
            .map(|name| Self::new(&name))
    }

    /// The identity as string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the identity is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(target_os = "linux")]
fn proc_status_name() -> Option<String> {
    let status = std::fs::read_to_string("/proc/self/status").ok()?;
    status
        .lines()
        .find_map(|line| line.strip_prefix("Name:"))
        .map(|name| name.trim().to_string())
}

#[cfg(not(target_os = "linux"))]
fn proc_status_name() -> Option<String> {
    None
}

fn executable_name() -> Option<String> {
    std::env::current_exe()
        .ok()
        .or_else(|| std::env::args_os().next().map(PathBuf::from))
        .and_then(|path| {
            path.file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
        })
}
