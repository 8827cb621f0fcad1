use std::ops::{BitOr, BitOrAssign, Sub};

/// Independent switches that control how a log line is decorated.
///
/// Flags can be combined with `|`:
///
/// ```rust
/// use autolog::DecorationFlags;
/// let flags = DecorationFlags::APPEND_NEWLINE | DecorationFlags::INCLUDE_FILE_LINE;
/// assert!(flags.contains(DecorationFlags::APPEND_NEWLINE));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DecorationFlags(u8);

impl DecorationFlags {
    /// Terminate each line written to the terminal or the file with `\n`.
    ///
    /// Ignored by the syslog, which does its own line framing.
    pub const APPEND_NEWLINE: Self = Self(1);
    /// Prefix the message with `(<file name>:<line>) `.
    pub const INCLUDE_FILE_LINE: Self = Self(1 << 1);
    /// Prefix the message with `(<full source path>:<line>) `.
    ///
    /// Takes precedence over [`INCLUDE_FILE_LINE`](Self::INCLUDE_FILE_LINE).
    pub const INCLUDE_FULL_PATH: Self = Self(1 << 2);
    /// Colorize the severity name on the terminal.
    ///
    /// Has only an effect with feature `colors`.
    pub const COLORED_LEVEL: Self = Self(1 << 3);

    const ALL_BITS: u8 = 0b1111;

    /// No flag set.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Creates flags from a raw bitmask; unknown bits are dropped.
    #[must_use]
    pub const fn from_bits_truncate(bits: u8) -> Self {
        Self(bits & Self::ALL_BITS)
    }

    /// The raw bitmask.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns true if all flags in `other` are also set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns a copy with `flag` set or cleared.
    #[must_use]
    pub const fn with(self, flag: Self, on: bool) -> Self {
        if on {
            Self(self.0 | flag.0)
        } else {
            Self(self.0 & !flag.0)
        }
    }

    /// Returns true if the message is to be prefixed with the source location.
    #[must_use]
    pub const fn wants_location(self) -> bool {
        self.0 & (Self::INCLUDE_FILE_LINE.0 | Self::INCLUDE_FULL_PATH.0) != 0
    }
}

impl Default for DecorationFlags {
    /// `APPEND_NEWLINE | INCLUDE_FILE_LINE`.
    fn default() -> Self {
        Self::APPEND_NEWLINE | Self::INCLUDE_FILE_LINE
    }
}

impl BitOr for DecorationFlags {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for DecorationFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl Sub for DecorationFlags {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 & !rhs.0)
    }
}
