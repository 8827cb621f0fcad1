// only enables the `doc_cfg` feature when the `docsrs` configuration attribute is defined
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! A small logging facade that writes leveled log lines to exactly one output,
//! chosen from the process context:
//!
//! * to stdout, if stdout is an interactive terminal,
//! * to the syslog, otherwise,
//! * or to an append-only log file, once a file path was set.
//!
//! Log calls capture their source location and use the standard format syntax:
//!
//! ```rust
//! use autolog::{log_err, log_info, Severity};
//!
//! autolog::set_level(Severity::Debug);
//! autolog::set_identity("myproc");
//! log_info!("listening on {}:{}", "0.0.0.0", 8080);
//!
//! autolog::set_log_file_path("/tmp/myproc.log");
//! log_err!("connection to {} lost", "db1");
//! ```
//!
//! Terminal and file lines look like
//!
//! ```text
//! 2024/05/17 09:12:44 err   myproc[4711]: (main.rs:  9) connection to db1 lost
//! ```
//!
//! The syslog gets only `(main.rs:  9) connection to db1 lost`, with the severity as priority,
//! since the syslog daemon adds timestamp, identity and process id itself.
//!
//! The free functions and macros like [`log_info!`] work on a process-wide default
//! [`Logger`]. For isolated configurations, e.g. in tests or libraries, create
//! [`Logger`] instances explicitly and write to them with [`log_to!`].
//!
//! Logging never fails visibly: messages that cannot be written are dropped.
//!
//! `autolog` can also serve as backend of the [`log`] facade,
//! see [`init_log_bridge`] and [`Logger::install`].

mod autolog_error;
mod default_logger;
mod deferred_now;
mod error_channel;
mod flags;
mod formats;
mod identity;
#[cfg_attr(docsrs, doc(cfg(feature = "config")))]
#[cfg(feature = "config")]
mod log_config;
mod logger;
mod logger_builder;
mod macros;
mod severity;
mod sink;
mod util;

pub use crate::autolog_error::AutologError;
pub use crate::default_logger::{
    init_log_bridge, logger, set_flags, set_identity, set_level, set_log_file_path,
    set_log_newline, ENV_LEVEL,
};
pub use crate::error_channel::ErrorChannel;
pub use crate::flags::DecorationFlags;
pub use crate::identity::{Identity, MAX_IDENTITY_LEN};
#[cfg(feature = "config")]
pub use crate::log_config::LogConfig;
pub use crate::logger::Logger;
pub use crate::logger_builder::LoggerBuilder;
pub use crate::severity::Severity;
pub use crate::sink::SinkKind;
