use thiserror::Error;

/// Describes errors in the configuration of `autolog`.
///
/// Logging itself never fails visibly; only the setup operations return this type.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AutologError {
    /// The given text is not the name of a severity.
    #[error("Invalid severity: {0}")]
    Severity(String),

    /// A configuration file could not be read.
    #[error("Configuration file cannot be read")]
    Io(#[from] std::io::Error),

    /// The content of a configuration file is invalid.
    #[cfg_attr(docsrs, doc(cfg(feature = "config")))]
    #[cfg(feature = "config")]
    #[error("Configuration file is not valid toml")]
    Toml(#[from] toml::de::Error),

    /// Installing the logger as backend of the `log` facade failed,
    /// most likely because another logger was installed before.
    #[error("Logger initialization failed")]
    Log(#[from] log::SetLoggerError),
}
