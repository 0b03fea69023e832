use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all pycompat operations.
#[derive(Debug, Error, Diagnostic)]
pub enum PycompatError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The requirements file could not be read.
    #[error("Requirements error: {message}")]
    #[diagnostic(help("Pass the path to a requirements.txt file with pinned `name==version` lines"))]
    Requirements { message: String },

    /// A version string was not a dotted numeric release.
    #[error("Invalid version: {message}")]
    Version { message: String },

    /// A version specifier (e.g. `>=3.8,<3.12`) could not be parsed.
    #[error("Invalid version specifier: {message}")]
    Specifier { message: String },

    /// The compatibility table was missing or unusable.
    #[error("Compatibility matrix error: {message}")]
    #[diagnostic(help("Check `sources.matrix-url` in your pycompat config"))]
    Matrix { message: String },

    /// Network request failed.
    #[error("Network error: {message}")]
    Network { message: String },

    /// Invalid or unreadable configuration file.
    #[error("Config error: {message}")]
    #[diagnostic(help("Check ~/.pycompat/config.toml for syntax errors"))]
    Config { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type PycompatResult<T> = miette::Result<T>;
