//! Failures from the `config.ron` load/save path.
//!
//! Every variant keeps its source so the startup log can show where a bad
//! settings file actually went wrong.

/// What can go wrong while reading or writing `config.ron`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `config.ron` exists but could not be read.
    #[error("could not read config.ron: {0}")]
    ReadError(#[source] std::io::Error),

    /// `config.ron` (or its directory) could not be written.
    #[error("could not write config.ron: {0}")]
    WriteError(#[source] std::io::Error),

    /// `config.ron` is not valid RON for the settings schema.
    #[error("config.ron is not valid RON: {0}")]
    ParseError(#[source] ron::error::SpannedError),

    /// Settings could not be rendered to RON text.
    #[error("could not render settings as RON: {0}")]
    SerializeError(#[source] ron::Error),
}
