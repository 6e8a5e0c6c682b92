use std::fmt;


/// Construction-time precondition violations.
///
/// Both variants are permanent: the configuration has to change before the
/// component can be built, so callers should not retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The requested feature is recognized but not implemented.
    NotSupported(String),
    /// The environment spec's action space cannot be used with this component.
    InvalidSpace(String),
}

impl fmt::Display for ConfigError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            ConfigError::NotSupported(msg) => write!(f, "not supported: {msg}"),
            ConfigError::InvalidSpace(msg) => write!(f, "invalid space: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}
