pub mod logging;

pub mod spaces;
pub mod distributions;
pub mod policies;
pub mod components;

pub mod configs;

mod error;
pub use error::ConfigError;
