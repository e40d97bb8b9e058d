//! Standard action implementations.

pub mod logging;

pub use logging::LoggingAction;
