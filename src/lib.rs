pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod prompt;
pub mod session;
