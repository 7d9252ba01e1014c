//! Configuration module for the alerting application.

pub mod gemini;
pub mod monitor;

mod debug; // Private: use crate::config::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

// Re-export commonly used items
pub use gemini::{GEMINI, GeminiApiConfig};
pub use monitor::{DEFAULT_DEVIATION_THRESHOLD, MonitorConfig};
