// Domain types and value objects
pub mod alert;
pub mod ticker;

// Re-export commonly used types
pub use alert::{Alert, AlertData, AlertLevel};
pub use ticker::TickerResponse;

/// Trading pair identifier as the provider spells it (e.g. "btcusd").
pub type Symbol = String;
