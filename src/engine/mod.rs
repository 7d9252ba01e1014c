pub mod summary;
pub mod sweep;

// Re-export key components
pub use summary::SweepSummary;
pub use sweep::run;
