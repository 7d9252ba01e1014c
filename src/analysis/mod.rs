// Deviation scoring and the per-symbol evaluation boundary
pub mod deviation;
pub mod evaluator;

// Re-export commonly used types
pub use deviation::{DeviationResult, DeviationScore};
pub use evaluator::{Evaluation, EvaluationError, Evaluator};
