pub mod maths_utils;
pub mod time_utils;

pub use maths_utils::StatsError;
pub use time_utils::TimeUtils;
