//! Daily pose recommendation and practice progression.
//!
//! `recommend` draws each day's poses uniformly without replacement within
//! the day; draws are independent across days, so the same pose can recur on
//! different days. [`ScheduleCache`] pins the first computed day for the
//! rest of the process, and [`Progress`] walks the user through it pose by
//! pose.

pub mod cache;
pub mod engine;
pub mod progress;

pub use cache::ScheduleCache;
pub use engine::{recommend, ScheduleError};
pub use progress::{AlreadyCompleted, Progress};

/// Poses in one daily practice. The default daily draw and the progression
/// walk both assume this count.
pub const POSES_PER_DAY: usize = 3;
