//! Pose-to-pose walk through a daily practice.

use thiserror::Error;

use super::POSES_PER_DAY;

/// Returned when advancing a practice that has already finished.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("practice already completed")]
pub struct AlreadyCompleted;

/// Where the user is within today's practice.
///
/// Strictly forward: 0 → 1 → 2 → Completed. No way back, no way past the
/// end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// Viewing the pose at this index (0-based).
    Viewing(usize),
    /// Every pose for the day has been seen.
    Completed,
}

impl Progress {
    /// A fresh practice, positioned on the first pose.
    pub fn start() -> Self {
        Progress::Viewing(0)
    }

    /// Step to the next pose, or to `Completed` from the last pose.
    pub fn advance(self) -> Result<Self, AlreadyCompleted> {
        match self {
            Progress::Viewing(index) if index + 1 < POSES_PER_DAY => {
                Ok(Progress::Viewing(index + 1))
            }
            Progress::Viewing(_) => Ok(Progress::Completed),
            Progress::Completed => Err(AlreadyCompleted),
        }
    }

    /// Index of the pose currently on screen, while the practice is going.
    pub fn index(self) -> Option<usize> {
        match self {
            Progress::Viewing(index) => Some(index),
            Progress::Completed => None,
        }
    }

    /// Whether the day's practice has finished.
    pub fn is_completed(self) -> bool {
        matches!(self, Progress::Completed)
    }
}

// ── Tests ───────────────────────────────────────────────────────────
