//! Process-lifetime cache of today's picks.
//!
//! The first call computes one day of recommendations and every later call
//! in the same process returns those exact poses, so the dashboard, the
//! detail view, and the guided practice all agree on what "today" means.
//! There is no invalidation: a new process draws a new day.

use crate::catalog::Pose;

use super::engine::{recommend, ScheduleError};
use super::POSES_PER_DAY;

/// Owns today's pose picks for the lifetime of the process.
#[derive(Debug, Default)]
pub struct ScheduleCache {
    today: Option<Vec<Pose>>,
}

impl ScheduleCache {
    /// An empty cache; nothing is drawn until first use.
    pub fn new() -> Self {
        Self::default()
    }

    /// Today's poses, drawing them on first call and returning the same
    /// picks on every call after that.
    pub fn today_or_compute(&mut self, catalog: &[Pose]) -> Result<&[Pose], ScheduleError> {
        if self.today.is_none() {
            let mut days = recommend(catalog, 1, POSES_PER_DAY)?;
            self.today = days.pop();
            tracing::debug!("daily pose picks computed");
        }
        Ok(self.today.as_deref().unwrap_or_default())
    }
}

// ── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Pose> {
        ["a", "b", "c", "d", "e", "f"]
            .iter()
            .map(|name| Pose {
                name: name.to_string(),
                description: String::new(),
                benefits: String::new(),
                youtube_link: None,
            })
            .collect()
    }

    #[test]
    fn repeated_calls_return_identical_picks() {
        let poses = catalog();
        let mut cache = ScheduleCache::new();

        let first = cache.today_or_compute(&poses).unwrap().to_vec();
        assert_eq!(first.len(), POSES_PER_DAY);

        for _ in 0..10 {
            let again = cache.today_or_compute(&poses).unwrap();
            assert_eq!(again, first.as_slice());
        }
    }

    #[test]
    fn picks_come_from_the_catalog() {
        let poses = catalog();
        let mut cache = ScheduleCache::new();

        for picked in cache.today_or_compute(&poses).unwrap() {
            assert!(poses.contains(picked));
        }
    }

    #[test]
    fn small_catalog_propagates_out_of_range() {
        let poses: Vec<Pose> = catalog().into_iter().take(2).collect();
        let mut cache = ScheduleCache::new();

        assert!(matches!(
            cache.today_or_compute(&poses),
            Err(ScheduleError::OutOfRange {
                requested: 3,
                available: 2,
            })
        ));
    }
}
