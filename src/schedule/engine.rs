//! Uniform per-day pose sampling.

use rand::seq::IndexedRandom;
use thiserror::Error;

use crate::catalog::Pose;

/// Errors produced by schedule computation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    /// More poses per day were requested than the catalog holds. Sampling
    /// without replacement cannot fill the day, and silently handing back a
    /// short day would look like a valid schedule.
    #[error("cannot pick {requested} poses per day from a catalog of {available}")]
    OutOfRange { requested: usize, available: usize },
}

/// Build a `days`-long schedule, each day an independent uniform sample of
/// `poses_per_day` distinct poses from the catalog. Each run of the process
/// draws fresh; there is no seeding contract.
pub fn recommend(
    catalog: &[Pose],
    days: usize,
    poses_per_day: usize,
) -> Result<Vec<Vec<Pose>>, ScheduleError> {
    if poses_per_day > catalog.len() {
        return Err(ScheduleError::OutOfRange {
            requested: poses_per_day,
            available: catalog.len(),
        });
    }

    let mut rng = rand::rng();
    let mut schedule = Vec::with_capacity(days);
    for _ in 0..days {
        let day: Vec<Pose> = catalog
            .choose_multiple(&mut rng, poses_per_day)
            .cloned()
            .collect();
        schedule.push(day);
    }
    Ok(schedule)
}

// ── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn pose(name: &str) -> Pose {
        Pose {
            name: name.to_string(),
            description: format!("{name} description"),
            benefits: format!("{name} benefits"),
            youtube_link: None,
        }
    }

    fn catalog(names: &[&str]) -> Vec<Pose> {
        names.iter().map(|n| pose(n)).collect()
    }

    #[test]
    fn one_day_draw_is_three_distinct_catalog_members() {
        let poses = catalog(&["a", "b", "c", "d", "e"]);

        let schedule = recommend(&poses, 1, 3).unwrap();
        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule[0].len(), 3);

        let names: HashSet<&str> = schedule[0].iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names.len(), 3);
        for picked in &schedule[0] {
            assert!(poses.contains(picked));
        }
    }

    #[test]
    fn draw_of_whole_catalog_is_a_permutation() {
        let poses = catalog(&["a", "b", "c"]);

        let schedule = recommend(&poses, 1, 3).unwrap();
        let names: HashSet<&str> = schedule[0].iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names.len(), 3);
    }

    #[test]
    fn days_are_drawn_independently() {
        let poses = catalog(&["a", "b", "c", "d"]);

        let schedule = recommend(&poses, 2, 3).unwrap();
        assert_eq!(schedule.len(), 2);
        for day in &schedule {
            assert_eq!(day.len(), 3);
            let names: HashSet<&str> = day.iter().map(|p| p.name.as_str()).collect();
            assert_eq!(names.len(), 3, "a day must not repeat a pose");
            for picked in day {
                assert!(poses.contains(picked));
            }
        }
    }

    #[test]
    fn oversized_request_is_out_of_range() {
        let poses = catalog(&["a", "b"]);

        let err = recommend(&poses, 1, 3).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::OutOfRange {
                requested: 3,
                available: 2,
            }
        );
    }

    #[test]
    fn empty_catalog_is_out_of_range_for_any_draw() {
        let err = recommend(&[], 1, 1).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::OutOfRange {
                requested: 1,
                available: 0,
            }
        );
    }

    #[test]
    fn zero_days_yields_empty_schedule() {
        let poses = catalog(&["a", "b", "c"]);

        let schedule = recommend(&poses, 0, 3).unwrap();
        assert!(schedule.is_empty());
    }
}
