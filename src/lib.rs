//! Chair-yoga companion core.
//!
//! Local accounts, a single-user session, a read-only pose catalog, and a
//! daily recommendation engine, with a thin CLI standing in for the mobile
//! screens. The persisted state is three small files in one data directory:
//! `user_data.json` (accounts), `current_user.txt` (session), and
//! `chair_yoga_poses.json` (catalog). All I/O is synchronous and
//! single-process; nothing here locks, retries, or spawns.

pub mod accounts;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod schedule;
pub mod session;

#[cfg(test)]
mod tests {
    //! Whole-core flow: the same sequence the screens drive, minus the
    //! screens.

    use tempfile::TempDir;

    use crate::accounts::AccountStore;
    use crate::catalog::Pose;
    use crate::schedule::{self, Progress, ScheduleCache};
    use crate::session::SessionStore;

    fn four_pose_catalog() -> Vec<Pose> {
        ["A", "B", "C", "D"]
            .iter()
            .map(|name| Pose {
                name: name.to_string(),
                description: format!("{name} description"),
                benefits: format!("{name} benefits"),
                youtube_link: None,
            })
            .collect()
    }

    #[test]
    fn register_login_practice_logout() {
        let tmp = TempDir::new().unwrap();
        let accounts = AccountStore::new(tmp.path().join("user_data.json"));
        let sessions = SessionStore::new(tmp.path().join("current_user.txt"));

        // Sign up, then log in on the next "screen".
        assert!(accounts.register("alice", "warrior-2", None, true).unwrap());
        assert!(accounts.verify("alice", "warrior-2").unwrap());
        sessions.set_current_user("alice").unwrap();
        assert_eq!(
            sessions.get_current_user().unwrap().as_deref(),
            Some("alice")
        );

        // Dashboard: two days of three poses from a four-pose catalog.
        let catalog = four_pose_catalog();
        let days = schedule::recommend(&catalog, 2, 3).unwrap();
        assert_eq!(days.len(), 2);
        for day in &days {
            assert_eq!(day.len(), 3);
            for pose in day {
                assert!(catalog.contains(pose));
            }
        }

        // Guided practice over today's cached picks.
        let mut cache = ScheduleCache::new();
        let picks = cache.today_or_compute(&catalog).unwrap().to_vec();
        assert_eq!(picks, cache.today_or_compute(&catalog).unwrap());

        let mut progress = Progress::start();
        for expected in 0..3 {
            assert_eq!(progress.index(), Some(expected));
            progress = progress.advance().unwrap();
        }
        assert!(progress.is_completed());
        assert!(progress.advance().is_err());

        // Settings, then logout.
        accounts.update_notification_time("alice", 7, 30).unwrap();
        assert_eq!(
            accounts
                .get("alice")
                .unwrap()
                .unwrap()
                .notification_time
                .as_deref(),
            Some("7:30")
        );
        sessions.clear_current_user().unwrap();
        assert_eq!(sessions.get_current_user().unwrap(), None);
    }
}
