//! Command-line shell over the core stores.
//!
//! Stands in for the mobile screen stack: each subcommand is one screen's
//! worth of interaction (sign-up, login, dashboard, pose detail, guided
//! practice, settings). User-facing messages go to stdout/stderr here; the
//! stores themselves only log.
//!
//! The session file is read once at startup into [`App::current_user`] and
//! handed to commands from there; no code path re-reads ambient identity
//! mid-flow.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::accounts::AccountStore;
use crate::catalog::{self, Pose};
use crate::config::Config;
use crate::schedule::{Progress, ScheduleCache, POSES_PER_DAY};
use crate::session::SessionStore;

#[derive(Debug, Parser)]
#[command(
    name = "sukha",
    version,
    about = "Chair-yoga companion: local accounts and a daily guided pose practice."
)]
pub struct Cli {
    /// Config file path (default: sukha.toml in the working or platform config dir).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the configured data directory.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create an account and log in.
    Register {
        username: String,
        /// Remember this account on the login screen.
        #[arg(long)]
        remember_me: bool,
        /// Password (prompted interactively, with confirmation, when omitted).
        #[arg(long)]
        password: Option<String>,
    },
    /// Log in as an existing user.
    Login {
        username: String,
        /// Password (prompted interactively when omitted).
        #[arg(long)]
        password: Option<String>,
    },
    /// End the current session.
    Logout,
    /// Show the active user.
    Whoami,
    /// Show today's recommended poses.
    Today,
    /// Step through today's poses one by one.
    Practice,
    /// Show the detail view for one of today's poses (1-based).
    Pose { number: usize },
    /// Set the daily reminder time for the active user, e.g. 7:30.
    SetNotificationTime { time: String },
    /// List every pose in the catalog.
    Catalog,
}

/// Everything a command needs: resolved config, store handles, and the
/// session read once at startup.
struct App {
    config: Config,
    accounts: AccountStore,
    sessions: SessionStore,
    current_user: Option<String>,
}

impl App {
    fn new(config: Config) -> Result<Self> {
        let accounts = AccountStore::new(config.user_store_path());
        let sessions = SessionStore::new(config.session_path());
        let current_user = sessions
            .get_current_user()
            .context("failed to read session file")?;
        Ok(Self {
            config,
            accounts,
            sessions,
            current_user,
        })
    }

    fn require_user(&self) -> Result<&str> {
        self.current_user
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("not logged in — run `sukha login <username>` first"))
    }

    fn load_catalog(&self) -> Result<Vec<Pose>> {
        Ok(catalog::load(&self.config.catalog_path())?)
    }
}

/// Dispatch a parsed command line. The returned exit code is `FAILURE` for
/// rejected logins and registrations; hard errors bubble as `Err`.
pub fn run(cli: Cli) -> Result<ExitCode> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    let mut app = App::new(config)?;

    match cli.command {
        Command::Register {
            username,
            remember_me,
            password,
        } => register(&mut app, &username, remember_me, password),
        Command::Login { username, password } => login(&mut app, &username, password),
        Command::Logout => logout(&app),
        Command::Whoami => whoami(&app),
        Command::Today => today(&app),
        Command::Practice => practice(&app),
        Command::Pose { number } => pose_detail(&app, number),
        Command::SetNotificationTime { time } => set_notification_time(&app, &time),
        Command::Catalog => list_catalog(&app),
    }
}

// ── Account commands ────────────────────────────────────────────────

fn register(
    app: &mut App,
    username: &str,
    remember_me: bool,
    password: Option<String>,
) -> Result<ExitCode> {
    let password = match password {
        Some(password) => password,
        None => dialoguer::Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()
            .context("password prompt failed")?,
    };

    if app.accounts.register(username, &password, None, remember_me)? {
        app.sessions.set_current_user(username)?;
        app.current_user = Some(username.to_string());
        println!("Welcome, {username} — you are registered and logged in.");
        Ok(ExitCode::SUCCESS)
    } else {
        eprintln!("Username already exists. Please choose a different username.");
        Ok(ExitCode::FAILURE)
    }
}

fn login(app: &mut App, username: &str, password: Option<String>) -> Result<ExitCode> {
    let password = match password {
        Some(password) => password,
        None => dialoguer::Password::new()
            .with_prompt("Password")
            .interact()
            .context("password prompt failed")?,
    };

    if app.accounts.verify(username, &password)? {
        app.sessions.set_current_user(username)?;
        app.current_user = Some(username.to_string());
        println!("Welcome back, {username}.");
        Ok(ExitCode::SUCCESS)
    } else {
        // Unknown user and wrong password get the same message.
        eprintln!("Invalid username or password.");
        Ok(ExitCode::FAILURE)
    }
}

fn logout(app: &App) -> Result<ExitCode> {
    app.sessions.clear_current_user()?;
    println!("Logged out.");
    Ok(ExitCode::SUCCESS)
}

fn whoami(app: &App) -> Result<ExitCode> {
    match &app.current_user {
        Some(username) => println!("{username}"),
        None => println!("Not logged in."),
    }
    Ok(ExitCode::SUCCESS)
}

// ── Practice commands ───────────────────────────────────────────────

fn today(app: &App) -> Result<ExitCode> {
    let user = app.require_user()?;
    let poses = app.load_catalog()?;
    let mut cache = ScheduleCache::new();
    let picks = cache.today_or_compute(&poses)?;

    println!("Welcome, {user}");
    println!(
        "Today's practice ({}):",
        chrono::Local::now().format("%Y-%m-%d")
    );
    for (i, pose) in picks.iter().enumerate() {
        println!("  {}. {}", i + 1, pose.name);
    }
    Ok(ExitCode::SUCCESS)
}

fn practice(app: &App) -> Result<ExitCode> {
    app.require_user()?;
    let poses = app.load_catalog()?;
    let mut cache = ScheduleCache::new();
    let picks = cache.today_or_compute(&poses)?.to_vec();

    let mut progress = Progress::start();
    while let Some(index) = progress.index() {
        let pose = &picks[index];
        println!();
        println!("Pose {} of {}: {}", index + 1, POSES_PER_DAY, pose.name);
        println!("{}", pose.description);
        if let Some(link) = &pose.youtube_link {
            println!("Video: {link}");
        }

        let prompt = if index + 1 < POSES_PER_DAY {
            "Next pose?"
        } else {
            "Finish practice?"
        };
        let proceed = dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(true)
            .interact()
            .context("prompt failed")?;
        if !proceed {
            println!("Practice paused — see you later.");
            return Ok(ExitCode::SUCCESS);
        }
        progress = progress.advance()?;
    }

    println!();
    println!("Practice complete — well done!");
    Ok(ExitCode::SUCCESS)
}

fn pose_detail(app: &App, number: usize) -> Result<ExitCode> {
    app.require_user()?;
    let poses = app.load_catalog()?;
    let mut cache = ScheduleCache::new();
    let picks = cache.today_or_compute(&poses)?;

    let Some(pose) = number.checked_sub(1).and_then(|i| picks.get(i)) else {
        bail!(
            "no pose number {number} today — pick 1 through {}",
            picks.len()
        );
    };

    println!("{}", pose.name);
    println!("{}", pose.description);
    println!("Benefits: {}", pose.benefits);
    if let Some(link) = &pose.youtube_link {
        println!("Video: {link}");
    }
    Ok(ExitCode::SUCCESS)
}

fn set_notification_time(app: &App, time: &str) -> Result<ExitCode> {
    let user = app.require_user()?.to_string();
    let (hour, minute) = parse_reminder_time(time)?;
    app.accounts.update_notification_time(&user, hour, minute)?;
    println!("Notification time set to {hour}:{minute}.");
    Ok(ExitCode::SUCCESS)
}

fn list_catalog(app: &App) -> Result<ExitCode> {
    let poses = app.load_catalog()?;
    if poses.is_empty() {
        println!("The pose catalog is empty.");
        return Ok(ExitCode::SUCCESS);
    }
    for pose in &poses {
        println!("{} — {}", pose.name, pose.benefits);
    }
    Ok(ExitCode::SUCCESS)
}

// ── Helpers ─────────────────────────────────────────────────────────

/// Parse "H:M" (padded or not) into an (hour, minute) pair.
fn parse_reminder_time(raw: &str) -> Result<(u32, u32)> {
    let (h, m) = raw
        .split_once(':')
        .context("reminder time must look like H:M, e.g. 7:30")?;
    let hour: u32 = h.trim().parse().context("reminder hour is not a number")?;
    let minute: u32 = m.trim().parse().context("reminder minute is not a number")?;
    if chrono::NaiveTime::from_hms_opt(hour, minute, 0).is_none() {
        bail!("{raw} is not a valid time of day");
    }
    Ok((hour, minute))
}

// ── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn reminder_time_parses_padded_and_unpadded() {
        assert_eq!(parse_reminder_time("7:30").unwrap(), (7, 30));
        assert_eq!(parse_reminder_time("07:05").unwrap(), (7, 5));
        assert_eq!(parse_reminder_time("0:0").unwrap(), (0, 0));
        assert_eq!(parse_reminder_time("23:59").unwrap(), (23, 59));
    }

    #[test]
    fn reminder_time_rejects_nonsense() {
        assert!(parse_reminder_time("24:00").is_err());
        assert!(parse_reminder_time("7:60").is_err());
        assert!(parse_reminder_time("730").is_err());
        assert!(parse_reminder_time("seven:thirty").is_err());
    }
}
