#![deny(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! Handle availability check for YouTube

use std::path::PathBuf;
use std::str::FromStr as _;
use std::thread;
use std::time::Duration;

use chrono::Utc;
use clap::{Parser, Subcommand};
use cron::Schedule;
use log::{debug, warn};

use hac::{send_notification, Checked, Handle, Journal, Prober};

const NOTIFICATION_TITLE: &str = "Handle is FREE!";
const NOTIFICATION_SECS: u32 = 10;

#[derive(Debug, Default, Parser)]
#[command(author, about, version)]
struct Opts {
    /// ASCII
    #[arg(long)]
    ascii: bool,
    /// Verbose mode
    #[arg(short, long)]
    verbose: bool,
    /// Base URL of the platform
    #[arg(long, default_value = "https://www.youtube.com", env = "PLATFORM_URL")]
    platform: String,
    /// Timeout of one probe in seconds
    #[arg(long, default_value = "15")]
    timeout: u64,
    /// Directory of check logs
    #[arg(long, default_value = ".", env = "LOG_DIR")]
    log_dir: PathBuf,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check handle(s) immediately
    Check {
        /// Send desktop notification when a handle is free
        #[arg(long)]
        notify: bool,
        /// One or many handles to check
        #[arg()]
        handles: Vec<String>,
    },
    /// Daemon, re-check on a cron schedule until a handle frees up
    Daemon {
        /// Cron
        #[arg(short, long, default_value = "0 0 0 * * *")]
        cron: String,
        /// One or many handles to check
        #[arg(env = "HANDLES")]
        handles: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let opts: Opts = Opts::parse();
    if let Some(Commands::Check { handles, notify }) = &opts.command {
        check_command(&opts, handles, *notify)?;
    }
    if let Some(Commands::Daemon { cron, handles }) = &opts.command {
        daemon_command(&opts, cron, handles)?;
    }
    Ok(())
}

fn build_prober(opts: &Opts) -> Prober {
    let mut prober = Prober::default();
    prober.platform = opts.platform.clone();
    prober.timeout = Duration::from_secs(opts.timeout);
    prober.ascii = opts.ascii;
    prober.elapsed = opts.verbose;
    prober
}

fn check_command<T>(opts: &Opts, handles: &[T], should_notify: bool) -> anyhow::Result<()>
where
    T: AsRef<str>,
{
    let prober = build_prober(opts);
    let handles: Vec<Handle> = handles.iter().map(|h| Handle::new(h.as_ref())).collect();
    for handle in &handles {
        let checked = prober.check_one(handle);
        println!("{checked}");
        Journal::new(&opts.log_dir, handle).append(&checked)?;
        if should_notify && checked.is_available() {
            notify(&checked);
        }
    }
    Ok(())
}

fn daemon_command<T, U>(opts: &Opts, cron: T, handles: &[U]) -> anyhow::Result<()>
where
    T: AsRef<str>,
    U: AsRef<str>,
{
    let handles: Vec<Handle> = handles.iter().map(|h| Handle::new(h.as_ref())).collect();
    let schedule = Schedule::from_str(cron.as_ref())?;
    for next in schedule.upcoming(Utc) {
        debug!("check handles {handles:?} at {next:?}");
        loop {
            if Utc::now().timestamp() >= next.timestamp() {
                break;
            }
            thread::sleep(Duration::from_millis(999));
        }

        let prober = build_prober(opts);
        let mut freed = false;
        for handle in &handles {
            let checked = prober.check_one(handle);
            println!("{checked}");
            Journal::new(&opts.log_dir, handle).append(&checked)?;
            if checked.is_available() {
                notify(&checked);
                freed = true;
            }
        }
        if freed {
            return Ok(());
        }
    }
    Ok(())
}

fn notify(checked: &Checked<'_>) {
    debug!("send desktop notification for {}", checked.handle);
    if let Err(e) = send_notification(NOTIFICATION_TITLE, &checked.sentence(), NOTIFICATION_SECS) {
        warn!("failed to send desktop notification: {e}");
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn build_opts() -> Opts {
        let mut opts = Opts::default();
        opts.platform = "https://www.youtube.com".to_string();
        opts.timeout = 15;
        opts.log_dir = PathBuf::from(".");
        opts
    }

    #[test]
    fn t_build_prober() {
        let mut opts = build_opts();
        opts.verbose = true;
        let prober = build_prober(&opts);
        assert_eq!("https://www.youtube.com", prober.platform);
        assert_eq!(Duration::from_secs(15), prober.timeout);
        assert!(!prober.ascii);
        assert!(prober.elapsed);
    }

    #[test]
    fn t_default_cron() {
        Schedule::from_str("0 0 0 * * *").unwrap();
    }
}
