use std::fs::OpenOptions;
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::checked::Checked;
use crate::handle::Handle;

/// Append-only log of check results for one handle
#[derive(Debug)]
pub struct Journal {
    path: PathBuf,
}

impl Journal {
    /// Journal of a handle, stored as `handle_check_<name>.log` under `dir`
    ///
    /// ```
    /// # use hac::{Handle, Journal};
    /// let handle = Handle::new("gadget");
    /// let journal = Journal::new(".", &handle);
    /// assert!(journal.path().ends_with("handle_check_gadget.log"));
    /// ```
    pub fn new<P>(dir: P, handle: &Handle) -> Self
    where
        P: AsRef<Path>,
    {
        let path = dir
            .as_ref()
            .join(format!("handle_check_{}.log", handle.name()));
        Journal { path }
    }

    /// Path of the log file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one check result, one line per check
    ///
    /// The file is created on first write and never truncated.
    pub fn append(&self, checked: &Checked<'_>) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        writeln!(
            file,
            "[{timestamp}] Checking {} - Result: {}",
            checked.handle,
            checked.sentence()
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use crate::checked::Availability;

    fn build_checked<'a>(state: Availability) -> Checked<'a> {
        Checked {
            state,
            handle: "@gadget".into(),
            ..Default::default()
        }
    }

    #[test]
    fn t_path_from_handle() {
        let handle = Handle::new("@gadget");
        let journal = Journal::new("/tmp", &handle);
        assert_eq!(Path::new("/tmp/handle_check_gadget.log"), journal.path());
    }

    #[test]
    fn t_append() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let handle = Handle::new("gadget");
        let journal = Journal::new(dir.path(), &handle);

        let states = [
            Availability::Taken {
                url: "https://www.youtube.com/@gadget".into(),
                legacy: false,
            },
            Availability::Inconclusive { status: 503 },
            Availability::Available { urls: vec![] },
        ];
        for state in states {
            journal.append(&build_checked(state))?;
        }

        let content = std::fs::read_to_string(journal.path())?;
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(3, lines.len());
        for line in &lines {
            assert!(line.starts_with('['));
            assert!(line.contains("] Checking @gadget - Result: "));
        }
        assert!(lines[0].contains("is taken"));
        assert!(lines[1].contains("is inconclusive"));
        assert!(lines[2].contains("is free"));
        Ok(())
    }

    #[test]
    fn t_append_never_truncates() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let handle = Handle::new("gadget");
        let journal = Journal::new(dir.path(), &handle);

        journal.append(&build_checked(Availability::Inconclusive { status: 429 }))?;
        journal.append(&build_checked(Availability::Inconclusive { status: 429 }))?;

        let content = std::fs::read_to_string(journal.path())?;
        assert_eq!(2, content.lines().count());
        Ok(())
    }
}
