use std::time::{Duration, Instant};

use chrono::{DateTime, SubsecRound as _, Utc};
use log::debug;

use crate::checked::{Availability, Checked};
use crate::handle::Handle;

/// Base URL of the platform
pub const DEFAULT_PLATFORM: &str = "https://www.youtube.com";

/// Sentinel status standing in for a connection-level failure
pub const CONNECTION_FAILED: u16 = 503;

// Edge servers may reject default client signatures
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Prober for handle availability
#[derive(Debug)]
pub struct Prober {
    checked_at: DateTime<Utc>,
    /// Base URL of the platform
    pub platform: String,
    /// Timeout of one probe
    pub timeout: Duration,
    /// ASCII only?
    pub ascii: bool,
    /// Show elapsed time in milliseconds?
    pub elapsed: bool,
}

impl Default for Prober {
    fn default() -> Prober {
        Prober {
            checked_at: Utc::now().round_subsecs(0),
            platform: DEFAULT_PLATFORM.to_string(),
            timeout: Duration::from_secs(15),
            ascii: false,
            elapsed: false,
        }
    }
}

impl Prober {
    /// Status of one URL via a HEAD probe
    ///
    /// Transport failures (timeout, DNS, refused connection, TLS) map to
    /// [`CONNECTION_FAILED`] instead of propagating.
    ///
    /// ```no_run
    /// # use hac::Prober;
    /// let prober = Prober::default();
    /// prober.check_status("https://www.youtube.com/@gadget");
    /// ```
    pub fn check_status<T>(&self, url: T) -> u16
    where
        T: AsRef<str>,
    {
        let url = url.as_ref();
        let agent = ureq::AgentBuilder::new().timeout(self.timeout).build();
        match agent.head(url).set("User-Agent", USER_AGENT).call() {
            Ok(res) => res.status(),
            Err(ureq::Error::Status(code, _)) => code,
            Err(e) => {
                debug!("connection failure on {url}: {e}");
                CONNECTION_FAILED
            }
        }
    }

    /// Check availability of one handle
    ///
    /// Probes the modern handle URL first, then the legacy variants, one at a
    /// time. Any 200 is authoritative and short-circuits the remaining probes.
    ///
    /// ```no_run
    /// # use hac::{Handle, Prober};
    /// let prober = Prober::default();
    /// let handle = Handle::new("gadget");
    /// prober.check_one(&handle);
    /// ```
    pub fn check_one<'a>(&self, handle: &'a Handle) -> Checked<'a> {
        let start = Instant::now();
        let state = self.classify(handle);
        let elapsed = start.elapsed();
        Checked {
            state,
            ascii: self.ascii,
            checked_at: self.checked_at.timestamp(),
            handle: handle.as_str().into(),
            elapsed: if self.elapsed {
                Some(elapsed.as_millis())
            } else {
                None
            },
        }
    }

    /// Check availability of multiple handles, in order, one at a time
    ///
    /// ```no_run
    /// # use hac::{Handle, Prober};
    /// let prober = Prober::default();
    /// let handles = vec![Handle::new("gadget"), Handle::new("widget")];
    /// prober.check_many(&handles);
    /// ```
    pub fn check_many<'a>(&self, handles: &'a [Handle]) -> Vec<Checked<'a>> {
        handles.iter().map(|h| self.check_one(h)).collect()
    }

    fn classify(&self, handle: &Handle) -> Availability {
        let modern = handle.modern_url(&self.platform);
        let status = self.check_status(&modern);
        debug!("{modern} answered {status}");
        if status == 200 {
            return Availability::Taken {
                url: modern,
                legacy: false,
            };
        }

        // A 200 on any legacy URL is authoritative even when the modern probe failed
        let legacy_urls = handle.legacy_urls(&self.platform);
        for url in &legacy_urls {
            let legacy_status = self.check_status(url);
            debug!("{url} answered {legacy_status}");
            if legacy_status == 200 {
                return Availability::Taken {
                    url: url.clone(),
                    legacy: true,
                };
            }
        }

        if status == 404 {
            let mut urls = vec![modern];
            urls.extend(legacy_urls);
            Availability::Available { urls }
        } else {
            Availability::Inconclusive { status }
        }
    }
}
