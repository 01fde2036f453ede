use std::borrow::Cow;
use std::fmt;

/// Availability of a handle
#[derive(Debug)]
pub enum Availability {
    /// Default state
    NotChecked,
    /// Modern and legacy URLs all answered 404
    Available {
        /// URLs confirmed clear, in probe order
        urls: Vec<String>,
    },
    /// A URL answered 200, the handle is claimed
    Taken {
        /// URL that answered 200
        url: String,
        /// A legacy URL variant answered, not the modern handle URL
        legacy: bool,
    },
    /// Modern URL answered neither 200 nor 404 and no legacy URL answered 200
    Inconclusive {
        /// Status of the modern URL, 503 stands in for a connection failure
        status: u16,
    },
}

impl Default for Availability {
    fn default() -> Self {
        Availability::NotChecked
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Availability::NotChecked => write!(f, "NOT_CHECKED"),
            Availability::Available { .. } => write!(f, "FREE"),
            Availability::Taken { .. } => write!(f, "TAKEN"),
            Availability::Inconclusive { .. } => write!(f, "INCONCLUSIVE"),
        }
    }
}

/// Check result
#[derive(Debug, Default)]
pub struct Checked<'a> {
    /// Availability of the handle
    pub state: Availability,
    /// ASCII only?
    pub ascii: bool,
    /// When the handle got checked in seconds since Unix epoch
    pub checked_at: i64,
    /// Handle that got checked
    pub handle: Cow<'a, str>,
    /// Elapsed time in milliseconds
    pub elapsed: Option<u128>,
}

impl<'a> Checked<'a> {
    /// Whether the handle can be claimed right now
    ///
    /// ```
    /// # use hac::Checked;
    /// let result = Checked::default();
    /// assert!(!result.is_available());
    /// ```
    pub fn is_available(&self) -> bool {
        matches!(self.state, Availability::Available { .. })
    }

    /// Human-readable sentence of the availability state
    ///
    /// ```
    /// # use hac::Checked;
    /// let result = Checked::default();
    /// result.sentence();
    /// ```
    pub fn sentence(&self) -> String {
        let handle = &self.handle;
        match self.state {
            Availability::NotChecked => format!("availability of {handle} is unknown"),
            Availability::Available { ref urls } => {
                let urls = urls.join(", ");
                format!("{handle} is free, all URLs clear: {urls}")
            }
            Availability::Taken { ref url, legacy } => {
                if legacy {
                    format!("{handle} is taken by legacy URL {url}")
                } else {
                    format!("{handle} is taken ({url})")
                }
            }
            Availability::Inconclusive { status } => {
                format!("check of {handle} is inconclusive (modern URL answered {status})")
            }
        }
    }

    /// Icon of the availability state in ASCII or Unicode
    ///
    /// ```
    /// # use hac::Checked;
    /// let result = Checked::default();
    /// result.state_icon();
    /// ```
    pub fn state_icon(&self) -> String {
        let s = match self.state {
            Availability::Available { .. } => {
                if self.ascii {
                    "[v]"
                } else {
                    "\u{2705}"
                }
            }
            Availability::Taken { .. } => {
                if self.ascii {
                    "[x]"
                } else {
                    "\u{274c}"
                }
            }
            Availability::NotChecked | Availability::Inconclusive { .. } => {
                if self.ascii {
                    "[?]"
                } else {
                    "\u{2753}"
                }
            }
        };
        s.to_string()
    }
}

impl<'a> fmt::Display for Checked<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut s = String::with_capacity(100);

        s.push_str(&self.state_icon());

        s.push(' ');

        s.push_str(&self.sentence());

        if let Some(elapsed) = self.elapsed {
            s.push_str(&format!(", {elapsed}ms elapsed"));
        }

        write!(f, "{s}")
    }
}
