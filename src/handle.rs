use std::borrow::Cow;
use std::fmt;

/// Platform handle, stored with its leading marker
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Handle(String);

impl Handle {
    /// Marker character prefixing modern handles
    pub const MARKER: char = '@';

    /// Create a handle, prepending the marker when absent
    ///
    /// ```
    /// # use hac::Handle;
    /// assert_eq!(Handle::new("gadget"), Handle::new("@gadget"));
    /// ```
    pub fn new<'a, T>(raw: T) -> Self
    where
        T: Into<Cow<'a, str>>,
    {
        let raw = raw.into();
        if raw.starts_with(Self::MARKER) {
            Handle(raw.into_owned())
        } else {
            Handle(format!("{}{raw}", Self::MARKER))
        }
    }

    /// Handle with its marker e.g. `@gadget`
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Handle without its marker e.g. `gadget`, as used in legacy URLs and log file names
    pub fn name(&self) -> &str {
        self.0.trim_start_matches(Self::MARKER)
    }

    /// Modern handle URL e.g. `https://www.youtube.com/@gadget`
    pub fn modern_url<T>(&self, platform: T) -> String
    where
        T: AsRef<str>,
    {
        format!("{}/{}", platform.as_ref(), self.0)
    }

    /// Legacy URL variants, in the fixed order they are probed
    pub fn legacy_urls<T>(&self, platform: T) -> [String; 2]
    where
        T: AsRef<str>,
    {
        let platform = platform.as_ref();
        let name = self.name();
        [
            format!("{platform}/user/{name}"),
            format!("{platform}/c/{name}"),
        ]
    }
}

impl From<&str> for Handle {
    fn from(raw: &str) -> Self {
        Handle::new(raw)
    }
}

impl From<String> for Handle {
    fn from(raw: String) -> Self {
        Handle::new(raw)
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn t_marker_normalized() {
        assert_eq!("@gadget", Handle::new("gadget").as_str());
        assert_eq!("@gadget", Handle::new("@gadget").as_str());
        assert_eq!("@gadget", Handle::new("gadget".to_string()).as_str());
    }

    #[test]
    fn t_name() {
        assert_eq!("gadget", Handle::new("@gadget").name());
        assert_eq!("gadget", Handle::new("gadget").name());
    }

    #[test]
    fn t_modern_url() {
        let handle = Handle::new("gadget");
        assert_eq!(
            "https://www.youtube.com/@gadget",
            handle.modern_url("https://www.youtube.com")
        );
    }

    #[test]
    fn t_legacy_urls() {
        let handle = Handle::new("gadget");
        let [user, c] = handle.legacy_urls("https://www.youtube.com");
        assert_eq!("https://www.youtube.com/user/gadget", user);
        assert_eq!("https://www.youtube.com/c/gadget", c);
    }
}
