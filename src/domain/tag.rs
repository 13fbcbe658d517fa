use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static WEEKLY_TAG: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^w\.(\d{4})\.(\d{1,2})$").ok());

/// Parse the major number of a release tag name (e.g. "v13.0.1" -> 13)
///
/// Only the text between the leading `v` and the first `.` matters. Returns
/// `None` when the name is not a release tag or the major is not a positive
/// integer.
pub fn parse_release_major(name: &str) -> Option<u32> {
    let rest = name.strip_prefix('v')?;
    let major = rest.split('.').next().unwrap_or_default();

    if major.is_empty() || !major.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    match major.parse::<u32>() {
        Ok(0) | Err(_) => None,
        Ok(major) => Some(major),
    }
}

/// A weekly snapshot label, `w.YYYY.WW`
///
/// Ordering follows (year, week), which matches the lexicographic order of
/// the zero-padded canonical text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WeeklyLabel {
    pub year: u16,
    pub week: u8,
}

impl WeeklyLabel {
    pub fn new(year: u16, week: u8) -> Self {
        WeeklyLabel { year, week }
    }

    /// Parse a weekly tag name, accepting legacy unpadded weeks ("w.2022.1")
    pub fn parse(name: &str) -> Option<Self> {
        let captures = WEEKLY_TAG.as_ref()?.captures(name)?;

        let year = captures.get(1)?.as_str().parse::<u16>().ok()?;
        let week = captures.get(2)?.as_str().parse::<u8>().ok()?;

        Some(WeeklyLabel { year, week })
    }
}

impl fmt::Display for WeeklyLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "w.{:04}.{:02}", self.year, self.week)
    }
}
