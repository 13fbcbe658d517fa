use crate::boundary::{BoundaryWarning, WarningSink};
use crate::domain::WeeklyLabel;
use crate::error::{DevVersionError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Largest counter that fits the two-digit field
pub const MAX_COUNTER: u32 = 99;

/// What to do when the commit counter needs more than two digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CounterOverflow {
    /// Emit the full counter, widening the field
    #[default]
    Widen,
    /// Emit 99
    Clamp,
    /// Refuse to produce a version
    Error,
}

impl FromStr for CounterOverflow {
    type Err = DevVersionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "widen" => Ok(CounterOverflow::Widen),
            "clamp" => Ok(CounterOverflow::Clamp),
            "error" => Ok(CounterOverflow::Error),
            other => Err(DevVersionError::config(format!(
                "Unknown counter overflow policy '{}' (expected widen, clamp or error)",
                other
            ))),
        }
    }
}

/// A development pre-release version, `<major>.0.0a<YYYY><WW><NN>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DevVersion {
    pub major: u32,
    pub year: u16,
    pub week: u8,
    pub counter: u32,
}

impl fmt::Display for DevVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.0.0a{:04}{:02}{:02}",
            self.major, self.year, self.week, self.counter
        )
    }
}

/// Combines the relevant release, nearest weekly and counter into a version.
///
/// The major component is `relevant_release + 1`; a missing weekly yields
/// year and week 0. Counters above [MAX_COUNTER] follow `policy`.
///
/// # Example
/// ```
/// # use dev_version::boundary::SilentSink;
/// # use dev_version::domain::{format_dev_version, CounterOverflow, WeeklyLabel};
/// let weekly = WeeklyLabel::new(2022, 4);
/// let version =
///     format_dev_version(1, Some(&weekly), 1, CounterOverflow::Widen, &SilentSink).unwrap();
/// assert_eq!(version.to_string(), "2.0.0a20220401");
/// ```
pub fn format_dev_version(
    relevant_release: u32,
    weekly: Option<&WeeklyLabel>,
    counter: u32,
    policy: CounterOverflow,
    sink: &dyn WarningSink,
) -> Result<DevVersion> {
    let (year, week) = weekly.map_or((0, 0), |label| (label.year, label.week));

    let counter = if counter > MAX_COUNTER {
        let emitted = match policy {
            CounterOverflow::Widen => counter,
            CounterOverflow::Clamp => MAX_COUNTER,
            CounterOverflow::Error => {
                return Err(DevVersionError::version(format!(
                    "Commit counter {} does not fit in two digits",
                    counter
                )))
            }
        };
        sink.warn(BoundaryWarning::CounterOverflow { counter, emitted });
        emitted
    } else {
        counter
    };

    Ok(DevVersion {
        major: relevant_release + 1,
        year,
        week,
        counter,
    })
}
