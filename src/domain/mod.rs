//! Domain logic - tag grammars and version formatting, independent of git

pub mod tag;
pub mod version;

pub use tag::{parse_release_major, WeeklyLabel};
pub use version::{format_dev_version, CounterOverflow, DevVersion, MAX_COUNTER};
