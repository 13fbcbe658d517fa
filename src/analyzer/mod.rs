//! Development version inference
//!
//! - `classifier` - splits tags into release and weekly maps
//! - `ancestry` - picks the release series a commit leads to
//! - `weekly` - finds the nearest weekly along first parents
//! - `dev_version` - runs the steps above and formats the result

pub mod ancestry;
pub mod classifier;
pub mod dev_version;
pub mod weekly;

pub use ancestry::relevant_release;
pub use classifier::{classify_tags, ReleaseMap, TagIndex, WeeklyMap};
pub use dev_version::DevVersionAnalyzer;
pub use weekly::{nearest_weekly, WeeklyAncestor};

use crate::boundary::{LogSink, WarningSink};
use crate::domain::{CounterOverflow, DevVersion};
use crate::error::Result;
use std::path::Path;

/// Compute the development version of `target` in the repository at `repo_dir`
///
/// Warnings go to the `log` facade and counters above 99 are widened.
pub fn compute_dev_version(repo_dir: impl AsRef<Path>, target: &str) -> Result<DevVersion> {
    compute_dev_version_with(repo_dir, target, CounterOverflow::default(), &LogSink)
}

/// Compute the development version with an explicit overflow policy and sink
#[cfg(feature = "git")]
pub fn compute_dev_version_with(
    repo_dir: impl AsRef<Path>,
    target: &str,
    counter_overflow: CounterOverflow,
    sink: &dyn WarningSink,
) -> Result<DevVersion> {
    let repo = crate::git::Git2Repository::open(repo_dir)?;
    DevVersionAnalyzer::new(counter_overflow).analyze_repository(&repo, target, sink)
}

/// Compute the development version with an explicit overflow policy and sink
#[cfg(not(feature = "git"))]
pub fn compute_dev_version_with(
    _repo_dir: impl AsRef<Path>,
    _target: &str,
    _counter_overflow: CounterOverflow,
    _sink: &dyn WarningSink,
) -> Result<DevVersion> {
    Err(crate::error::DevVersionError::config(
        "no repository provider available: built without the `git` feature",
    ))
}
