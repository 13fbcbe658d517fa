use crate::analyzer::classifier::ReleaseMap;
use crate::boundary::{BoundaryWarning, WarningSink};
use crate::error::Result;
use crate::git::{CommitId, Repository};

/// Find the release series a commit is a pre-release of
///
/// Majors are scanned from highest to lowest. The first release that does not
/// contain the commit in its history is the relevant one, so the commit
/// belongs to the next series. A commit that is itself the release is counted
/// as a pre-release of the previous series. When every release contains the
/// commit (or there are none) the result is 0 and a warning is reported.
pub fn relevant_release<R: Repository + ?Sized>(
    repo: &R,
    commit: &CommitId,
    releases: &ReleaseMap,
    sink: &dyn WarningSink,
) -> Result<u32> {
    for (&major, release) in releases.iter().rev() {
        if !repo.is_ancestor(commit, release)? {
            return Ok(major);
        }
        if commit == release {
            return Ok(major.saturating_sub(1));
        }
    }

    if releases.is_empty() {
        sink.warn(BoundaryWarning::NoReleaseTags);
    } else {
        sink.warn(BoundaryWarning::PredatesReleases {
            commit: commit.to_string(),
        });
    }

    Ok(0)
}
