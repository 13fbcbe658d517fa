use crate::analyzer::ancestry::relevant_release;
use crate::analyzer::classifier::classify_tags;
use crate::analyzer::weekly::nearest_weekly;
use crate::boundary::{BoundaryWarning, WarningSink};
use crate::domain::{format_dev_version, CounterOverflow, DevVersion};
use crate::error::Result;
use crate::git::Repository;

/// Derives the development version of a commit from release and weekly tags
///
/// The version is `(NN+1).0.0aYYYYWWCC` where `NN` is the highest release
/// series whose tag does not contain the commit, `YYYY.WW` the closest weekly
/// tag along first parents and `CC` the number of commits from that weekly.
pub struct DevVersionAnalyzer {
    counter_overflow: CounterOverflow,
}

impl DevVersionAnalyzer {
    /// Create a new analyzer with the given counter overflow policy
    pub fn new(counter_overflow: CounterOverflow) -> Self {
        DevVersionAnalyzer { counter_overflow }
    }

    /// Compute the development version of `target` in `repo`
    pub fn analyze_repository<R: Repository + ?Sized>(
        &self,
        repo: &R,
        target: &str,
        sink: &dyn WarningSink,
    ) -> Result<DevVersion> {
        let index = classify_tags(&repo.list_tags()?);
        let commit = repo.resolve_commit(target)?;

        let release = relevant_release(repo, &commit, &index.releases, sink)?;

        let weekly = nearest_weekly(repo, &commit, &index.weeklies)?;
        if weekly.label.is_none() {
            sink.warn(BoundaryWarning::NoWeeklyAncestor {
                commit: commit.to_string(),
                distance: weekly.distance,
            });
        }

        let version = format_dev_version(
            release,
            weekly.label.as_ref(),
            weekly.distance,
            self.counter_overflow,
            sink,
        )?;

        log::debug!(
            "Using version {} for commit {} derived from weekly {}",
            version,
            commit,
            weekly
                .label
                .map(|label| label.to_string())
                .unwrap_or_default()
        );

        Ok(version)
    }
}

impl Default for DevVersionAnalyzer {
    fn default() -> Self {
        Self::new(CounterOverflow::default())
    }
}
