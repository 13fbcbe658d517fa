use crate::analyzer::classifier::WeeklyMap;
use crate::domain::WeeklyLabel;
use crate::error::Result;
use crate::git::{CommitId, Repository};

/// Nearest weekly tag on a commit's first-parent chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeeklyAncestor {
    /// `None` when the chain ends without reaching a weekly
    pub label: Option<WeeklyLabel>,
    /// First-parent steps taken from the starting commit
    pub distance: u32,
}

/// Walk first parents from `commit` until a weekly-tagged commit is found
///
/// Merge parents other than the first are never followed. The walk is a plain
/// loop so history depth is bounded only by memory for the current id.
pub fn nearest_weekly<R: Repository + ?Sized>(
    repo: &R,
    commit: &CommitId,
    weeklies: &WeeklyMap,
) -> Result<WeeklyAncestor> {
    let mut current = commit.clone();
    let mut distance = 0;

    loop {
        if let Some(label) = weeklies.get(&current) {
            return Ok(WeeklyAncestor {
                label: Some(*label),
                distance,
            });
        }

        match repo.parents(&current)?.into_iter().next() {
            Some(parent) => {
                current = parent;
                distance += 1;
            }
            None => {
                return Ok(WeeklyAncestor {
                    label: None,
                    distance,
                })
            }
        }
    }
}
