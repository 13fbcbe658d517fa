use crate::domain::{parse_release_major, WeeklyLabel};
use crate::git::{CommitId, TagRef};
use std::collections::{BTreeMap, HashMap};

/// Release major number -> tagged commit
pub type ReleaseMap = BTreeMap<u32, CommitId>;

/// Commit -> newest weekly label on that commit
pub type WeeklyMap = HashMap<CommitId, WeeklyLabel>;

/// Release and weekly tags of a repository, keyed for the two resolvers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagIndex {
    pub releases: ReleaseMap,
    pub weeklies: WeeklyMap,
}

/// Partition tags into release and weekly maps
///
/// Lightweight tags and names outside the `v<major>...` and `w.YYYY.WW`
/// grammars are ignored. When two release tags share a major, the one listed
/// later wins. When two weeklies tag one commit, the newer label wins.
pub fn classify_tags(tags: &[TagRef]) -> TagIndex {
    let mut index = TagIndex::default();

    for tag in tags {
        if tag.name.starts_with('v') {
            if !tag.annotated {
                continue;
            }
            if let Some(major) = parse_release_major(&tag.name) {
                index.releases.insert(major, tag.target.clone());
            }
        } else if tag.name.starts_with("w.") {
            if !tag.annotated {
                continue;
            }
            let Some(label) = WeeklyLabel::parse(&tag.name) else {
                log::debug!("Ignoring malformed weekly tag '{}'", tag.name);
                continue;
            };

            let newer_stored = index
                .weeklies
                .get(&tag.target)
                .is_some_and(|previous| *previous > label);
            if !newer_stored {
                index.weeklies.insert(tag.target.clone(), label);
            }
        }
    }

    index
}
