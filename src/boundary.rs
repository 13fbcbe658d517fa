use std::cell::RefCell;
use std::fmt;

/// Warnings raised when a commit sits near the edges of the tagged history.
/// These are non-fatal: the analysis falls back to a default and carries on.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// The repository has no usable release tags
    NoReleaseTags,
    /// The commit is an ancestor of every release tag
    PredatesReleases { commit: String },
    /// No weekly tag on the commit's first-parent chain
    NoWeeklyAncestor { commit: String, distance: u32 },
    /// The commit counter does not fit its two-digit field
    CounterOverflow { counter: u32, emitted: u32 },
    /// The version could not be computed and a stored or fallback one was used
    VersionUnavailable { reason: String, used: String },
}

fn short_hash(hash: &str) -> &str {
    match hash.char_indices().nth(7) {
        Some((end, _)) => &hash[..end],
        None => hash,
    }
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoReleaseTags => {
                write!(f, "Could not find a release tag in the repository, using 0")
            }
            BoundaryWarning::PredatesReleases { commit } => write!(
                f,
                "Commit {} predates every release tag, using 0",
                short_hash(commit)
            ),
            BoundaryWarning::NoWeeklyAncestor { commit, distance } => write!(
                f,
                "No weekly tag found in the {} ancestors of commit {}",
                distance,
                short_hash(commit)
            ),
            BoundaryWarning::CounterOverflow { counter, emitted } => write!(
                f,
                "Commit counter {} exceeds two digits (emitted {})",
                counter, emitted
            ),
            BoundaryWarning::VersionUnavailable { reason, used } => {
                write!(f, "Could not determine version ({}), using {}", reason, used)
            }
        }
    }
}

/// Destination for boundary warnings produced during an analysis
pub trait WarningSink {
    fn warn(&self, warning: BoundaryWarning);
}

/// Forwards warnings to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl WarningSink for LogSink {
    fn warn(&self, warning: BoundaryWarning) {
        log::warn!("{}", warning);
    }
}

/// Discards every warning
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSink;

impl WarningSink for SilentSink {
    fn warn(&self, _warning: BoundaryWarning) {}
}

/// Keeps warnings in memory so callers can inspect them
#[derive(Debug, Default)]
pub struct RecordingSink {
    warnings: RefCell<Vec<BoundaryWarning>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warnings(&self) -> Vec<BoundaryWarning> {
        self.warnings.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.borrow().is_empty()
    }
}

impl WarningSink for RecordingSink {
    fn warn(&self, warning: BoundaryWarning) {
        self.warnings.borrow_mut().push(warning);
    }
}
