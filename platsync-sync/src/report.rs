//! Push and pull results.

use platsync_types::{Point2, SectionKey, SketchFrame};
use serde::Serialize;
use std::fmt;

/// Result of a push.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PushReport {
    pub section: SectionKey,
    /// Local points handed in.
    pub submitted: usize,
    /// Points written to the master store.
    pub appended: usize,
    /// Points discarded because they or their mapped position were not finite.
    pub dropped: usize,
}

impl PushReport {
    /// True when nothing reached the store. Not an error.
    #[must_use]
    pub fn is_nothing_to_push(&self) -> bool {
        self.appended == 0
    }
}

impl fmt::Display for PushReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nothing_to_push() {
            write!(f, "Nothing to push for {}", self.section)?;
        } else {
            write!(
                f,
                "Pushed {} residence point(s) to master for {}",
                self.appended, self.section
            )?;
        }
        if self.dropped > 0 {
            write!(f, " ({} invalid point(s) skipped)", self.dropped)?;
        }
        Ok(())
    }
}

/// Distinguishes the empty pull results from each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PullOutcome {
    /// No master store exists yet.
    NoMaster,
    /// The store exists but no point fell inside the section.
    NoMatches,
    /// This many points were mapped into the sketch.
    Placed(usize),
}

/// Result of a pull.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PullReport {
    pub section: SectionKey,
    /// Matching master points, mapped into the sketch frame.
    pub points: Vec<Point2<SketchFrame>>,
    /// Whether the master store existed when the pull started.
    pub store_existed: bool,
    /// Total points scanned in the store.
    pub scanned: usize,
}

impl PullReport {
    #[must_use]
    pub fn outcome(&self) -> PullOutcome {
        match (self.store_existed, self.points.len()) {
            (false, _) => PullOutcome::NoMaster,
            (true, 0) => PullOutcome::NoMatches,
            (true, n) => PullOutcome::Placed(n),
        }
    }
}

impl fmt::Display for PullReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome() {
            PullOutcome::NoMaster => {
                write!(f, "No master store found, nothing to pull for {}", self.section)
            }
            PullOutcome::NoMatches => write!(
                f,
                "Master has {} point(s), none inside {}",
                self.scanned, self.section
            ),
            PullOutcome::Placed(n) => write!(
                f,
                "Placed {n} of {} master point(s) for {}",
                self.scanned, self.section
            ),
        }
    }
}
