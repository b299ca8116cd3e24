//! Public Land Survey section identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies the survey section an operation works on.
///
/// Used as a label in logs and summaries only. The master store is not
/// partitioned by section.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SectionKey {
    section: String,
    township: String,
    range: String,
    meridian: String,
}

impl SectionKey {
    #[must_use]
    pub fn new(
        section: impl Into<String>,
        township: impl Into<String>,
        range: impl Into<String>,
        meridian: impl Into<String>,
    ) -> Self {
        Self {
            section: section.into(),
            township: township.into(),
            range: range.into(),
            meridian: meridian.into(),
        }
    }

    #[must_use]
    pub fn section(&self) -> &str {
        &self.section
    }

    #[must_use]
    pub fn township(&self) -> &str {
        &self.township
    }

    #[must_use]
    pub fn range(&self) -> &str {
        &self.range
    }

    #[must_use]
    pub fn meridian(&self) -> &str {
        &self.meridian
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sec {} T{} R{} {}",
            self.section, self.township, self.range, self.meridian
        )
    }
}
