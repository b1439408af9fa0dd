//! Orderings applied to level tables and the file-name suffix each one owns.
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::ReportError;
use crate::level::Level;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortingCode {
    /// Featured score, highest first
    #[default]
    Default,
    DescendingLikes,
    AscendingLikes,
    DescendingDownloads,
    AscendingDownloads,
    /// Description length, longest first
    LongestDescription,
}

impl SortingCode {
    pub const ALL: [Self; 6] = [
        Self::Default,
        Self::DescendingLikes,
        Self::AscendingLikes,
        Self::DescendingDownloads,
        Self::AscendingDownloads,
        Self::LongestDescription,
    ];

    /// Suffix appended verbatim to every list file written with this ordering.
    #[must_use]
    pub const fn file_suffix(self) -> &'static str {
        match self {
            Self::Default => " list.md",
            Self::DescendingLikes => " list with descending likes.md",
            Self::AscendingLikes => " list with ascending likes.md",
            Self::DescendingDownloads => " list with descending downloads.md",
            Self::AscendingDownloads => " list with ascending downloads.md",
            Self::LongestDescription => " list with longest descriptions.md",
        }
    }

    /// Name accepted on the command line and in configuration files.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::DescendingLikes => "descending-likes",
            Self::AscendingLikes => "ascending-likes",
            Self::DescendingDownloads => "descending-downloads",
            Self::AscendingDownloads => "ascending-downloads",
            Self::LongestDescription => "longest-description",
        }
    }

    /// Total order over levels. Every code falls back to ascending id so equal
    /// keys never depend on input order.
    #[must_use]
    pub fn compare(self, a: &Level, b: &Level) -> Ordering {
        let primary = match self {
            Self::Default => b.featured_score.cmp(&a.featured_score),
            Self::DescendingLikes => b.likes.cmp(&a.likes),
            Self::AscendingLikes => a.likes.cmp(&b.likes),
            Self::DescendingDownloads => b.downloads.cmp(&a.downloads),
            Self::AscendingDownloads => a.downloads.cmp(&b.downloads),
            Self::LongestDescription => b.description_len().cmp(&a.description_len()),
        };
        primary.then_with(|| a.id.cmp(&b.id))
    }

    /// Sort in place; the sort is stable and the comparator total.
    pub fn sort(self, levels: &mut [&Level]) {
        levels.sort_by(|a, b| self.compare(a, b));
    }
}

impl fmt::Display for SortingCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SortingCode {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|code| code.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ReportError::UnknownSortingCode(wanted.to_string()))
    }
}
