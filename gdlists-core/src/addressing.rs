//! Destination naming for generated lists.
//!
//! Paths are `<base>/<tier folder>/<prefix><suffix>`, with the tier folder
//! omitted for tier 0. Prefixes come from [`ReportKind::prefix`] and the
//! auxiliary run-wide names; suffixes from [`SortingCode::file_suffix`].
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::constants::{
    AUDIO_INFO_EXPANDED_SUFFIX, AUDIO_INFO_SUFFIX, BUILDERS_INFO_SUFFIX, TOP_DEMONS_LABEL,
};
use crate::difficulty::Tier;
use crate::error::{ReportError, Result};
use crate::report::{ReportArtifact, RunMode, RunReport, Slot};
use crate::sorting::SortingCode;

/// The three top-level runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportKind {
    Featured,
    Epic,
    TopDemons,
}

impl ReportKind {
    /// Default run order: featured, top demons, epic.
    pub const ALL: [Self; 3] = [Self::Featured, Self::TopDemons, Self::Epic];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::Epic => "epic",
            Self::TopDemons => "top-demons",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Featured => RunMode::Featured.label(),
            Self::Epic => RunMode::Epic.label(),
            Self::TopDemons => TOP_DEMONS_LABEL,
        }
    }

    #[must_use]
    pub const fn run_mode(self) -> Option<RunMode> {
        match self {
            Self::Featured => Some(RunMode::Featured),
            Self::Epic => Some(RunMode::Epic),
            Self::TopDemons => None,
        }
    }

    /// File-name prefix for a list of this kind in `tier`'s folder.
    #[must_use]
    pub fn prefix(self, tier: Tier) -> String {
        if tier == Tier::Unclassified {
            return self.label().to_string();
        }
        let run = match self {
            Self::Featured => RunMode::Featured.tier_label().to_string(),
            Self::Epic => RunMode::Epic.tier_label().to_string(),
            Self::TopDemons => TOP_DEMONS_LABEL.to_lowercase(),
        };
        format!("{} {run}", tier.folder_label())
    }
}

impl From<RunMode> for ReportKind {
    fn from(mode: RunMode) -> Self {
        match mode {
            RunMode::Featured => Self::Featured,
            RunMode::Epic => Self::Epic,
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ReportKind {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ReportError::UnknownReportKind(wanted.to_string()))
    }
}

/// Compute a destination without touching the filesystem.
#[must_use]
pub fn destination_path(
    base_dir: &Path,
    tier: Tier,
    prefix: &str,
    sorting: SortingCode,
) -> PathBuf {
    let mut path = base_dir.to_path_buf();
    let folder = tier.folder_label();
    if !folder.is_empty() {
        path.push(folder);
    }
    path.push(format!("{prefix}{}", sorting.file_suffix()));
    path
}

/// Compute a destination and create its directories.
///
/// Directory creation is idempotent; a directory created concurrently by
/// another run is not an error.
///
/// # Errors
///
/// Returns an error if a missing directory cannot be created.
pub fn resolve_destination(
    base_dir: &Path,
    tier: Tier,
    prefix: &str,
    sorting: SortingCode,
) -> Result<PathBuf> {
    let path = destination_path(base_dir, tier, prefix, sorting);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(path)
}

/// One artifact paired with its addressing parameters.
#[derive(Debug, Clone)]
pub struct PlannedWrite<'a> {
    pub tier: Tier,
    pub prefix: String,
    pub sorting: SortingCode,
    pub artifact: &'a ReportArtifact,
}

impl PlannedWrite<'_> {
    #[must_use]
    pub const fn slot(&self) -> Slot {
        self.artifact.slot
    }

    #[must_use]
    pub fn path(&self, base_dir: &Path) -> PathBuf {
        destination_path(base_dir, self.tier, &self.prefix, self.sorting)
    }

    /// # Errors
    ///
    /// Returns an error if the destination directories cannot be created.
    pub fn resolve(&self, base_dir: &Path) -> Result<PathBuf> {
        resolve_destination(base_dir, self.tier, &self.prefix, self.sorting)
    }
}

/// Address every artifact of a featured or epic run.
///
/// When the run itself is sorted by description length, the all-levels list
/// would land on the longest-description file, so only the latter is kept.
#[must_use]
pub fn plan_run(report: &RunReport) -> Vec<PlannedWrite<'_>> {
    let kind = ReportKind::from(report.mode);
    let run_wide = kind.prefix(Tier::Unclassified);
    let mut plan = Vec::with_capacity(RunReport::ARTIFACT_COUNT);

    for (tier, artifact) in Tier::REAL.iter().zip(report.tiers.iter()) {
        plan.push(PlannedWrite {
            tier: *tier,
            prefix: kind.prefix(*tier),
            sorting: report.sorting,
            artifact,
        });
    }

    if report.sorting == SortingCode::LongestDescription {
        log::debug!("{kind}: all-levels list superseded by the longest-description list");
    } else {
        plan.push(PlannedWrite {
            tier: Tier::Unclassified,
            prefix: run_wide.clone(),
            sorting: report.sorting,
            artifact: &report.all,
        });
    }

    let auxiliary = [
        (run_wide.clone(), SortingCode::LongestDescription, &report.longest_descriptions),
        (format!("{run_wide} {AUDIO_INFO_SUFFIX}"), SortingCode::Default, &report.audio),
        (
            format!("{run_wide} {AUDIO_INFO_EXPANDED_SUFFIX}"),
            SortingCode::Default,
            &report.audio_expanded,
        ),
        (format!("{run_wide} {BUILDERS_INFO_SUFFIX}"), SortingCode::Default, &report.builders),
    ];
    for (prefix, sorting, artifact) in auxiliary {
        plan.push(PlannedWrite {
            tier: Tier::Unclassified,
            prefix,
            sorting,
            artifact,
        });
    }
    plan
}

#[must_use]
pub fn plan_top_demons(artifact: &ReportArtifact) -> PlannedWrite<'_> {
    PlannedWrite {
        tier: Tier::Unclassified,
        prefix: ReportKind::TopDemons.prefix(Tier::Unclassified),
        sorting: SortingCode::Default,
        artifact,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::difficulty::{DemonDifficulty, Difficulty};
    use crate::level::Level;
    use crate::report::{generate_run, generate_top_demons};
    use std::collections::HashSet;

    fn base() -> PathBuf {
        PathBuf::from("Statistics")
    }

    fn sample_levels() -> Vec<Level> {
        vec![
            Level::builder(1, "A", "x", Difficulty::Demon(DemonDifficulty::Extreme))
                .featured_score(3)
                .epic(true)
                .build(),
            Level::builder(2, "B", "y", Difficulty::Easy).featured_score(1).build(),
        ]
    }

    #[test]
    fn tier_zero_writes_to_base_directory() {
        let path = destination_path(&base(), Tier::Unclassified, "Featured", SortingCode::Default);
        assert_eq!(path, PathBuf::from("Statistics/Featured list.md"));
    }

    #[test]
    fn tier_folder_and_suffix_are_appended() {
        let prefix = ReportKind::Epic.prefix(Tier::ExtremeDemon);
        let path =
            destination_path(&base(), Tier::ExtremeDemon, &prefix, SortingCode::AscendingLikes);
        let expected = "Statistics/Extreme demon/Extreme demon epic list with ascending likes.md";
        assert_eq!(path, PathBuf::from(expected));
    }

    #[test]
    fn destination_is_injective_over_tier_kind_and_sorting() {
        let mut seen = HashSet::new();
        for tier in Tier::ALL {
            for kind in ReportKind::ALL {
                for sorting in SortingCode::ALL {
                    let path = destination_path(&base(), tier, &kind.prefix(tier), sorting);
                    assert!(seen.insert(path.clone()), "collision at {}", path.display());
                }
            }
        }
        assert_eq!(seen.len(), 12 * 3 * 6);
    }

    #[test]
    fn run_plan_paths_are_distinct_for_every_sorting() {
        let levels = sample_levels();
        for mode in [RunMode::Featured, RunMode::Epic] {
            for sorting in SortingCode::ALL {
                let report = generate_run(&levels, mode, sorting).unwrap();
                let plan = plan_run(&report);
                let paths: HashSet<PathBuf> = plan.iter().map(|w| w.path(&base())).collect();
                assert_eq!(paths.len(), plan.len());
                let expected = if sorting == SortingCode::LongestDescription { 15 } else { 16 };
                assert_eq!(plan.len(), expected);
            }
        }
    }

    #[test]
    fn run_plan_uses_run_wide_names() {
        let levels = sample_levels();
        let report = generate_run(&levels, RunMode::Featured, SortingCode::Default).unwrap();
        let names: Vec<PathBuf> = plan_run(&report).iter().map(|w| w.path(&base())).collect();
        for expected in [
            "Statistics/Easy/Easy featured list.md",
            "Statistics/Featured list.md",
            "Statistics/Featured list with longest descriptions.md",
            "Statistics/Featured audio info list.md",
            "Statistics/Featured audio info expanded list.md",
            "Statistics/Featured builders info list.md",
        ] {
            assert!(names.contains(&PathBuf::from(expected)), "missing {expected}");
        }
    }

    #[test]
    fn top_demons_plan_targets_base_directory() {
        let levels = sample_levels();
        let artifact = generate_top_demons(&levels, 50).unwrap();
        let write = plan_top_demons(&artifact);
        assert_eq!(write.slot(), Slot::TopDemons);
        assert_eq!(
            write.path(&base()),
            PathBuf::from("Statistics/Top 50 popular demons list.md")
        );
    }

    #[test]
    fn report_kind_parses_keys() {
        assert_eq!("top-demons".parse::<ReportKind>().unwrap(), ReportKind::TopDemons);
        assert_eq!(" Epic".parse::<ReportKind>().unwrap(), ReportKind::Epic);
        assert!("weekly".parse::<ReportKind>().is_err());
    }

    #[test]
    fn resolve_creates_missing_directories_idempotently() {
        let root = std::env::temp_dir().join(format!(
            "gdlists-addressing-{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        ));
        let prefix = ReportKind::Featured.prefix(Tier::HardDemon);
        let first =
            resolve_destination(&root, Tier::HardDemon, &prefix, SortingCode::Default).unwrap();
        let second =
            resolve_destination(&root, Tier::HardDemon, &prefix, SortingCode::Default).unwrap();
        assert_eq!(first, second);
        assert!(root.join("Hard demon").is_dir());
        assert!(!first.exists());
        let _ = fs::remove_dir_all(root);
    }
}
