//! Run generation: partitions the qualifying levels of a run into the fixed
//! set of list artifacts.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::constants::{DESCRIPTION_COLUMNS, TOTAL_LEVELS};
use crate::difficulty::Tier;
use crate::level::Level;
use crate::render::{MarkdownTable, description_row};
use crate::sorting::SortingCode;
use crate::summary::{render_audio_info, render_audio_info_expanded, render_builders_info};

/// Which levels take part in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RunMode {
    /// Levels with a positive featured score
    Featured,
    /// Levels flagged epic
    Epic,
}

impl RunMode {
    #[must_use]
    pub const fn qualifies(self, level: &Level) -> bool {
        match self {
            Self::Featured => level.is_featured(),
            Self::Epic => level.epic,
        }
    }

    /// Capitalized name used for run-wide file names and headings.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Featured => "Featured",
            Self::Epic => "Epic",
        }
    }

    /// Lowercase name used after a tier label.
    #[must_use]
    pub const fn tier_label(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::Epic => "epic",
        }
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Logical output slot an artifact fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Slot {
    Tier(Tier),
    AllQualifying,
    LongestDescriptions,
    AudioInfo,
    AudioInfoExpanded,
    BuildersInfo,
    TopDemons,
}

/// A rendered list ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportArtifact {
    pub slot: Slot,
    pub lines: Vec<String>,
}

impl ReportArtifact {
    #[must_use]
    pub const fn new(slot: Slot, lines: Vec<String>) -> Self {
        Self { slot, lines }
    }

    /// Lines joined with `\n`, newline terminated.
    #[must_use]
    pub fn text(&self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }

    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.text().into_bytes()
    }
}

/// The sixteen artifacts of a featured or epic run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub mode: RunMode,
    pub sorting: SortingCode,
    /// Qualifying levels after de-duplication
    pub level_count: usize,
    /// One table per real tier, `Tier::REAL` order
    pub tiers: [ReportArtifact; 11],
    pub all: ReportArtifact,
    pub longest_descriptions: ReportArtifact,
    pub audio: ReportArtifact,
    pub audio_expanded: ReportArtifact,
    pub builders: ReportArtifact,
}

impl RunReport {
    pub const ARTIFACT_COUNT: usize = 16;

    #[must_use]
    pub fn tier(&self, tier: Tier) -> Option<&ReportArtifact> {
        tier.real_index().map(|idx| &self.tiers[idx])
    }

    /// All artifacts in slot order: tiers, all, longest descriptions, audio,
    /// expanded audio, builders.
    pub fn artifacts(&self) -> impl Iterator<Item = &ReportArtifact> {
        self.tiers.iter().chain([
            &self.all,
            &self.longest_descriptions,
            &self.audio,
            &self.audio_expanded,
            &self.builders,
        ])
    }
}

/// Collapse duplicate ids (the last copy wins) and return levels in id order.
#[must_use]
pub fn dedup_levels(levels: &[Level]) -> Vec<&Level> {
    let mut by_id: BTreeMap<i64, &Level> = BTreeMap::new();
    for level in levels {
        by_id.insert(level.id, level);
    }
    by_id.into_values().collect()
}

/// Levels selected by `mode`, de-duplicated, in id order.
#[must_use]
pub fn qualifying_levels(levels: &[Level], mode: RunMode) -> Vec<&Level> {
    dedup_levels(levels)
        .into_iter()
        .filter(|level| mode.qualifies(level))
        .collect()
}

/// Build every list of a run.
///
/// Returns `None` when no level qualifies, which means nothing should be
/// written for this run.
#[must_use]
pub fn generate_run(levels: &[Level], mode: RunMode, sorting: SortingCode) -> Option<RunReport> {
    let qualifying = qualifying_levels(levels, mode);
    if qualifying.is_empty() {
        return None;
    }

    let mut ordered = qualifying.clone();
    sorting.sort(&mut ordered);

    let tiers: [ReportArtifact; 11] = std::array::from_fn(|idx| {
        let tier = Tier::REAL[idx];
        let bucket: Vec<&Level> = ordered
            .iter()
            .copied()
            .filter(|level| level.tier() == tier)
            .collect();
        log::debug!("{mode} {tier}: {} levels", bucket.len());
        let title = format!("{} {} levels", tier.folder_label(), mode.tier_label());
        ReportArtifact::new(
            Slot::Tier(tier),
            MarkdownTable::of_levels(title, TOTAL_LEVELS, &bucket).into_lines(),
        )
    });

    let all = ReportArtifact::new(
        Slot::AllQualifying,
        MarkdownTable::of_levels(format!("{} levels", mode.label()), TOTAL_LEVELS, &ordered)
            .into_lines(),
    );

    let mut by_description = qualifying.clone();
    SortingCode::LongestDescription.sort(&mut by_description);
    let mut descriptions = MarkdownTable::new(
        format!("{} levels with longest descriptions", mode.label()),
        TOTAL_LEVELS,
        &DESCRIPTION_COLUMNS,
    );
    for level in &by_description {
        descriptions.push_row(description_row(level));
    }
    let longest_descriptions =
        ReportArtifact::new(Slot::LongestDescriptions, descriptions.into_lines());

    let audio = ReportArtifact::new(
        Slot::AudioInfo,
        render_audio_info(&format!("{} audio info", mode.label()), &qualifying),
    );
    let audio_expanded = ReportArtifact::new(
        Slot::AudioInfoExpanded,
        render_audio_info_expanded(&format!("{} audio info expanded", mode.label()), &qualifying),
    );
    let builders = ReportArtifact::new(
        Slot::BuildersInfo,
        render_builders_info(&format!("{} builders info", mode.label()), &qualifying),
    );

    Some(RunReport {
        mode,
        sorting,
        level_count: qualifying.len(),
        tiers,
        all,
        longest_descriptions,
        audio,
        audio_expanded,
        builders,
    })
}

/// Most liked demons regardless of featured or epic status.
///
/// Returns `None` when the collection holds no demon.
#[must_use]
pub fn generate_top_demons(levels: &[Level], limit: usize) -> Option<ReportArtifact> {
    let mut demons: Vec<&Level> = dedup_levels(levels)
        .into_iter()
        .filter(|level| level.is_demon())
        .collect();
    if demons.is_empty() {
        return None;
    }
    SortingCode::DescendingLikes.sort(&mut demons);
    demons.truncate(limit);
    if let Some(top) = demons.first() {
        log::debug!("most liked demon: {top}");
    }

    let table = MarkdownTable::of_levels(
        format!("Top {limit} popular demons"),
        TOTAL_LEVELS,
        &demons,
    );
    Some(ReportArtifact::new(Slot::TopDemons, table.into_lines()))
}
