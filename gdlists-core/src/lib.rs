//! gdlists core
//!
//! Classifies Geometry Dash levels by difficulty tier and renders the
//! featured, epic and top demon markdown lists. Loading levels and
//! persisting files are left to the [`LevelSource`] and [`ReportSink`]
//! implementations supplied by the caller.

pub mod addressing;
pub mod config;
pub mod constants;
pub mod difficulty;
pub mod error;
pub mod level;
pub mod numbers;
pub mod outcome;
pub mod render;
pub mod report;
pub mod sorting;
pub mod summary;

use std::path::Path;

// Re-export commonly used types
pub use addressing::{
    PlannedWrite, ReportKind, destination_path, plan_run, plan_top_demons, resolve_destination,
};
pub use config::ReportConfig;
pub use constants::{DEFAULT_BASE_DIR, TOP_DEMONS_LIMIT};
pub use difficulty::{DemonDifficulty, Difficulty, DifficultyName, Tier};
pub use error::{ReportError, Result};
pub use level::{Level, LevelBuilder, LevelData, LevelRecord, Song, levels_from_json};
pub use outcome::{RunStatus, RunSummary, WriteFailure, failure_count};
pub use report::{
    ReportArtifact, RunMode, RunReport, Slot, dedup_levels, generate_run, generate_top_demons,
    qualifying_levels,
};
pub use sorting::SortingCode;

/// Source of the level collection a set of runs reads from
pub trait LevelSource {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load every known level. Duplicate ids are allowed.
    ///
    /// # Errors
    ///
    /// Returns an error if the levels cannot be read or decoded.
    fn load_levels(&self) -> std::result::Result<Vec<Level>, Self::Error>;
}

/// Destination for rendered lists
pub trait ReportSink {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Store `contents` at `path`, creating missing parents and replacing any
    /// existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    fn write(&self, path: &Path, contents: &[u8]) -> std::result::Result<(), Self::Error>;
}

/// Drives the configured runs from a level source into a sink
pub struct ListEngine<L, S>
where
    L: LevelSource,
    S: ReportSink,
{
    source: L,
    sink: S,
    config: ReportConfig,
}

impl<L, S> ListEngine<L, S>
where
    L: LevelSource,
    S: ReportSink,
{
    pub const fn new(source: L, sink: S, config: ReportConfig) -> Self {
        Self {
            source,
            sink,
            config,
        }
    }

    pub const fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Load levels and execute every configured run in order.
    ///
    /// # Errors
    ///
    /// Returns an error only if the levels cannot be loaded. Write failures
    /// are recorded in the returned summaries.
    pub fn run_all(&self) -> std::result::Result<Vec<RunSummary>, L::Error> {
        let levels = self.source.load_levels()?;
        log::info!("Loaded {} level records", levels.len());
        Ok(self
            .config
            .runs
            .iter()
            .map(|kind| self.run(*kind, &levels))
            .collect())
    }

    /// Execute one run against an already loaded collection.
    ///
    /// Every artifact is attempted even when an earlier write fails.
    pub fn run(&self, kind: ReportKind, levels: &[Level]) -> RunSummary {
        match kind.run_mode() {
            Some(mode) => {
                let Some(report) = generate_run(levels, mode, self.config.sorting) else {
                    log::warn!("{} levels list is empty! No changes were made.", mode.label());
                    return RunSummary::skipped(kind);
                };
                self.write_all(kind, report.level_count, &plan_run(&report))
            }
            None => {
                let Some(artifact) = generate_top_demons(levels, TOP_DEMONS_LIMIT) else {
                    log::warn!("{} list is empty! No changes were made.", kind.label());
                    return RunSummary::skipped(kind);
                };
                let listed = dedup_levels(levels)
                    .iter()
                    .filter(|level| level.is_demon())
                    .count()
                    .min(TOP_DEMONS_LIMIT);
                self.write_all(kind, listed, &[plan_top_demons(&artifact)])
            }
        }
    }

    fn write_all(
        &self,
        kind: ReportKind,
        levels: usize,
        plan: &[PlannedWrite<'_>],
    ) -> RunSummary {
        let mut summary = RunSummary {
            kind,
            status: RunStatus::Written,
            levels,
            artifacts: plan.len(),
            written: Vec::with_capacity(plan.len()),
            failed: Vec::new(),
        };
        for write in plan {
            let path = write.path(&self.config.base_dir);
            match self.sink.write(&path, &write.artifact.to_bytes()) {
                Ok(()) => summary.written.push(path),
                Err(err) => summary.failed.push(WriteFailure {
                    path,
                    message: err.to_string(),
                }),
            }
        }
        log::info!(
            "{kind}: {} of {} lists written",
            summary.written.len(),
            summary.artifacts
        );
        summary
    }
}
