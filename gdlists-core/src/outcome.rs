//! Per-run bookkeeping returned by the engine.
use serde::Serialize;
use std::path::PathBuf;

use crate::addressing::ReportKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RunStatus {
    /// Artifacts were generated and handed to the sink
    Written,
    /// Nothing qualified; no destination was touched
    SkippedEmpty,
}

/// A destination the sink refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WriteFailure {
    pub path: PathBuf,
    pub message: String,
}

/// What one run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub kind: ReportKind,
    pub status: RunStatus,
    /// Levels listed by the run after de-duplication
    pub levels: usize,
    /// Artifacts planned for writing
    pub artifacts: usize,
    pub written: Vec<PathBuf>,
    pub failed: Vec<WriteFailure>,
}

impl RunSummary {
    #[must_use]
    pub const fn skipped(kind: ReportKind) -> Self {
        Self {
            kind,
            status: RunStatus::SkippedEmpty,
            levels: 0,
            artifacts: 0,
            written: Vec::new(),
            failed: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Total failed writes across runs.
#[must_use]
pub fn failure_count(summaries: &[RunSummary]) -> usize {
    summaries.iter().map(|summary| summary.failed.len()).sum()
}
