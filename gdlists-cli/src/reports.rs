use anyhow::Result;
use colored::Colorize;
use std::io::Write;
use std::time::Duration;

use gdlists_core::{RunStatus, RunSummary, failure_count};

const fn status_label(status: RunStatus) -> &'static str {
    match status {
        RunStatus::Written => "written",
        RunStatus::SkippedEmpty => "skipped (empty)",
    }
}

pub fn generate_console_report(
    out: &mut dyn Write,
    summaries: &[RunSummary],
    total_duration: Duration,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "📊 List Generation Summary".bright_cyan().bold())?;
    writeln!(out, "{}", "==========================".cyan())?;

    let written: usize = summaries.iter().map(|s| s.written.len()).sum();
    let failed = failure_count(summaries);
    writeln!(out, "Runs: {}", summaries.len())?;
    writeln!(out, "Lists written: {}", written.to_string().green())?;
    writeln!(out, "Failed writes: {}", failed.to_string().red())?;
    writeln!(out, "Total time: {total_duration:?}")?;
    writeln!(out)?;

    for summary in summaries {
        let status = match summary.status {
            RunStatus::Written if summary.is_success() => "✅".green(),
            RunStatus::Written => "❌".red(),
            RunStatus::SkippedEmpty => "⏭️".yellow(),
        };
        writeln!(
            out,
            "{status} {} ({})",
            summary.kind.label().bold(),
            status_label(summary.status)
        )?;
        if summary.status == RunStatus::Written {
            writeln!(out, "   Levels: {}", summary.levels)?;
            writeln!(
                out,
                "   Lists: {}/{} written",
                summary.written.len(),
                summary.artifacts
            )?;
        }
        if !summary.failed.is_empty() {
            writeln!(out, "   Failures:")?;
            for failure in &summary.failed {
                writeln!(
                    out,
                    "     • {}: {}",
                    failure.path.display(),
                    failure.message.red()
                )?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn generate_json_report(out: &mut dyn Write, summaries: &[RunSummary]) -> Result<()> {
    let json_output = serde_json::to_string_pretty(summaries)?;
    writeln!(out, "{json_output}")?;
    Ok(())
}

pub fn generate_markdown_report(out: &mut dyn Write, summaries: &[RunSummary]) -> Result<()> {
    writeln!(out, "# Level List Run Summary\n")?;
    writeln!(out, "| Run | Status | Levels | Written | Failed |")?;
    writeln!(out, "|-----|--------|--------|---------|--------|")?;
    for summary in summaries {
        writeln!(
            out,
            "| {} | {} | {} | {}/{} | {} |",
            summary.kind.label(),
            status_label(summary.status),
            summary.levels,
            summary.written.len(),
            summary.artifacts,
            summary.failed.len()
        )?;
    }

    let failures: Vec<_> = summaries.iter().flat_map(|s| &s.failed).collect();
    if !failures.is_empty() {
        writeln!(out, "\n## Failed Writes\n")?;
        for failure in failures {
            writeln!(out, "- `{}`: {}", failure.path.display(), failure.message)?;
        }
    }
    Ok(())
}
