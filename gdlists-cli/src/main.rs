mod reports;
mod sink;
mod source;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::fs::{self, File};
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Instant;

use gdlists_core::{
    ListEngine, ReportConfig, ReportError, ReportKind, RunSummary, SortingCode, failure_count,
};
use sink::FsReportSink;
use source::JsonLevelSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Colored human-readable summary
    Console,
    Json,
    Markdown,
}

#[derive(Debug, Parser)]
#[command(name = "gdlists", version)]
#[command(about = "Generate featured, epic and top demon level lists as markdown tables")]
struct Args {
    /// Level export to read (JSON array or `{ "levels": [...] }`)
    #[arg(long)]
    input: PathBuf,

    /// Directory receiving the generated lists [default: Statistics]
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Ordering for the featured and epic lists [default: default]
    #[arg(long, value_parser = parse_sorting)]
    sorting: Option<SortingCode>,

    /// Runs to execute (comma-separated: featured, top-demons, epic)
    #[arg(long)]
    runs: Option<String>,

    /// Optional JSON configuration file; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Run summary format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Optional path to write the run summary instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = resolve_config(&args)?;
    if args.report == ReportFormat::Console {
        announce_banner(&config);
    }

    let start_time = Instant::now();
    let engine = ListEngine::new(JsonLevelSource::new(&args.input), FsReportSink, config);
    let summaries = engine.run_all().context("failed to load levels")?;

    for failure in summaries.iter().flat_map(|s| &s.failed) {
        log::error!("failed to write {}: {}", failure.path.display(), failure.message);
    }

    write_reports(&args, &summaries, start_time)?;

    if failure_count(&summaries) > 0 {
        std::process::exit(1);
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn announce_banner(config: &ReportConfig) {
    println!("{}", "📋 Geometry Dash List Generator".bright_cyan().bold());
    println!("{}", "================================".cyan());
    println!(
        "Output: {}  Sorting: {}",
        config.base_dir.display().to_string().bold(),
        config.sorting.to_string().bold()
    );
}

fn parse_sorting(value: &str) -> std::result::Result<SortingCode, ReportError> {
    value.parse()
}

fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

fn parse_runs(value: &str) -> Result<Vec<ReportKind>> {
    let runs = split_csv(value)
        .iter()
        .map(|name| name.parse::<ReportKind>())
        .collect::<Result<Vec<_>, _>>()?;
    if runs.is_empty() {
        bail!("--runs needs at least one of featured, top-demons, epic");
    }
    Ok(runs)
}

/// Defaults, then the config file, then command line flags.
fn resolve_config(args: &Args) -> Result<ReportConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            ReportConfig::from_json(&json)
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => ReportConfig::default(),
    };
    if let Some(dir) = &args.output_dir {
        config.base_dir.clone_from(dir);
    }
    if let Some(sorting) = args.sorting {
        config.sorting = sorting;
    }
    if let Some(runs) = &args.runs {
        config.runs = parse_runs(runs)?;
    }
    config.validate()?;
    Ok(config)
}

fn write_reports(args: &Args, summaries: &[RunSummary], start_time: Instant) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report {
        ReportFormat::Json => reports::generate_json_report(output_target.writer(), summaries)?,
        ReportFormat::Markdown => {
            reports::generate_markdown_report(output_target.writer(), summaries)?;
        }
        ReportFormat::Console => {
            reports::generate_console_report(
                output_target.writer(),
                summaries,
                start_time.elapsed(),
            )?;
        }
    }

    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> Args {
        Args {
            input: PathBuf::from("levels.json"),
            output_dir: None,
            sorting: None,
            runs: None,
            config: None,
            report: ReportFormat::Console,
            output: None,
            verbose: false,
        }
    }

    fn temp_path(label: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "gdlists-main-{label}-{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        ))
    }

    #[test]
    fn defaults_without_flags() {
        let config = resolve_config(&base_args()).unwrap();
        assert_eq!(config, ReportConfig::default());
    }

    #[test]
    fn flags_override_config_file() {
        let path = temp_path("config.json");
        fs::write(&path, r#"{ "base_dir": "from-file", "sorting": "ascending-likes" }"#).unwrap();
        let mut args = base_args();
        args.config = Some(path.clone());
        args.sorting = Some(SortingCode::DescendingDownloads);
        args.runs = Some("epic, featured".to_string());

        let config = resolve_config(&args).unwrap();
        assert_eq!(config.base_dir, PathBuf::from("from-file"));
        assert_eq!(config.sorting, SortingCode::DescendingDownloads);
        assert_eq!(config.runs, vec![ReportKind::Epic, ReportKind::Featured]);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn config_file_with_unknown_key_is_rejected() {
        let path = temp_path("stale-config.json");
        fs::write(&path, r#"{ "top_demons_limit": 10 }"#).unwrap();
        let mut args = base_args();
        args.config = Some(path.clone());

        let err = resolve_config(&args).unwrap_err();
        assert!(format!("{err:#}").contains("top_demons_limit"));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn rejects_unknown_runs() {
        assert!(parse_runs("featured,weekly").is_err());
        assert!(parse_runs(" , ").is_err());
        assert_eq!(parse_runs("top-demons").unwrap(), vec![ReportKind::TopDemons]);
    }

    #[test]
    fn sorting_flag_accepts_keys() {
        assert_eq!(parse_sorting("longest-description").unwrap(), SortingCode::LongestDescription);
        assert!(parse_sorting("by-stars").is_err());
    }

    #[test]
    fn args_parse_from_command_line() {
        let args = Args::try_parse_from([
            "gdlists",
            "--input",
            "levels.json",
            "--sorting",
            "descending-likes",
            "--report",
            "markdown",
        ])
        .unwrap();
        assert_eq!(args.sorting, Some(SortingCode::DescendingLikes));
        assert_eq!(args.report, ReportFormat::Markdown);
        assert!(Args::try_parse_from(["gdlists"]).is_err());
    }

    #[test]
    fn output_target_writes_file() {
        let path = temp_path("summary.md");
        let mut target = OutputTarget::new(Some(path.clone())).unwrap();
        writeln!(target.writer(), "hello").unwrap();
        target.flush_inner().unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello\n");
        let _ = fs::remove_file(path);
    }
}
