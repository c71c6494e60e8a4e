use anyhow::{bail, Context};
use clap::Parser;
use distscope::config::Config;
use distscope::dashboard::build_dashboard;
use distscope::dataset::{ActiveDataset, IngestOutcome};
use distscope::filter::FilterState;
use distscope::reconcile::compare_datasets;
use distscope::standardize::standardize;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "distscope", version, about = "Distribution record dashboards from CSV or JSON")]
struct Cli {
    /// Input file (`-` for stdin). Omit to use the built-in dataset.
    #[arg(required = false)]
    input: Option<String>,

    /// Use the built-in dataset even if an input is given
    #[arg(long = "default", default_value_t = false)]
    use_default: bool,

    /// Field filter as field=pattern (case-insensitive substring). May be repeated.
    #[arg(long = "filter", short = 'f')]
    filters: Vec<String>,

    /// Print only one section: records | profile | flow | series | pareto | hierarchy | crosstab
    #[arg(long = "only")]
    only: Option<String>,

    /// JSON options file (`pipeline` and `reconcile` sections)
    #[arg(long = "config")]
    config: Option<PathBuf>,

    #[arg(long = "flow-limit")] flow_limit: Option<usize>,
    #[arg(long = "top")] top: Option<usize>,

    /// Customer-side dataset to check the active set against
    #[arg(long = "compare")]
    compare: Option<String>,
    #[arg(long = "threshold-days")] threshold_days: Option<i64>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("distscope=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_source(path: &str) -> anyhow::Result<String> {
    if path == "-" {
        let mut s = String::new();
        io::stdin().lock().read_to_string(&mut s).context("reading stdin")?;
        Ok(s)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("reading {path}"))
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(p) => Config::load(p)?,
        None => Config::default(),
    };
    if let Some(n) = cli.flow_limit { config.pipeline.flow_record_limit = n; }
    if let Some(n) = cli.top { config.pipeline.pareto_top_n = n; }
    if let Some(d) = cli.threshold_days { config.reconcile.threshold_days = d; }

    let mut dataset = ActiveDataset::new();
    if let (Some(path), false) = (cli.input.as_deref(), cli.use_default) {
        let raw = read_source(path)?;
        match dataset.replace_from_raw(&raw) {
            IngestOutcome::Replaced { records } => tracing::info!(records, source = path, "loaded input"),
            IngestOutcome::Rejected => bail!("could not process data from {path}: zero records produced"),
        }
    }

    if let Some(other) = cli.compare.as_deref() {
        let received = standardize(&read_source(other)?);
        if received.is_empty() {
            bail!("could not process data from {other}: zero records produced");
        }
        let report = compare_datasets(dataset.records(), &received, &config.reconcile);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let mut filters = FilterState::new();
    for f in &cli.filters {
        filters.set_from_directive(f)?;
    }

    let dash = build_dashboard(dataset.records(), &filters, &config.pipeline);
    if dash.records.is_empty() && !filters.is_empty() {
        tracing::warn!("no records match the current filters");
    }
    let out = match cli.only.as_deref() {
        None => serde_json::to_string_pretty(&dash)?,
        Some("records") => serde_json::to_string_pretty(&dash.records)?,
        Some("profile") => serde_json::to_string_pretty(&dash.profile)?,
        Some("flow") => serde_json::to_string_pretty(&dash.flow)?,
        Some("series") => serde_json::to_string_pretty(&dash.series)?,
        Some("pareto") => serde_json::to_string_pretty(&dash.pareto)?,
        Some("hierarchy") => serde_json::to_string_pretty(&dash.hierarchy)?,
        Some("crosstab") => serde_json::to_string_pretty(&dash.cross_tab)?,
        Some(other) => bail!("unknown section: {other}"),
    };
    println!("{out}");
    Ok(())
}
