use analytics::{AnalysisOptions, SalesAnalyzer, SellerReport};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use configuration::{ConfigOverrides, load_config};
use core_types::Dataset;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// The main entry point for the Salesboard reporting tool.
fn main() -> Result<()> {
    // Parse command-line arguments
    let cli = Cli::parse();

    // `RUST_LOG` wins over `--log-level`. Logs go to stderr so JSON output stays clean.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.as_str()));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Execute the appropriate command
    match cli.command {
        Commands::Analyze(args) => handle_analyze(args),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Per-seller sales performance, profit ranking and bonus report.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Default log filter when `RUST_LOG` is not set (e.g. "info", "debug").
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a JSON dataset of sellers, products and purchase records.
    Analyze(AnalyzeArgs),
}

#[derive(Parser)]
struct AnalyzeArgs {
    /// Path to the JSON dataset.
    #[arg(long, short)]
    data: PathBuf,

    /// Path to a TOML configuration file. Defaults to `salesboard.toml` if present.
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Output format.
    #[arg(long, short, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    #[command(flatten)]
    overrides: ConfigOverrides,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

// ==============================================================================
// Analyze Command Logic
// ==============================================================================

/// Handles the orchestration of a single analysis run.
fn handle_analyze(args: AnalyzeArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref()).context("Failed to load configuration")?;
    config.apply_overrides(&args.overrides);
    config.validate().context("Invalid configuration overrides")?;

    let file = File::open(&args.data)
        .with_context(|| format!("Failed to open dataset {}", args.data.display()))?;
    let dataset = Dataset::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to read dataset {}", args.data.display()))?;

    tracing::info!(
        dataset = %args.data.display(),
        revenue_model = %config.revenue.model,
        bonus_policy = %config.bonus.policy,
        "Starting sales analysis"
    );

    let options = AnalysisOptions::from_config(&config)?;
    let reports = SalesAnalyzer::with_settings(&config.analysis).analyze(&dataset, &options)?;

    match args.format {
        OutputFormat::Table => println!("{}", render_table(&reports)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
    }

    Ok(())
}

/// Renders the ranked reports as a terminal table.
fn render_table(reports: &[SellerReport]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Rank",
            "Seller",
            "Name",
            "Sales",
            "Revenue",
            "Profit",
            "Bonus",
            "Top product",
        ]);

    for (rank, report) in reports.iter().enumerate() {
        let top_product = report
            .top_products
            .first()
            .map(|p| format!("{} x{}", p.sku, p.quantity))
            .unwrap_or_else(|| "-".to_string());

        table.add_row(vec![
            Cell::new(rank + 1).set_alignment(CellAlignment::Right),
            Cell::new(&report.seller_id),
            Cell::new(&report.name),
            Cell::new(report.sales_count).set_alignment(CellAlignment::Right),
            Cell::new(report.revenue).set_alignment(CellAlignment::Right),
            Cell::new(report.profit).set_alignment(CellAlignment::Right),
            Cell::new(report.bonus).set_alignment(CellAlignment::Right),
            Cell::new(top_product),
        ]);
    }

    table
}
