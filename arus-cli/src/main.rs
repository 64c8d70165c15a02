use anyhow::{Context, Result, bail};
use arus_core::AnalysisResult;
use arus_finance::{CashFlowSummary, Recommender, analyze, recommend_or_fallback};
use arus_ingest::parse_csv_path;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

mod config;
mod llm;
mod logging;
mod report;
mod state;

use crate::llm::{LlmConfig, LlmRecommender};
use crate::report::Report;

#[derive(Parser, Debug)]
#[command(
    name = "arus",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("ARUS_BUILD_SHA"), ")"),
    about = "Cash-flow analysis for transaction CSV exports"
)]
struct Cli {
    /// Log filter for stderr output (e.g. warn, info, debug); RUST_LOG overrides it
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a transaction CSV, print totals and monthly summaries, and ask the LLM for advice
    Analyze {
        /// Path to the transaction CSV
        #[arg(long)]
        csv: PathBuf,

        /// Print the full analysis as JSON instead of the text report (skips the LLM)
        #[arg(long)]
        json: bool,

        /// Skip the recommendation request
        #[arg(long)]
        no_ai: bool,

        /// Number of outflow categories to list (default: config report.top_categories)
        #[arg(long)]
        top: Option<usize>,
    },

    /// Print the JSON summary that is sent to the recommendation service
    Summary {
        #[arg(long)]
        csv: PathBuf,
    },

    /// Print only the LLM recommendations for a transaction CSV
    Recommend {
        #[arg(long)]
        csv: PathBuf,
    },

    /// Manage ~/.arus/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config if none exists
    Init,
    /// Print the effective config
    Show,
    /// Print the config file location
    Path,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(&cli.log_level);

    match cli.command {
        Command::Analyze {
            csv,
            json,
            no_ai,
            top,
        } => {
            let result = load_analysis(&csv)?;

            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&result).context("serialize analysis")?
                );
                return Ok(());
            }

            let cfg = config::load_config()?;
            let source = display_name(&csv);
            let report = Report {
                source: &source,
                result: &result,
                top_categories: top.unwrap_or(cfg.report.top_categories),
            };
            println!("{report}");

            if no_ai {
                return Ok(());
            }

            let recommender = LlmRecommender::new(LlmConfig::from_section(&cfg.llm)?);
            let summary = CashFlowSummary::from_result(&result);
            let (text, err) = recommend_or_fallback(&recommender, &summary);
            if let Some(e) = err {
                tracing::error!("recommendation failed: {e:#}");
            }
            println!("## Rekomendasi AI\n\n{text}");
        }

        Command::Summary { csv } => {
            let result = load_analysis(&csv)?;
            println!("{}", CashFlowSummary::from_result(&result).to_json_pretty()?);
        }

        Command::Recommend { csv } => {
            let result = load_analysis(&csv)?;
            let cfg = config::load_config()?;
            let recommender = LlmRecommender::new(LlmConfig::from_section(&cfg.llm)?);
            let text = recommender.recommend(&CashFlowSummary::from_result(&result))?;
            println!("{text}");
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => {
                let cfg = config::load_config()?;
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
            ConfigCommand::Path => println!("{}", config::config_path()?.display()),
        },
    }

    Ok(())
}

fn load_analysis(csv_path: &Path) -> Result<AnalysisResult> {
    if !csv_path.exists() {
        bail!("CSV not found: {} (pass --csv <path>)", csv_path.display());
    }

    let txns = parse_csv_path(csv_path).with_context(|| format!("parsing {}", csv_path.display()))?;
    tracing::info!(count = txns.len(), path = %csv_path.display(), "parsed transactions");

    let result = analyze(&txns);
    tracing::debug!(months = result.monthly_summaries.len(), "aggregated monthly summaries");
    Ok(result)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
