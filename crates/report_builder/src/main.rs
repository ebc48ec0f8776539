//! Report Builder CLI
//!
//! Match YAML -> statistics snapshot / markdown report
//! CSV dataset -> profile summary

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

use report_builder::narrative::NarrativeConfig;
use report_builder::{build_csv_summary, build_match_report, build_snapshot};

#[derive(Parser)]
#[command(name = "report_builder")]
#[command(about = "Build cricket match reports from ball-by-ball logs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the aggregated statistics snapshot as JSON
    Stats {
        /// Input match YAML file path
        #[arg(long)]
        r#in: PathBuf,

        /// Pretty-print the JSON output
        #[arg(long, default_value = "false")]
        pretty: bool,
    },

    /// Build a markdown match report
    Report {
        /// Input match YAML file path
        #[arg(long)]
        r#in: PathBuf,

        /// Output markdown file path
        #[arg(long)]
        out: PathBuf,

        /// Ask the narrative backend for an expert-analysis section
        #[arg(long, default_value = "false")]
        narrative: bool,

        /// Narrative model id
        #[arg(long)]
        model: Option<String>,

        /// Narrative backend base URL
        #[arg(long)]
        base_url: Option<String>,

        /// Narrative API key (falls back to OPENROUTER_API_KEY)
        #[arg(long)]
        api_key: Option<String>,
    },

    /// Summarize a tabular CSV dataset
    CsvSummary {
        /// Input CSV file path
        #[arg(long)]
        csv: PathBuf,

        /// Ask the narrative backend for a dataset summary
        #[arg(long, default_value = "false")]
        narrative: bool,

        /// Narrative model id
        #[arg(long)]
        model: Option<String>,

        /// Narrative backend base URL
        #[arg(long)]
        base_url: Option<String>,

        /// Narrative API key (falls back to OPENROUTER_API_KEY)
        #[arg(long)]
        api_key: Option<String>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Stats { r#in, pretty } => {
            let snapshot = build_snapshot(&r#in)?;
            let json = if pretty {
                serde_json::to_string_pretty(&snapshot)?
            } else {
                serde_json::to_string(&snapshot)?
            };
            println!("{json}");
        }

        Commands::Report { r#in, out, narrative, model, base_url, api_key } => {
            println!("🔨 Building match report...");
            println!("   Input:  {}", r#in.display());
            println!("   Output: {}", out.display());

            let config = narrative
                .then(|| narrative_config(api_key, model, base_url))
                .transpose()?;
            let report = build_match_report(&r#in, config.as_ref())?;

            fs::write(&out, &report.markdown)?;

            println!("\n✅ Report written to {}", out.display());
            println!("   Teams:      {}", report.record.info.teams.join(" vs "));
            println!("   Deliveries: {}", report.record.delivery_count());
            println!("   Total runs: {}", report.snapshot.total_runs());
            if narrative && report.narrative.is_none() {
                println!("   ⚠ Narrative unavailable; report contains tables only");
            }
        }

        Commands::CsvSummary { csv, narrative, model, base_url, api_key } => {
            let config = narrative
                .then(|| narrative_config(api_key, model, base_url))
                .transpose()?;
            let summary = build_csv_summary(&csv, config.as_ref())?;

            print!("{}", summary.profile.render_text());
            if let Some(text) = summary.narrative {
                println!("\n{text}");
            } else if narrative {
                println!("\n⚠ Narrative unavailable");
            }
        }
    }

    Ok(())
}

fn narrative_config(
    api_key: Option<String>,
    model: Option<String>,
    base_url: Option<String>,
) -> Result<NarrativeConfig> {
    let Some(api_key) = api_key.or_else(|| std::env::var("OPENROUTER_API_KEY").ok()) else {
        bail!("--narrative requires --api-key or the OPENROUTER_API_KEY environment variable");
    };

    let mut config = NarrativeConfig::new(api_key);
    if let Some(model) = model {
        config = config.with_model(model);
    }
    if let Some(base_url) = base_url {
        config = config.with_base_url(base_url);
    }
    Ok(config)
}
