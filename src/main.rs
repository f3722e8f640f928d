use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use medicare_coder::compliance::{ConsultationDetails, PatientHistory};
use medicare_coder::extraction::extract_patient_details;
use medicare_coder::{config, extract, Catalog, ConsultationPipeline, RecommendDefaults};

#[derive(Parser)]
#[command(name = "medicare-coder")]
#[command(about = "MBS item recommendation and compliance checks for GP consultation notes")]
#[command(version)]
struct Cli {
    /// Schedule file (defaults to the data directory)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract clinical features from a note
    Extract {
        /// Consultation note text
        text: String,
    },
    /// Extract patient identifying details from text
    Patient {
        text: String,
    },
    /// Recommend MBS items for a note
    Recommend {
        text: String,
        /// Consultation length in minutes, used when the note has none
        #[arg(long)]
        duration: Option<u32>,
        /// Patient age, used when the note has none
        #[arg(long)]
        age: Option<u32>,
    },
    /// Check a combination of MBS items
    Validate {
        /// Comma-separated item numbers
        #[arg(long, value_delimiter = ',', required = true)]
        codes: Vec<String>,
        #[arg(long)]
        duration: Option<u32>,
        /// Comma-separated items claimed recently for this patient
        #[arg(long, value_delimiter = ',')]
        recent: Vec<String>,
    },
    /// List schedule items
    Items {
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        search: Option<String>,
    },
    /// Show one schedule item
    Item {
        code: String,
    },
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn load_catalog(path: Option<PathBuf>) -> Result<Arc<Catalog>> {
    let path = path.unwrap_or_else(config::catalog_path);
    let catalog = Catalog::load(&path)
        .with_context(|| format!("loading MBS schedule from {}", path.display()))?;
    Ok(Arc::new(catalog))
}

fn main() -> Result<()> {
    medicare_coder::init_tracing();
    let cli = Cli::parse();

    tracing::debug!("{} v{}", config::APP_NAME, config::APP_VERSION);

    match cli.command {
        Commands::Extract { text } => print_json(&extract(&text)),
        Commands::Patient { text } => print_json(&extract_patient_details(&text)),
        Commands::Recommend {
            text,
            duration,
            age,
        } => {
            let pipeline = ConsultationPipeline::new(load_catalog(cli.catalog)?);
            let defaults = RecommendDefaults {
                duration_minutes: duration,
                age,
            };
            print_json(&pipeline.analyze(&text, &defaults))
        }
        Commands::Validate {
            codes,
            duration,
            recent,
        } => {
            let pipeline = ConsultationPipeline::new(load_catalog(cli.catalog)?);
            let history = (!recent.is_empty()).then(|| PatientHistory::with_recent_claims(recent));
            let details = ConsultationDetails {
                duration_minutes: duration,
                ..ConsultationDetails::default()
            };
            print_json(&pipeline.validator().validate(&codes, history.as_ref(), &details))
        }
        Commands::Items { category, search } => {
            let catalog = load_catalog(cli.catalog)?;
            print_json(&catalog.search(category.as_deref(), search.as_deref()))
        }
        Commands::Item { code } => {
            let catalog = load_catalog(cli.catalog)?;
            match catalog.lookup(&code) {
                Some(item) => print_json(item),
                None => anyhow::bail!("MBS item {code} is not configured"),
            }
        }
    }
}
