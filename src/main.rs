//! Command-line driver — SOAP note from a transcript file.
//!
//! ```text
//! soap-scribe <transcript.json> [--quick] [--json] [--name NAME] [--mrn MRN]
//! ```
//!
//! The transcript file is a JSON array of
//! `{ "timestamp": …, "speaker": …, "text": … }` objects.
//!
//! # Startup sequence
//!
//! 1. Initialise logging and parse arguments.
//! 2. Write the default `settings.toml` if none exists yet.
//! 3. Load [`AppConfig`] from disk (`GEMINI_API_KEY` overrides the stored
//!    key).
//! 4. Read and deserialise the transcript.
//! 5. Build the [`SummaryGenerator`] and run one generation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use soap_scribe::{
    config::AppConfig,
    summary::SummaryGenerator,
    transcript::{PatientInfo, SpeechSegment},
};

// ---------------------------------------------------------------------------
// Arguments
// ---------------------------------------------------------------------------

/// Generate a SOAP note from a recorded visit transcript
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Transcript file: JSON array of {timestamp, speaker, text}
    transcript: PathBuf,

    /// Produce a 2-3 sentence summary instead of a SOAP note
    #[arg(long)]
    quick: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Patient name for the prompt header
    #[arg(long)]
    name: Option<String>,

    /// Patient medical record number
    #[arg(long)]
    mrn: Option<String>,
}

impl Args {
    fn patient(&self) -> PatientInfo {
        PatientInfo {
            name: self.name.clone(),
            mrn: self.mrn.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if let Err(e) = AppConfig::init() {
        log::warn!("Could not write default settings: {e}");
    }

    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config ({e}); using defaults");
        AppConfig::default()
    });

    let raw = std::fs::read_to_string(&args.transcript)
        .with_context(|| format!("reading {}", args.transcript.display()))?;
    let transcript: Vec<SpeechSegment> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing {}", args.transcript.display()))?;
    log::info!("loaded {} transcript segments", transcript.len());

    let generator = SummaryGenerator::from_config(&config)
        .context("set GEMINI_API_KEY or generation.api_key in settings.toml")?;

    if args.quick {
        let summary = generator.generate_quick_summary(&transcript).await?;
        if args.json {
            println!("{}", serde_json::json!({ "summary": summary }));
        } else {
            println!("{summary}");
        }
        return Ok(());
    }

    let note = generator
        .generate_summary(&transcript, Some(&args.patient()))
        .await?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&note)?);
    } else {
        println!("{note}");
    }
    Ok(())
}
