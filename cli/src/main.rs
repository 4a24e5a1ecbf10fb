//! HeartCare CLI - Upload an ECG CSV file for atrial fibrillation prediction
//!
//! # Commands
//!
//! ```bash
//! heartcare analyze ecg.csv                          # Uses HEARTCARE_API_URL
//! heartcare analyze ecg.csv --endpoint http://host   # Explicit service URL
//! heartcare analyze ecg.csv --json                   # Machine-readable output
//! heartcare format                                   # Show the expected CSV layout
//! ```

use clap::{Parser, Subcommand};
use heartcare_cli::{AnalysisReport, CliError, CliResult, ClientConfig, HttpPredictor, LocalFile};
use heartcare_core::{header_row, instructions, predict_url, AnalysisError, UploadForm};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "heartcare")]
#[command(about = "Detect atrial fibrillation in 12-lead ECG CSV files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload a CSV file and print the prediction
    Analyze {
        /// Input CSV file
        input: PathBuf,

        /// Prediction service base URL (overrides HEARTCARE_API_URL)
        #[arg(short, long)]
        endpoint: Option<String>,

        /// Print the result as JSON on stdout
        #[arg(long)]
        json: bool,
    },

    /// Show the expected CSV layout
    Format,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze {
            input,
            endpoint,
            json,
        } => cmd_analyze(&input, endpoint, json).await,

        Commands::Format => cmd_format(),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        if let Some(hint) = e.hint() {
            eprintln!("   {}", hint);
        }
        std::process::exit(1);
    }
}

async fn cmd_analyze(input: &Path, endpoint: Option<String>, json: bool) -> CliResult<()> {
    let config = ClientConfig::from_env().with_override(endpoint);

    eprintln!("📄 Reading: {}", input.display());
    let file = LocalFile::open(input).await?;
    eprintln!("   Size: {} bytes", file.len());

    let mut form = UploadForm::new(config.api_url);
    form.select_file(Some(file));
    if let Some(error) = form.error() {
        eprintln!("   {}", form.status_text());
        return Err(error.clone().into());
    }

    if let Some(base) = form.endpoint() {
        eprintln!("📤 Uploading to {}", predict_url(base));
    }

    form.start_analysis(&HttpPredictor::new()).await;

    let Some(prediction) = form.prediction() else {
        let error = form
            .error()
            .cloned()
            .unwrap_or_else(|| AnalysisError::transport(""));
        return Err(CliError::Analysis(error));
    };

    let report = AnalysisReport::new(form.status_text(), prediction);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        eprintln!("✅ Analysis complete");
        println!("{}", report.summary());
    }

    Ok(())
}

fn cmd_format() -> CliResult<()> {
    println!("{}", instructions());
    println!();
    println!("Header row:");
    println!("{}", header_row());
    Ok(())
}
