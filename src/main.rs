use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use script_desk::{handle_analyze, AnalyzeRequest, Dataset, GenerateRequest, ScriptDesk};

#[derive(Parser)]
#[command(
    name = "script-desk",
    about = "Generate and review broadcast scripts about landmarks",
    version
)]
struct Cli {
    /// Landmark reference data (JSON)
    #[arg(
        long,
        global = true,
        env = "SCRIPT_DESK_DATA",
        default_value = "data/cities_landmarks.json"
    )]
    data: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze script text from files (reads stdin if none provided)
    Analyze {
        files: Vec<PathBuf>,
        /// Treat input as a JSON request body: {"script": "..."}
        #[arg(long)]
        request: bool,
    },
    /// Assemble a script for a landmark
    Generate {
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        landmark: Option<String>,
        /// Target duration in seconds
        #[arg(long)]
        duration: Option<u32>,
        /// Seed for reproducible template and sample selection
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List cities in the dataset
    Cities,
    /// List landmarks of one city
    Landmarks { city: String },
    /// Totals of cities, landmarks and stories
    Stats,
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn analyze_input(text: String, as_request: bool) -> anyhow::Result<()> {
    let request = if as_request {
        serde_json::from_str::<AnalyzeRequest>(&text).context("invalid analyze request")?
    } else {
        AnalyzeRequest { script: Some(text) }
    };
    print_json(&handle_analyze(&request)?)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Analyze { files, request } => {
            if files.is_empty() {
                let mut input = String::new();
                std::io::stdin()
                    .read_to_string(&mut input)
                    .context("failed to read stdin")?;
                analyze_input(input, request)?;
            } else {
                for path in &files {
                    let text = std::fs::read_to_string(path)
                        .with_context(|| format!("error reading {}", path.display()))?;
                    analyze_input(text, request)?;
                }
            }
        }
        Command::Generate {
            city,
            landmark,
            duration,
            seed,
        } => {
            let request = GenerateRequest {
                city,
                landmark,
                duration,
            };
            request.validate()?;
            let dataset = Dataset::from_path(&cli.data)?;
            let desk = ScriptDesk::new(&dataset);
            let script = match seed {
                Some(seed) => desk.handle_generate(&request, &mut StdRng::seed_from_u64(seed))?,
                None => desk.handle_generate(&request, &mut rand::rng())?,
            };
            print_json(&script)?;
        }
        Command::Cities => {
            let dataset = Dataset::from_path(&cli.data)?;
            print_json(&dataset.cities())?;
        }
        Command::Landmarks { city } => {
            let dataset = Dataset::from_path(&cli.data)?;
            print_json(&dataset.landmarks(&city)?)?;
        }
        Command::Stats => {
            let dataset = Dataset::from_path(&cli.data)?;
            print_json(&dataset.stats())?;
        }
    }

    Ok(())
}
