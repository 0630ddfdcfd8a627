mod upload;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use fixturelab_generate::{
    GenerateOptions, GenerationEngine, GenerationError, OutputFormat, render,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "fixturelab", version, about = "HumanBeing fixture toolbox")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a randomized HumanBeing fixture batch.
    Generate(GenerateArgs),
    /// Upload files to an import endpoint, all dispatched at once.
    Upload(upload::UploadArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Number of records to generate.
    #[arg(short = 'n', long = "num")]
    num: u64,
    /// Names starting id.
    #[arg(short = 's', long, default_value_t = 1)]
    start_id: i64,
    /// Available vehicle ids for the reference pool.
    #[arg(long = "vehicle-ids", value_name = "ID", num_args = 1.., required = true)]
    vehicle_ids: Vec<i64>,
    /// Output file; the extension selects the format (.yaml, .yml, .json).
    #[arg(short = 'o', long, default_value = "humans.yaml")]
    output: PathBuf,
    /// Chance (0-1) of reusing an earlier name.
    #[arg(short = 'd', long, default_value_t = 0.1)]
    duplicate_chance: f64,
    /// Chance (0-1) of inlining a full vehicle record instead of an id.
    #[arg(short = 'c', long = "inline-chance", default_value_t = 0.15)]
    inline_chance: f64,
    /// Emit the decoy schemaVersion field on every record.
    #[arg(long, default_value_t = false)]
    schema_version_field: bool,
    /// Seed for reproducible batches; defaults to OS entropy.
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init()
        .ok();

    let cli = Cli::parse();
    match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::Upload(args) => {
            upload::run_upload(args).await;
            Ok(())
        }
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    // Resolve the format up front: a bad extension must fail before any
    // record is built or any file touched.
    let format = OutputFormat::from_path(&args.output)?;

    let options = GenerateOptions {
        count: args.num,
        start_id: args.start_id,
        vehicle_pool: args.vehicle_ids,
        duplicate_chance: args.duplicate_chance,
        inline_vehicle_chance: args.inline_chance,
        schema_version_field: args.schema_version_field,
    };

    let mut rng = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_os_rng(),
    };

    let records = GenerationEngine::new(options).run(&mut rng)?;
    let text = render(&records, format)?;
    debug!(path = %args.output.display(), bytes = text.len(), "writing batch");
    std::fs::write(&args.output, text)?;

    println!(
        "generated {} records to '{}' (duplicates ~ {:.0}%, inline vehicles ~ {:.0}%)",
        records.len(),
        args.output.display(),
        args.duplicate_chance * 100.0,
        args.inline_chance * 100.0,
    );
    Ok(())
}
