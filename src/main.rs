use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use log::{info, warn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use disc_ics::{BodySet, Error, InitialParameters, RadialProfile};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    generate: GenerateArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a new initial-condition file (the default).
    Generate(GenerateArgs),
    /// Read an initial-condition file and check it against the disc ranges.
    Inspect(InspectArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// YAML file with generation parameters. Flags take precedence over it.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Total number of bodies, central body included.
    #[arg(short, long, allow_negative_numbers = true)]
    num_bodies: Option<i64>,

    /// Destination file, its directory has to exist.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Seed of the random generator. Picked at random and logged if missing.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Radial density of the disc.
    #[arg(short, long, value_enum)]
    profile: Option<RadialProfile>,
}

#[derive(Args, Debug)]
struct InspectArgs {
    /// Initial-condition file to check.
    path: PathBuf,

    /// YAML file with the ranges to check against.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn load_parameters(config: Option<&PathBuf>) -> Result<InitialParameters> {
    match config {
        Some(path) => InitialParameters::from_yaml_file(path)
            .with_context(|| format!("failed to load parameters from {}", path.display())),
        None => Ok(InitialParameters::default()),
    }
}

fn generate(args: GenerateArgs) -> Result<()> {
    let mut params = load_parameters(args.config.as_ref())?;
    if let Some(num_bodies) = args.num_bodies {
        params.body_count = u32::try_from(num_bodies).map_err(|_| {
            Error::InvalidParameters(format!("body count {} is out of range", num_bodies))
        })?;
    }
    if let Some(output) = args.output {
        params.output_path = output;
    }
    if args.seed.is_some() {
        params.seed = args.seed;
    }
    if let Some(profile) = args.profile {
        params.radial_profile = profile;
    }
    params.validate()?;

    let seed = params.seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!(
        "Generating {} bodies with {:?} radial profile, seed {}",
        params.body_count, params.radial_profile, seed
    );
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let system = BodySet::generate(&params, &mut rng)?;
    system
        .write_to_file(&params.output_path)
        .with_context(|| format!("failed to write {}", params.output_path.display()))?;
    Ok(())
}

fn inspect(args: InspectArgs) -> Result<()> {
    let params = load_parameters(args.config.as_ref())?;
    params.validate()?;
    let system = BodySet::read_from_file(&args.path)
        .with_context(|| format!("failed to read {}", args.path.display()))?;
    info!("{} holds {} bodies", args.path.display(), system.len());

    let inspection = system.inspect(&params);
    for (index, violations) in inspection.disc_violations.iter() {
        for violation in violations.iter() {
            warn!("Body {}: {}", index, violation);
        }
    }
    if !inspection.ends_with_central_body {
        warn!("Last body is not the central body of mass {}", params.central_mass);
    }
    if !inspection.is_clean() {
        bail!(
            "{} is not a valid disc ({} disc bodies out of range)",
            args.path.display(),
            inspection.disc_violations.len()
        );
    }
    info!("All bodies are within range");
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Some(Command::Generate(args)) => generate(args),
        Some(Command::Inspect(args)) => inspect(args),
        None => generate(cli.generate),
    }
}
