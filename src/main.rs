//! # bounty-readme
//!
//! Builds a bounty-ranked character dataset and features a random character in a README.

use anyhow::Result;
use bounty_readme::config::{self, BuildConfig, ImageMode, PickConfig};
use bounty_readme::{dataset, picker};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = "bounty-readme: fetches characters from a bounty API, keeps the highest bounties \
                  with an image each, and splices a randomly picked character into a README."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch characters and write the ranked dataset
    Build(BuildArgs),
    /// Pick a random character from the dataset and patch the README
    Pick(PickArgs),
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum ImagesArg {
    /// Generated avatar per name
    Placeholder,
    /// Images matched by name from the anime character API
    Lookup,
}

#[derive(clap::Args, Debug)]
struct BuildArgs {
    /// Image source for each character
    #[arg(long, value_enum, default_value = "placeholder")]
    images: ImagesArg,

    /// Number of characters to keep (defaults to 100 for placeholder, 50 for lookup)
    #[arg(short, long)]
    limit: Option<usize>,

    /// Dataset output path
    #[arg(short, long, default_value = config::DEFAULT_DATASET_PATH)]
    out: PathBuf,

    /// Bounty API endpoint
    #[arg(long, default_value = config::DEFAULT_BOUNTY_URL)]
    bounty_url: String,

    /// Anime character API endpoint used by the lookup mode
    #[arg(long, default_value = config::DEFAULT_IMAGE_URL)]
    image_url: String,

    /// Host of the generated placeholder avatars
    #[arg(long)]
    placeholder_host: Option<String>,

    /// Avatar style set of the generated placeholders
    #[arg(long)]
    placeholder_set: Option<String>,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = 60)]
    timeout: u64,
}

#[derive(clap::Args, Debug)]
struct PickArgs {
    /// Dataset to pick from
    #[arg(short, long, default_value = config::DEFAULT_DATASET_PATH)]
    data: PathBuf,

    /// Document whose markers get rewritten
    #[arg(short, long, default_value = config::DEFAULT_README_PATH)]
    readme: PathBuf,
}

impl BuildArgs {
    fn into_config(self) -> BuildConfig {
        let mode = match self.images {
            ImagesArg::Placeholder => ImageMode::Placeholder,
            ImagesArg::Lookup => ImageMode::Lookup,
        };
        let mut config = BuildConfig::new(mode);
        config.bounty_url = self.bounty_url;
        config.image_url = self.image_url;
        config.output = self.out;
        config.timeout = Duration::from_secs(self.timeout);
        if let Some(limit) = self.limit {
            config.limit = limit;
        }
        if let Some(host) = self.placeholder_host {
            config.placeholder_host = host;
        }
        if let Some(set) = self.placeholder_set {
            config.placeholder_set = set;
        }
        config
    }
}

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Command::Build(build_args) => {
            let config = build_args.into_config();
            let records = dataset::build(&config)?;
            println!(
                "wrote {} characters -> {}",
                records.len(),
                config.output.display()
            );
            Ok(ExitCode::SUCCESS)
        }
        Command::Pick(pick_args) => {
            let config = PickConfig {
                dataset: pick_args.data,
                readme: pick_args.readme,
            };
            match picker::run(&config, &mut rand::rng()) {
                Ok(selection) => {
                    println!("Picked: {} / {}", selection.name, selection.bounty);
                    println!("Image: {}", selection.image);
                    Ok(ExitCode::SUCCESS)
                }
                Err(err) => {
                    println!("[ERROR] {err:#}");
                    Ok(ExitCode::FAILURE)
                }
            }
        }
    }
}
