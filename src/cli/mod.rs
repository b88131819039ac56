// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and routes to Layer 2.
//
//   1. `read` — read a dataset and print a per-split summary
//   2. `list` — show registered datasets and readers

pub mod commands;

use anyhow::Result;
use burn::backend::NdArray;
use clap::Parser;
use commands::{Commands, ReadArgs};

use crate::application::read_use_case::ReadUseCase;
use crate::data::registry::ProviderRegistry;
use crate::infra::reader_registry::ReaderRegistry;
use crate::infra::seed::init_seed;

#[derive(Parser, Debug)]
#[command(
    name = "text-classification-reader",
    version,
    about = "Read text classification datasets into (text, label) splits."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Route to the matching handler; no work happens here.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Read(args) => Self::run_read(args),
            Commands::List       => Self::run_list(),
        }
    }

    fn run_read(args: ReadArgs) -> Result<()> {
        init_seed::<NdArray>(args.seed);

        let data = ReadUseCase::new(args.into()).execute()?;

        for (name, samples) in data.iter() {
            println!("{name:<8} {:>8} samples", samples.len());
        }
        Ok(())
    }

    fn run_list() -> Result<()> {
        println!("Datasets:");
        for name in ProviderRegistry::with_defaults().names() {
            println!("  {name}");
        }
        println!("Readers:");
        for name in ReaderRegistry::with_defaults().names() {
            println!("  {name}");
        }
        Ok(())
    }
}
