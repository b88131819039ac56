use anyhow::Result;
use clap::Parser;
use text_classification_reader::cli::Cli;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("text_classification_reader=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    cli.run()
}
