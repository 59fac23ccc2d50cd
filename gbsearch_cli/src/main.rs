mod commands;
mod config;
mod output;
mod validation;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "gbsearch")]
#[command(about = "Search the Google Books catalogue from the command line")]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for volumes
    Search(commands::search::SearchArgs),
    /// Print the request URL a search would use, without sending it
    Url(commands::search::SearchArgs),
}

fn main() -> Result<()> {
    config::load_dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gbsearch=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Search(args) => commands::search::run(args, &cli.output)?,
        Commands::Url(args) => commands::search::print_url(args)?,
    }

    Ok(())
}
