use clap::Parser;
use pokedex_cards::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve(args) => cli::serve::run(args).await,
        Command::Lookup(args) => cli::lookup::run(args).await,
    }
}
