//! CLI module for the Pokédex card viewer
//!
//! - `serve`: HTTP server with the search and card pages
//! - `lookup`: fetch one Pokémon and print its card

pub mod lookup;
pub mod serve;

use clap::{Parser, Subcommand};

/// Pokédex card viewer - search a Pokémon and flip through its card
#[derive(Parser)]
#[command(name = "pokedex-cards")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the web server
    Serve(serve::ServeArgs),

    /// Look up one Pokémon and print it
    Lookup(lookup::LookupArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_with_port() {
        let cli = Cli::try_parse_from(["pokedex-cards", "serve", "--port", "3000"]).unwrap();

        match cli.command {
            Command::Serve(args) => assert_eq!(args.port, Some(3000)),
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_parse_lookup() {
        let cli = Cli::try_parse_from(["pokedex-cards", "lookup", "Pikachu", "--json"]).unwrap();

        match cli.command {
            Command::Lookup(args) => {
                assert_eq!(args.id, "Pikachu");
                assert!(args.json);
            }
            _ => panic!("expected lookup"),
        }
    }

    #[test]
    fn test_lookup_requires_id() {
        assert!(Cli::try_parse_from(["pokedex-cards", "lookup"]).is_err());
    }
}
