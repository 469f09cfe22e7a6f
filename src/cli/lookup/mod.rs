//! Lookup command - runs the loader once and prints the card

use clap::Args;

use crate::api::types::PokemonResponse;
use crate::config::AppConfig;
use crate::domain::Record;
use crate::infrastructure::logging::init_logging;

#[derive(Args, Clone, Debug)]
pub struct LookupArgs {
    /// Name or number, e.g. `pikachu` or `25`
    pub id: String,

    /// Print JSON instead of a text card
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: LookupArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    init_logging(&config.logging);

    let state = crate::create_app_state(&config);
    let record = state.loader.load(&args.id).await?;

    if args.json {
        let response = PokemonResponse::from_domain(&record, &state.placeholder_image);
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print!("{}", render_text(&record, &state.placeholder_image));
    }

    Ok(())
}

/// Both faces of the card as plain text
fn render_text(record: &Record, placeholder_image: &str) -> String {
    let types: Vec<&str> = record.types.iter().map(|t| t.name()).collect();
    let abilities: Vec<String> = record.abilities.iter().map(|a| a.display_name()).collect();

    format!(
        "{name} #{id}\n\
         Types:     {types}\n\
         Artwork:   {artwork}\n\
         Height:    {height}\n\
         Weight:    {weight}\n\
         Abilities: {abilities}\n\
         Cry:       {sound}\n",
        name = record.display_name(),
        id = record.id,
        types = types.join(", "),
        artwork = record.artwork_url(placeholder_image),
        height = record.display_height(),
        weight = record.display_weight(),
        abilities = abilities.join(", "),
        sound = record.sound_path(),
    )
}
