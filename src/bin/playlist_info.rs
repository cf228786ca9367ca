use std::error::Error;
use std::io::{self, Write};

use log::error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize the logger
    pretty_env_logger::formatted_builder()
        .filter(None, log::LevelFilter::Info)
        .init();

    // Prompt for the playlist URL
    print!("Playlist URL: ");
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let url = input.trim();

    let client = reqwest::Client::new();

    // A failed playlist fetch ends the run; individual song failures do not
    if let Err(e) = am_scrape::playlist::print_playlist(&client, url).await {
        error!("❌ Fehler beim Laden der Playlist-Seite: {e}");
    }

    Ok(())
}
