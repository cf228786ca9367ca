use std::error::Error;
use std::io::{self, Write};

const NOT_FOUND: &str = "(nicht gefunden)";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize the logger
    pretty_env_logger::formatted_builder()
        .filter(None, log::LevelFilter::Info)
        .init();

    // Prompt for the song URL
    print!("Song-URL eingeben:\n> ");
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let url = input.trim();

    let client = reqwest::Client::new();
    let lookup = am_scrape::song::lookup_song(&client, url).await;

    println!("\n----- ERGEBNIS -----");
    println!("Songtitel: {}", lookup.title.as_deref().unwrap_or(NOT_FOUND));
    println!("Künstler: {}", lookup.artist.as_deref().unwrap_or(NOT_FOUND));
    println!("Song-Link: {}", lookup.url.as_deref().unwrap_or(NOT_FOUND));

    Ok(())
}
