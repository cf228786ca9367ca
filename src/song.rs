//! Song page extraction: locate the embedded JSON-LD record and map its
//! fields to title and artist.

use log::{error, warn};
use reqwest::Client;
use scraper::{Html, Selector};
use serde::Deserialize;
use serde_json::Value;

use crate::error::ScrapeError;
use crate::fetch::fetch_page;
use crate::normalize;

/// Placeholder used whenever a field cannot be extracted in the playlist
/// variant. The query variant reports missing fields as `None` instead.
pub const UNKNOWN: &str = "Unbekannt";

/// User agent for direct song lookups (`song-info`).
const BROWSER_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/111.0.0.0 Safari/537.36";

/// User agent for the per-song fetches inside a playlist run.
const MINIMAL_UA: &str = "Mozilla/5.0";

/// The `schema:song` JSON-LD record. Only `name` is typed; the `audio`
/// subtree varies too much in practice and is navigated field by field.
#[derive(Debug, Deserialize)]
pub struct SongSchema {
    pub name: Option<String>,
    #[serde(default)]
    audio: Value,
}

impl SongSchema {
    /// First artist under `audio.byArtist`, if the whole chain is present
    /// and well-formed. Any step missing or of the wrong shape yields `None`.
    pub fn primary_artist(&self) -> Option<&str> {
        self.audio
            .get("byArtist")?
            .as_array()?
            .first()?
            .get("name")?
            .as_str()
    }
}

/// Locate the single `<script id="schema:song" type="application/ld+json">`
/// element and decode its body.
pub fn find_song_schema(document: &Html) -> Result<SongSchema, ScrapeError> {
    let selector =
        Selector::parse(r#"script[id="schema:song"][type="application/ld+json"]"#).unwrap();
    let script = document
        .select(&selector)
        .next()
        .ok_or(ScrapeError::MissingJsonLd)?;
    let body: String = script.text().collect();
    Ok(serde_json::from_str(&body)?)
}

/// Extraction result in the playlist variant; missing fields degrade to
/// [`UNKNOWN`], never to an error.
pub struct SongInfo {
    pub title: String,
    pub artist: String,
    pub url: String,
}

/// Extraction result in the query variant; every field may be absent.
pub struct SongLookup {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub url: Option<String>,
}

impl SongLookup {
    fn not_found() -> Self {
        Self { title: None, artist: None, url: None }
    }
}

/// Fetch and extract one song for a playlist run.
///
/// The URL is standardized to the `de` storefront first; when no numeric id
/// can be found there is nothing to fetch and the original URL comes back
/// with both fields unknown. All fetch and parse failures are logged and
/// degrade the same way, so one broken song never aborts the playlist.
pub async fn fetch_song_info(client: &Client, song_url: &str) -> SongInfo {
    let standardized = match normalize::standardize_song_url(song_url) {
        Some(url) => url,
        None => {
            return SongInfo {
                title: UNKNOWN.to_string(),
                artist: UNKNOWN.to_string(),
                url: song_url.to_string(),
            }
        }
    };

    match extract(client, &standardized, MINIMAL_UA).await {
        Ok((title, artist)) => SongInfo {
            title: title.unwrap_or_else(|| UNKNOWN.to_string()),
            artist: artist.unwrap_or_else(|| UNKNOWN.to_string()),
            url: standardized,
        },
        Err(e) => {
            warn!("Fehler beim Abrufen von {standardized}: {e}");
            SongInfo {
                title: UNKNOWN.to_string(),
                artist: UNKNOWN.to_string(),
                url: standardized,
            }
        }
    }
}

/// Fetch and extract one song for `song-info`.
///
/// Unlike [`fetch_song_info`] this fetches the input URL as given and only
/// uses the query-id policy to build the link printed afterwards.
pub async fn lookup_song(client: &Client, url: &str) -> SongLookup {
    let (title, artist) = match extract(client, url, BROWSER_UA).await {
        Ok(fields) => fields,
        Err(e) => {
            error!("Fehler: {e}");
            return SongLookup::not_found();
        }
    };

    let song_url = normalize::song_url_from_query(url).unwrap_or_else(|| url.to_string());

    SongLookup { title, artist, url: Some(song_url) }
}

async fn extract(
    client: &Client,
    url: &str,
    user_agent: &str,
) -> Result<(Option<String>, Option<String>), ScrapeError> {
    let body = fetch_page(client, url, user_agent).await?;
    let document = Html::parse_document(&body);
    let schema = find_song_schema(&document)?;
    let artist = schema.primary_artist().map(str::to_owned);
    Ok((schema.name, artist))
}
