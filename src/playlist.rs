//! Playlist page extraction and reporting.
//!
//! Playlist metadata lives in meta tags: `apple:title` for the name,
//! `og:url` for the canonical link, and two repeated sequences
//! (`music:song`, `music:song:track`) for the songs themselves. The two
//! sequences carry no correlation key; they are paired purely by the order
//! in which the page emits them. A page that emits them in different orders
//! or counts silently mispairs tracks.

use log::warn;
use reqwest::Client;
use scraper::{Html, Selector};

use crate::error::ScrapeError;
use crate::fetch::fetch_page;
use crate::song;

/// User agent for the playlist page itself.
const PLAYLIST_UA: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

const UNKNOWN_TITLE: &str = "Unbekannter Titel";
const UNKNOWN_CREATOR: &str = "Unbekannter Ersteller";

/// One song entry collected from the playlist page, before its own page has
/// been fetched. `track` is 0 when the page carried no parseable number.
#[derive(Debug, PartialEq, Eq)]
pub struct SongReference {
    pub track: i64,
    pub url: String,
}

/// Everything extracted from one playlist page, songs already sorted by
/// track number.
#[derive(Debug)]
pub struct PlaylistSummary {
    pub title: String,
    pub creator: String,
    pub canonical_url: String,
    pub songs: Vec<SongReference>,
}

/// Extract the playlist summary from a parsed page. `fallback_url` is the
/// URL the caller fetched, used when the page has no `og:url`.
pub fn parse_summary(document: &Html, fallback_url: &str) -> PlaylistSummary {
    let title = meta_content(document, r#"meta[name="apple:title"]"#)
        .unwrap_or_else(|| UNKNOWN_TITLE.to_string());

    let creator = creator_from_title(&title_text(document));

    let canonical_url = meta_content(document, r#"meta[property="og:url"]"#)
        .unwrap_or_else(|| fallback_url.to_string());

    let mut songs = song_references(document);
    // Stable, so equal track numbers keep their page order.
    songs.sort_by_key(|song| song.track);

    PlaylistSummary { title, creator, canonical_url, songs }
}

/// Pull the creator out of the page `<title>` text.
///
/// The page title follows the literal pattern
/// `<PlaylistName> by <Creator> - Apple Music`; anything else falls back to
/// the sentinel. This is a plain string split, kept exactly that fragile on
/// purpose: the creator is whatever sits between the first and second
/// `" by "`, so a creator whose own name contains `" by "` gets cut short.
pub fn creator_from_title(title_text: &str) -> String {
    let text = title_text.replace('\u{feff}', "");
    if text.contains(" by ") && text.contains(" - Apple Music") {
        if let Some(segment) = text.splitn(3, " by ").nth(1) {
            let creator = segment
                .split_once(" - Apple Music")
                .map(|(creator, _)| creator)
                .unwrap_or(segment);
            return creator.trim().to_string();
        }
    }
    UNKNOWN_CREATOR.to_string()
}

/// Collect the song URL and track number meta sequences and zip them
/// positionally. Query strings are stripped from the URLs; unparseable
/// track numbers become 0.
pub fn song_references(document: &Html) -> Vec<SongReference> {
    let song_selector = Selector::parse(r#"meta[property="music:song"]"#).unwrap();
    let track_selector = Selector::parse(r#"meta[property="music:song:track"]"#).unwrap();

    let urls = document
        .select(&song_selector)
        .filter_map(|element| element.value().attr("content"));
    let tracks = document
        .select(&track_selector)
        .filter_map(|element| element.value().attr("content"));

    urls.zip(tracks)
        .map(|(url, track)| SongReference {
            track: track.trim().parse().unwrap_or(0),
            url: url.split('?').next().unwrap_or(url).to_string(),
        })
        .collect()
}

fn meta_content(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).unwrap();
    document
        .select(&selector)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(str::to_owned)
}

fn title_text(document: &Html) -> String {
    let selector = Selector::parse("title").unwrap();
    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>())
        .unwrap_or_default()
        .trim()
        .to_string()
}

/// Fetch a playlist page, print its summary and then one line per song in
/// track order. Only the playlist fetch itself can fail; each song fetch
/// degrades to sentinel values on its own.
pub async fn print_playlist(client: &Client, playlist_url: &str) -> Result<(), ScrapeError> {
    let body = fetch_page(client, playlist_url, PLAYLIST_UA).await?;

    let summary = {
        let document = Html::parse_document(&body);
        parse_summary(&document, playlist_url)
    };

    println!("Playlist Name: {}", summary.title);
    println!("Playlist Creator: {}", summary.creator);
    println!("Playlist URL: {}", summary.canonical_url);
    println!("Playlist Songs:");

    if summary.songs.is_empty() {
        warn!("Keine Songs auf der Playlist-Seite gefunden");
        println!("❗️Keine Songs gefunden.");
        return Ok(());
    }

    for reference in &summary.songs {
        let info = song::fetch_song_info(client, &reference.url).await;
        println!("- {} - {} ({})", info.title, info.artist, info.url);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(head: &str) -> Html {
        Html::parse_document(&format!("<html><head>{head}</head><body></body></html>"))
    }

    #[test]
    fn creator_is_taken_from_matching_title() {
        assert_eq!(creator_from_title("MyMix by Jane Doe - Apple Music"), "Jane Doe");
    }

    #[test]
    fn creator_is_segment_between_by_markers() {
        assert_eq!(creator_from_title("Stand by Me by Ben - Apple Music"), "Me");
        assert_eq!(creator_from_title("A by B by C by D - Apple Music"), "B");
    }

    #[test]
    fn creator_strips_bom_and_whitespace() {
        assert_eq!(
            creator_from_title("\u{feff}Mix by  Jane  - Apple Music"),
            "Jane"
        );
    }

    #[test]
    fn non_matching_title_falls_back() {
        assert_eq!(creator_from_title("Some Random Page"), UNKNOWN_CREATOR);
        assert_eq!(creator_from_title("Mix by Jane"), UNKNOWN_CREATOR);
        assert_eq!(creator_from_title("Mix - Apple Music"), UNKNOWN_CREATOR);
    }

    #[test]
    fn songs_are_sorted_with_unparseable_tracks_first() {
        let document = page(
            r#"<meta property="music:song" content="https://x/song/2?l=en"/>
               <meta property="music:song" content="https://x/song/1"/>
               <meta property="music:song" content="https://x/song/0"/>
               <meta property="music:song:track" content="2"/>
               <meta property="music:song:track" content="1"/>
               <meta property="music:song:track" content="x"/>"#,
        );
        let summary = parse_summary(&document, "https://fallback");
        let order: Vec<(i64, &str)> = summary
            .songs
            .iter()
            .map(|song| (song.track, song.url.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                (0, "https://x/song/0"),
                (1, "https://x/song/1"),
                (2, "https://x/song/2"),
            ]
        );
    }

    #[test]
    fn pairing_truncates_to_the_shorter_sequence() {
        let document = page(
            r#"<meta property="music:song" content="https://x/song/1"/>
               <meta property="music:song" content="https://x/song/2"/>
               <meta property="music:song:track" content="1"/>"#,
        );
        assert_eq!(
            song_references(&document),
            vec![SongReference { track: 1, url: "https://x/song/1".to_string() }]
        );
    }

    #[test]
    fn summary_falls_back_to_sentinels() {
        let document = page("<title>Something Else</title>");
        let summary = parse_summary(&document, "https://input.example/pl");
        assert_eq!(summary.title, UNKNOWN_TITLE);
        assert_eq!(summary.creator, UNKNOWN_CREATOR);
        assert_eq!(summary.canonical_url, "https://input.example/pl");
        assert!(summary.songs.is_empty());
    }

    #[test]
    fn summary_reads_meta_tags() {
        let document = page(
            r#"<title>MyMix by Jane Doe - Apple Music</title>
               <meta name="apple:title" content="MyMix"/>
               <meta property="og:url" content="https://music.apple.com/de/playlist/p.1"/>"#,
        );
        let summary = parse_summary(&document, "https://fallback");
        assert_eq!(summary.title, "MyMix");
        assert_eq!(summary.creator, "Jane Doe");
        assert_eq!(summary.canonical_url, "https://music.apple.com/de/playlist/p.1");
    }
}
