//! Canonical song URL reconstruction.
//!
//! The two tools carry different id-extraction policies and different
//! country-code defaults. They are intentionally kept as separate functions
//! rather than unified: merging them would change observable output.

use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Url;

/// Numeric song id in the path, optionally preceded by a slug segment,
/// e.g. `/de/song/some-slug/1440857781` or `/song/1440857781`.
static SONG_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/song/(?:[^/]+/)?(\d+)").unwrap());

/// Path-id policy: pull the numeric id out of a `/song/` path and rebuild
/// the URL under the fixed `de` storefront. `None` when no id is present.
pub fn standardize_song_url(url: &str) -> Option<String> {
    let id = SONG_ID_RE.captures(url)?.get(1)?.as_str();
    Some(format!("https://music.apple.com/de/song/{id}"))
}

/// Query-id policy: take the song id from the `i` query parameter and the
/// country code from the first path segment, falling back to `us`.
/// `None` when the URL has no `i` parameter (or does not parse at all).
pub fn song_url_from_query(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let id = parsed
        .query_pairs()
        .find(|(key, _)| key == "i")
        .map(|(_, value)| value.into_owned())?;

    let country = parsed
        .path_segments()
        .and_then(|mut segments| segments.next())
        .filter(|segment| !segment.is_empty())
        .unwrap_or("us");

    Some(format!("https://music.apple.com/{country}/song/{id}"))
}
