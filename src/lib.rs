//! Scraping library behind the `song-info` and `playlist-info` tools.
//!
//! Apple Music web pages embed their metadata twice: once as a JSON-LD
//! `<script id="schema:song">` blob on song pages, and once as Open Graph /
//! Apple meta tags on playlist pages. The modules here fetch a page, pull
//! those pieces out and rebuild canonical song URLs from whatever id the
//! input URL happens to carry.

pub mod error;
pub mod fetch;
pub mod normalize;
pub mod playlist;
pub mod song;
