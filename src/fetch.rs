use reqwest::header::USER_AGENT;
use reqwest::{Client, StatusCode};

use crate::error::ScrapeError;

/// Fetch a page with a spoofed browser user agent and return its body.
///
/// Anything other than a plain 200 is an error; the body is decoded as
/// UTF-8 regardless of what the response headers claim, since Apple Music
/// serves UTF-8 but not always a charset header.
pub async fn fetch_page(
    client: &Client,
    url: &str,
    user_agent: &str,
) -> Result<String, ScrapeError> {
    let response = client.get(url).header(USER_AGENT, user_agent).send().await?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(ScrapeError::Status(status));
    }

    let bytes = response.bytes().await?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
