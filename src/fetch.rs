use anyhow::{anyhow, Result};
use log::trace;
use reqwest::redirect::Policy;
use scraper::Html;

pub const BASE_URL: &str = "https://sevenseasentertainment.com";

/// Fetches a page body. The site answers some retired slugs with a redirect
/// chain, so at most one hop is followed; a non-success status is the
/// caller's problem to report, never something to parse through.
pub fn fetch_text(url: &str) -> Result<String> {
    trace!("fetch_text({})", url);

    let client = reqwest::blocking::Client::builder()
        .redirect(Policy::limited(1))
        .build()?;

    let response = client.get(url).send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(anyhow!(
            "Failed to retrieve the web page - got response code [{}] for URL [{}]",
            status,
            url
        ));
    }

    Ok(response.text()?)
}

/// Fetches a page and hands back the parsed document tree.
pub fn fetch_document(url: &str) -> Result<Html> {
    Ok(Html::parse_document(&fetch_text(url)?))
}
