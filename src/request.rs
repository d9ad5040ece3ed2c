use chrono::Local;
use reqwest::Client;

use crate::{info_time, Result};

/// Requests a page and returns a `Result<String>` containing the HTML.
pub(crate) async fn request_page_html(client: &Client, url: &str) -> Result<String> {
    info_time!("Requesting {url}");
    let start_time = Local::now();

    let res = client.get(url).send().await?.error_for_status()?;
    let html = res.text().await?;

    info_time!(start_time, "Received {} bytes", html.len());
    Ok(html)
}
