//! Where the death table comes from: a fresh download or the local cache.

use chrono::Local;
use reqwest::Client;
use tokio::{fs, io::AsyncWriteExt};

use crate::config::Config;
use crate::request::request_page_html;
use crate::{info_time, Error, Result};

/// Returns the document HTML.
///
/// With `refresh` set the page is downloaded and the cache overwritten,
/// otherwise the cache file is read as is.
pub async fn load_document(config: &Config) -> Result<String> {
    if config.refresh {
        let client = Client::new();
        let html = request_page_html(&client, &config.url).await?;
        write_cache(config, &html).await?;
        return Ok(html);
    }

    match fs::read_to_string(&config.cache).await {
        Ok(html) => {
            info_time!("Read cached document {}", config.cache.display());
            Ok(html)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(Error::MissingCache(config.cache.clone()))
        }
        Err(e) => Err(e.into()),
    }
}

async fn write_cache(config: &Config, html: &str) -> Result<()> {
    let local_now = Local::now();
    if let Some(parent) = config.cache.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }
    let mut file = fs::File::create(&config.cache).await?;
    file.write_all(html.as_bytes()).await?;
    file.flush().await?;
    info_time!(local_now, "Cached document to {}", config.cache.display());
    Ok(())
}
