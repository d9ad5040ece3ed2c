use chrono::Local;
use tokio::task::spawn_blocking;

use crate::aggregate::{aggregate, KillTable};
use crate::classify::{Classifier, Lexicon};
use crate::config::Config;
use crate::export::{render_listing, write_json};
use crate::html::parse_rows;
use crate::source::load_document;
use crate::table::walk;
use crate::{info_time, Result};

/// Fetches or reads the table, counts the kills and exports them.
pub async fn process_site(config: &Config) -> Result<KillTable> {
    let start_time = Local::now();
    info_time!("Started processing");

    let html = load_document(config).await?;
    let table = spawn_blocking({
        let lexicon = config.lexicon.clone();
        move || count_kills(&html, lexicon)
    })
    .await??;
    info_time!(start_time, "Counted kills for {} episodes", table.len());

    if config.listing {
        print!("{}", render_listing(&table));
        println!("TOTAL {}", table.total());
    }
    if config.export {
        write_json(&table, &config.output_dir).await?;
    }

    Ok(table)
}

/// Runs the whole extraction over one HTML document.
pub fn count_kills(html: &str, lexicon: Lexicon) -> Result<KillTable> {
    let classifier = Classifier::new(lexicon)?;
    let rows = parse_rows(html)?;
    aggregate(walk(rows), &classifier)
}
