//! Output of the finished [`KillTable`]: a JSON document and a sorted text listing.

use std::path::{Path, PathBuf};

use chrono::Local;
use tokio::{fs, io::AsyncWriteExt};

use crate::aggregate::KillTable;
use crate::sort::natural_cmp;
use crate::{info_time, Result, EXPORT_FILE};

/// Writes `table` as JSON to `dir/kills.json`, creating `dir` if needed.
/// Returns the path written.
pub async fn write_json(table: &KillTable, dir: &Path) -> Result<PathBuf> {
    let local_now = Local::now();
    fs::create_dir_all(dir).await?;

    let path = dir.join(EXPORT_FILE);
    let json = serde_json::to_vec(table)?;
    let mut file = fs::File::create(&path).await?;
    file.write_all(&json).await?;
    file.flush().await?;

    info_time!(local_now, "Wrote {} episodes to {}", table.len(), path.display());
    Ok(path)
}

/// One `"{episode} {counts}"` line per episode, in natural episode order.
pub fn render_listing(table: &KillTable) -> String {
    let mut episodes: Vec<_> = table.iter().collect();
    episodes.sort_by(|(a, _), (b, _)| natural_cmp(a, b));

    episodes
        .into_iter()
        .map(|(episode, counts)| format!("{episode} {counts}\n"))
        .collect()
}
