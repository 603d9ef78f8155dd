use std::path::{Path, PathBuf};

use reqwest::Client;
use tokio::{fs, fs::File, io::AsyncWriteExt};
use tracing::{debug, error, warn};

use crate::request::get_checked;
use crate::{Error, Result};

/// What `download_image` did for one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// Body written, with its length in bytes.
    Downloaded(u64),
    /// Destination already existed; nothing was requested.
    Skipped,
}

/// Downloads `image_url` to `dest` unless `dest` already exists.
///
/// The body is streamed into `<dest>.part` and renamed onto `dest` once fully written,
/// so an interrupted run never leaves a truncated file under the final name.
pub async fn download_image(client: &Client, image_url: &str, dest: &Path) -> Result<DownloadOutcome> {
    if fs::try_exists(dest).await.map_err(|e| Error::fs(dest, e))? {
        warn!("Image already exists at {}, skipping download.", dest.display());
        return Ok(DownloadOutcome::Skipped);
    }

    let part = part_path(dest);
    match stream_to_file(client, image_url, &part).await {
        Ok(len) => {
            fs::rename(&part, dest).await.map_err(|e| {
                error!("Failed to move {} into place: {e}", part.display());
                Error::fs(dest, e)
            })?;
            debug!("Image downloaded to {} ({len} bytes)", dest.display());
            Ok(DownloadOutcome::Downloaded(len))
        }
        Err(e) => {
            error!("Failed to download image from {image_url}: {e}");
            // The part file may not exist if the request itself failed.
            let _ = fs::remove_file(&part).await;
            Err(e)
        }
    }
}

async fn stream_to_file(client: &Client, image_url: &str, part: &Path) -> Result<u64> {
    let mut res = get_checked(client, image_url).await?;

    let mut file = File::create(part).await.map_err(|e| Error::fs(part, e))?;
    let mut written = 0u64;
    while let Some(chunk) = res.chunk().await.map_err(|e| Error::network(image_url, e))? {
        file.write_all(&chunk).await.map_err(|e| Error::fs(part, e))?;
        written += chunk.len() as u64;
    }
    file.flush().await.map_err(|e| Error::fs(part, e))?;
    file.sync_all().await.map_err(|e| Error::fs(part, e))?;

    Ok(written)
}

/// `0001.jpg` -> `0001.jpg.part`, next to the destination.
fn part_path(dest: &Path) -> PathBuf {
    let mut name = dest.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".part");
    dest.with_file_name(name)
}
