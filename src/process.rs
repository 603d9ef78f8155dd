use std::path::Path;

use chrono::Local;
use reqwest::Client;
use tokio::fs;
use tracing::{error, info};

use crate::download::{download_image, DownloadOutcome};
use crate::parse::{extract_children, Child};
use crate::progress::{PageEvent, ProgressReporter};
use crate::request::fetch_item;
use crate::{info_time, Config, Error, Result};

/// Totals for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub downloaded: usize,
    pub skipped: usize,
    pub bytes: u64,
}

/// Fetches the item `pid`, finds its pages and downloads each one into `output_dir`.
///
/// `output_dir` is created with its parents if missing. Stops at the first page that fails.
pub async fn process_item(
    config: &Config,
    pid: &str,
    output_dir: &Path,
    progress: &mut ProgressReporter,
) -> Result<Summary> {
    let start_time = Local::now();
    let pid = pid.trim();
    if pid.is_empty() {
        return Err(Error::EmptyPid);
    }

    fs::create_dir_all(output_dir).await.map_err(|e| {
        error!("Could not create output directory {}: {e}", output_dir.display());
        Error::fs(output_dir, e)
    })?;

    let client = config.build_client()?;
    info_time!("Fetching item {}", pid);
    let item = fetch_item(&client, config, pid).await?;
    if let Some(title) = item.title() {
        info!("Item {pid}: {title}");
    }

    let children = extract_children(&item).map_err(|e| {
        error!("Item {pid}: {e}");
        Error::from(e)
    })?;
    println!("Found {} child PIDs.", children.len());

    let summary = download_children(&client, config, &children, output_dir, progress).await?;
    info_time!(
        start_time,
        "Item {}: {} downloaded, {} skipped, {} bytes",
        pid,
        summary.downloaded,
        summary.skipped,
        summary.bytes
    );
    Ok(summary)
}

/// Downloads every child in order, one request at a time.
pub async fn download_children(
    client: &Client,
    config: &Config,
    children: &[Child],
    output_dir: &Path,
    progress: &mut ProgressReporter,
) -> Result<Summary> {
    let mut summary = Summary::default();
    progress.start(children.len());

    for (i, child) in children.iter().enumerate() {
        let file_name = child.file_name();
        let dest = output_dir.join(&file_name);
        let image_url = config.image_url(&child.pid);

        let outcome = match download_image(client, &image_url, &dest).await {
            Ok(outcome) => outcome,
            Err(e) => {
                progress.abandon();
                error!("Error processing PID {}: {e}", child.pid);
                return Err(e);
            }
        };

        match outcome {
            DownloadOutcome::Downloaded(len) => {
                summary.downloaded += 1;
                summary.bytes += len;
            }
            DownloadOutcome::Skipped => summary.skipped += 1,
        }
        progress.page_done(PageEvent {
            pid: child.pid.clone(),
            file_name,
            outcome,
            index: i + 1,
            total: children.len(),
        });
    }

    progress.finish();
    Ok(summary)
}
