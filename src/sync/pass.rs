//! The sequential sync pipeline.

use std::path::Path;

use crate::api::GitLabApi;
use crate::config::Config;
use crate::error::Result;
use crate::fs::paths::{dest_for_entry, ensure_dir, DataLayout, EXPERIMENTS_FILE, IMPRINT_FILE};
use crate::output::{create_item_bar, create_spinner, print_success};
use crate::sync::state::{AssetKind, SyncState};

/// Run one complete sync pass.
///
/// The five steps run strictly in order: experiment metadata, the image
/// folder, the audio folder, the imprint, then the completion banner. The
/// first failure aborts the remaining steps and is returned to the caller;
/// files written before the failure stay on disk.
pub async fn run_sync_pass(
    api: &GitLabApi,
    config: &Config,
    state: &mut SyncState,
) -> Result<()> {
    let layout = DataLayout::new(&config.storage.data_dir);

    tracing::info!("Fetching experiment metadata...");
    download_file(api, config, EXPERIMENTS_FILE, &layout.experiments_path()).await?;
    state.metadata_synced = true;

    sync_folder(
        api,
        config,
        &config.remote.image_folder,
        AssetKind::Image,
        &layout,
        state,
    )
    .await?;

    sync_folder(
        api,
        config,
        &config.remote.audio_folder,
        AssetKind::Audio,
        &layout,
        state,
    )
    .await?;

    tracing::info!("Fetching imprint...");
    download_file(api, config, IMPRINT_FILE, &layout.imprint_path()).await?;
    state.imprint_synced = true;

    print_success("All assets synchronized.");
    Ok(())
}

/// Mirror every file of a remote folder into its local counterpart.
///
/// Entries are fetched one at a time, in listing order; sub-trees and other
/// non-file entries are skipped.
async fn sync_folder(
    api: &GitLabApi,
    config: &Config,
    folder: &str,
    kind: AssetKind,
    layout: &DataLayout,
    state: &mut SyncState,
) -> Result<()> {
    tracing::info!("Syncing {} folder '{}'...", kind, folder);

    let dest_dir = layout.folder_dir(folder);
    ensure_dir(&dest_dir)?;

    let spinner = config
        .options
        .show_downloads
        .then(|| create_spinner(&format!("Listing folder '{}'", folder)));
    let entries = api.list_tree(folder).await?;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let file_count = entries.iter().filter(|entry| entry.is_blob()).count();
    tracing::info!(
        "Folder '{}': {} files, {} other entries",
        folder,
        file_count,
        entries.len() - file_count
    );

    let progress = (config.options.show_downloads && file_count > 0)
        .then(|| create_item_bar(file_count as u64, folder));

    for entry in &entries {
        if !entry.is_blob() {
            state.record_skipped();
            if config.options.show_skipped {
                tracing::debug!("Skipping non-file entry: {}", entry.path);
            }
            continue;
        }

        let dest = dest_for_entry(&dest_dir, &entry.path);
        download_file(api, config, &entry.path, &dest).await?;
        state.record_download(kind);

        if let Some(ref progress) = progress {
            progress.inc(1);
        }
    }

    if let Some(progress) = progress {
        progress.finish_and_clear();
    }

    Ok(())
}

/// Download one repository file to a local destination.
///
/// The whole body is buffered in memory before the write; parent
/// directories are created as needed and an existing file is replaced.
pub async fn download_file(
    api: &GitLabApi,
    config: &Config,
    relative_path: &str,
    dest: &Path,
) -> Result<()> {
    let bytes = api.fetch_raw(relative_path).await?;

    if let Some(parent) = dest.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(dest, &bytes).await?;

    if config.options.show_downloads {
        tracing::info!("Downloaded: {} ({} bytes)", relative_path, bytes.len());
    }

    Ok(())
}
