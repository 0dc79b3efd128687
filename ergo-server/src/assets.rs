use ergo_core::VideoCatalog;
use std::path::Path;
use tracing::{debug, warn};

/// Marks catalog entries whose local file is missing. Returns how many were marked.
pub fn check_local_videos(catalog: &mut VideoCatalog, videos_dir: &Path) -> usize {
    let missing: Vec<usize> = catalog
        .entries()
        .iter()
        .enumerate()
        .filter_map(|(i, entry)| {
            let file = entry.local_file()?;
            let path = videos_dir.join(file);
            if path.is_file() {
                debug!("video asset found: {}", path.display());
                None
            } else {
                warn!(
                    "video '{}' unavailable: {} not found, showing placeholder",
                    entry.name,
                    path.display()
                );
                Some(i)
            }
        })
        .collect();

    for i in &missing {
        catalog.mark_unavailable(*i);
    }
    missing.len()
}

pub fn ui_index_present(ui_dir: &Path) -> bool {
    ui_dir.join("index.html").is_file()
}
