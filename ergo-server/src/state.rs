use crate::assets;
use crate::config::Args;
use ergo_core::{Dashboard, SampleParams, SampleTable, VideoCatalog};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

/// Built once before serving; handlers only read it.
pub struct AppState {
    pub table: SampleTable,
    pub catalog: VideoCatalog,
    pub dashboard: Dashboard,
    pub videos_dir: PathBuf,
    pub ui_dir: PathBuf,
    pub debug: bool,
}

pub type SharedState = Arc<AppState>;

pub fn build_state(args: &Args) -> anyhow::Result<SharedState> {
    let params = SampleParams::last_days(args.days)?;
    let table = SampleTable::generate_seeded(params, args.seed);
    info!(
        "generated {} sample rows ending {}{}",
        table.len(),
        params.end(),
        args.seed.map(|s| format!(" (seed {s})")).unwrap_or_default()
    );

    let mut catalog = VideoCatalog::sample()?;
    let missing = assets::check_local_videos(&mut catalog, &args.videos_dir);
    info!("video catalog: {} entries, {} unavailable", catalog.len(), missing);

    if !assets::ui_index_present(&args.ui_dir) {
        warn!(
            "no UI bundle at {}, serving the built-in page shell",
            args.ui_dir.display()
        );
    }

    let dashboard = Dashboard::compose(&table, &catalog);
    Ok(Arc::new(AppState {
        table,
        catalog,
        dashboard,
        videos_dir: args.videos_dir.clone(),
        ui_dir: args.ui_dir.clone(),
        debug: args.debug,
    }))
}
