pub mod assets;
pub mod config;
pub mod error;
pub mod routes;
pub mod shell;
pub mod state;

use anyhow::Context;
use config::Args;
use tracing::info;

pub async fn serve(args: Args) -> anyhow::Result<()> {
    let state = state::build_state(&args)?;
    let app = routes::dashboard_router(state);

    let addr = args.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("bind {addr}"))?;

    info!(
        "ergo-dash listening on http://{addr} ({} mode)",
        if args.debug { "debug" } else { "production" }
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serve")?;
    info!("ergo-dash stopped");
    Ok(())
}

pub fn run_demo(args: &Args) -> anyhow::Result<()> {
    let state = state::build_state(args)?;
    println!("{}", serde_json::to_string_pretty(&state.dashboard)?);
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
}
