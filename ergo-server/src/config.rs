use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "ergo-dash")]
#[command(about = "Ergonomic assessment and video analysis dashboard")]
pub struct Args {
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    #[arg(short, long, default_value_t = 8050)]
    pub port: u16,

    /// Verbose logs, no-store caching and detailed error bodies.
    #[arg(long)]
    pub debug: bool,

    #[arg(long, default_value = "videos")]
    pub videos_dir: PathBuf,

    #[arg(long, default_value = "ergo-ui/dist")]
    pub ui_dir: PathBuf,

    #[arg(long, default_value_t = ergo_core::sample::DEFAULT_DAYS)]
    pub days: usize,

    /// Seed for reproducible sample data. Never persisted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the composed dashboard as JSON and exit.
    #[arg(long)]
    pub demo: bool,
}

impl Args {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn default_log_filter(&self) -> String {
        let level = if self.debug { "debug" } else { "info" };
        format!("ergo_server={level},tower_http={level}")
    }
}

impl Default for Args {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8050,
            debug: false,
            videos_dir: PathBuf::from("videos"),
            ui_dir: PathBuf::from("ergo-ui/dist"),
            days: ergo_core::sample::DEFAULT_DAYS,
            seed: None,
            demo: false,
        }
    }
}
