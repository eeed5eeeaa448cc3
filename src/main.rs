use clap::Parser;
use loopzy::core::config;
use loopzy::tui::{self, RunOptions};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "loopzy", about = "Loopzy short-video client")]
struct Args {
    /// Deep link to open at startup, e.g. https://loopzy.app/profile?id=42
    #[arg(short, long)]
    deep_link: Option<String>,

    /// Start signed in as the demo user
    #[arg(long)]
    demo_login: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,

    /// Log file path
    #[arg(long, default_value = "loopzy.log")]
    log_file: PathBuf,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let (file_config, config_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => (config::LoopzyConfig::default(), Some(e)),
    };
    let resolved = config::resolve(&file_config, args.log_level.as_deref());

    // File logger: the terminal belongs to the TUI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    log::info!("Loopzy starting up");
    if let Some(e) = config_error {
        log::warn!("Ignoring config file: {}", e);
    }

    tui::run(
        resolved,
        RunOptions {
            deep_link: args.deep_link,
            demo_login: args.demo_login,
        },
    )
}
