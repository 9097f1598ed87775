//! One-shot refresh of the published follower stats.

use std::path::PathBuf;

use clap::Parser;
use linkhub::config::{AppConfig, DataPaths};
use linkhub::logging;
use linkhub::stats::StatsRefresher;
use linkhub_upstream::build_client;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(name = "refresh-stats", version, about = "Fetch follower counts and republish the stats documents")]
struct Args {
    /// Directory holding social.stats.json and media.kit.json
    #[arg(long, env = "DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Fetch and validate, but write nothing
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let mut config = AppConfig::from_env();
    if let Some(dir) = args.data_dir {
        config.data = DataPaths::new(dir);
    }
    let _guard = logging::init_logging(config.log_dir.as_deref())?;

    let http = build_client(config.refresh_timeout);
    let refresher = StatsRefresher::from_config(&config, http).dry_run(args.dry_run);

    match refresher.run_once().await {
        Ok(report) => {
            info!(data_dir = %config.data.data_dir.display(), "Refresh finished: {report}");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Error updating stats");
            Err(e.into())
        }
    }
}
