use std::sync::Arc;

use linkhub::api::{ApiServer, AppState};
use linkhub::config::AppConfig;
use linkhub::live::LiveStatusService;
use linkhub::logging::{self, LOG_RETENTION_DAYS};
use linkhub_upstream::build_client;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    let _guard = logging::init_logging(config.log_dir.as_deref())?;

    if let Some(dir) = &config.log_dir
        && let Err(e) = logging::cleanup_old_logs(dir, LOG_RETENTION_DAYS).await
    {
        warn!(error = %e, "Log retention cleanup failed");
    }

    info!(
        twitch_configured = config.twitch_configured(),
        public_dir = %config.server.public_dir.display(),
        "Starting linkhub server"
    );

    let http = build_client(config.live_timeout);
    let live_status = Arc::new(LiveStatusService::from_config(&config, http));
    let state = AppState::new(live_status, config.server.public_dir.clone());
    let server = ApiServer::with_state(config.server.clone(), state);

    let cancel_token = server.cancel_token();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Received Ctrl-C");
            cancel_token.cancel();
        }
    });

    server.run().await?;
    Ok(())
}
