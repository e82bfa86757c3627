//! Headless premium poller with tracing output
//!
//! Runs the same poll cycle as the dashboard but logs each tick instead of
//! rendering. Useful for checking source connectivity and premium values
//! without a TUI. Stop with Ctrl+C.

use anyhow::Result;
use tracing::{info, warn};

use premium::application::{Poller, TickOutcome};
use premium::config::MonitorConfig;
use premium::infrastructure::client::LiveSource;
use premium::infrastructure::logging::init_tracing;
use premium::utils::ShutdownManager;
use usdt_premium_monitor::bin_common::{load_config_from_env, ConfigType};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    init_tracing();

    let config_path = load_config_from_env(ConfigType::Monitor);
    let config = MonitorConfig::load_or_default(&config_path)?;

    info!("Starting source probe");
    info!(
        "Poll interval {}s, timeout {}s, history capacity {}",
        config.poll.interval_secs, config.poll.request_timeout_secs, config.poll.history_capacity
    );

    let source = LiveSource::new(&config)?;
    let mut poller = Poller::new(source, config.poll.history_capacity);

    let shutdown = ShutdownManager::new();
    shutdown.spawn_signal_handler();

    while shutdown.is_running() {
        match poller.tick().await {
            TickOutcome::Sampled { sample, snapshot } => {
                info!(
                    "[{}] premium {:+.2}% mid {:.3} rate {:.4} ({} samples)",
                    sample.time_label(),
                    sample.premium_rate,
                    sample.usdt_mid,
                    sample.usd_cny,
                    snapshot.len()
                );
            }
            TickOutcome::Pending { timestamp } => {
                warn!("[{}] data pending", timestamp.format("%H:%M:%S"));
            }
        }

        shutdown.interruptible_sleep(config.poll.interval()).await;
    }

    info!("Source probe stopped");
    Ok(())
}
