//! Graceful shutdown for the headless poll loop

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tokio::time::sleep;
use tracing::info;

/// Ctrl+C-driven shutdown flag with an interruptible sleep
pub struct ShutdownManager {
    flag: Arc<AtomicBool>,
}

impl ShutdownManager {
    pub fn new() -> Self {
        Self {
            flag: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Spawn a Ctrl+C handler that flips the flag
    pub fn spawn_signal_handler(&self) {
        let flag = Arc::clone(&self.flag);
        tokio::spawn(async move {
            if signal::ctrl_c().await.is_ok() {
                info!("Received shutdown signal, stopping after current tick");
                flag.store(false, Ordering::Release);
            }
        });
    }

    pub fn is_running(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }

    /// Sleep the inter-tick delay, waking early on shutdown
    pub async fn interruptible_sleep(&self, duration: Duration) {
        const CHECK_INTERVAL: Duration = Duration::from_millis(50);

        let mut elapsed = Duration::ZERO;
        while elapsed < duration && self.is_running() {
            sleep(CHECK_INTERVAL).await;
            elapsed += CHECK_INTERVAL;
        }
    }
}

impl Default for ShutdownManager {
    fn default() -> Self {
        Self::new()
    }
}
