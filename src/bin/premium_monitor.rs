//! Premium Monitor - live terminal dashboard
//!
//! Polls Binance P2P and Yahoo Finance on a fixed interval, keeps a bounded
//! rolling history of premium samples, and renders headline metrics plus a
//! time-series chart.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use premium::application::visualizer::{ui, Dashboard};
use premium::application::Poller;
use premium::config::MonitorConfig;
use premium::infrastructure::client::LiveSource;
use usdt_premium_monitor::bin_common::{load_config_from_env, ConfigType};

fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Note: Logging is disabled for TUI - it would corrupt the alternate screen display

    // Built-in defaults apply when no config file is present
    let config_path = load_config_from_env(ConfigType::Monitor);
    let config = MonitorConfig::load_or_default(&config_path)?;

    // Create tokio runtime for the fetch calls
    let runtime = tokio::runtime::Runtime::new()?;

    let source = LiveSource::new(&config)?;
    let mut poller = Poller::new(source, config.poll.history_capacity);
    let mut dashboard = Dashboard::new();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the main loop
    let result = run_app(
        &mut terminal,
        &runtime,
        &mut poller,
        &mut dashboard,
        config.poll.interval(),
    );

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    runtime: &tokio::runtime::Runtime,
    poller: &mut Poller<LiveSource>,
    dashboard: &mut Dashboard,
    interval: Duration,
) -> Result<()> {
    // First tick fires immediately
    let mut next_tick = Instant::now();

    loop {
        // Draw UI
        terminal.draw(|frame| ui::draw(frame, dashboard))?;

        // Run one poll cycle when the timer elapses
        if Instant::now() >= next_tick {
            let outcome = runtime.block_on(poller.tick());
            dashboard.apply(outcome);
            next_tick = Instant::now() + interval;
        }

        // Handle input with a short timeout so the timer stays responsive
        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') => {
                            dashboard.should_quit = true;
                        }
                        KeyCode::Char('r') => {
                            // Force an immediate tick
                            next_tick = Instant::now();
                        }
                        _ => {}
                    }
                }
            }
        }

        if dashboard.should_quit {
            break;
        }
    }

    Ok(())
}
