use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::KeyEventKind;
use ratatui::layout::Rect;
use tokio::sync::watch;

use wtop::app::App;
use wtop::config::{Config, ConfigError, load_config, load_config_from_path};
use wtop::event::{Event, EventHandler};
use wtop::logging;
use wtop::system::collector::{Collector, LoadMeter};
use wtop::system::kill::Terminator;
use wtop::system::sampler::Sampler;
use wtop::system::snapshot::SharedSnapshot;
use wtop::ui;

const SAMPLER_JOIN_TIMEOUT: Duration = Duration::from_secs(1);

#[derive(Parser)]
#[command(
    name = "wtop",
    about = "Terminal process monitor: top processes by CPU, press Enter to terminate"
)]
struct Cli {
    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Process sampling interval in milliseconds
    #[arg(long)]
    interval: Option<u64>,

    /// Write logs to this file (the terminal is used by the UI)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let (config, config_error) = load_config_for_cli(cli);
    logging::init(&config.general)?;
    if let Some(err) = config_error {
        tracing::warn!(%err, "using default config");
    }

    let shared = SharedSnapshot::new();
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let sampler = Sampler::new(Collector::new());
    let interval = Duration::from_millis(config.general.sample_interval_ms);
    let sampler_task = tokio::spawn(sampler.run(shared.clone(), interval, shutdown_rx));
    tracing::info!(
        interval_ms = config.general.sample_interval_ms,
        "sampler started"
    );

    let mut app = App::new(
        &config,
        shared,
        Box::new(LoadMeter::new()),
        Box::new(Terminator::new()),
    );
    let frame_poll = Duration::from_millis(config.general.frame_poll_ms.max(1));

    // ratatui::init installs a panic hook that restores the terminal first.
    let mut terminal = ratatui::init();
    let result = run(&mut terminal, &mut app, frame_poll).await;
    ratatui::restore();

    let _ = shutdown_tx.send(true);
    match tokio::time::timeout(SAMPLER_JOIN_TIMEOUT, sampler_task).await {
        Ok(Ok(Ok(()))) => tracing::debug!("sampler joined"),
        Ok(Ok(Err(err))) => tracing::warn!(%err, "sampler exited with an error"),
        Ok(Err(err)) => tracing::warn!(%err, "sampler task failed"),
        Err(_) => tracing::warn!("sampler still running at shutdown, abandoning it"),
    }

    result
}

async fn run(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    frame_poll: Duration,
) -> Result<()> {
    let mut events = EventHandler::new(frame_poll);

    app.on_tick();
    draw(terminal, app)?;

    while app.running {
        match events.next().await? {
            Event::Key(key) => {
                if key.kind == KeyEventKind::Press {
                    let action = app.map_key(key);
                    app.dispatch(action);
                }
            }
            Event::Tick => app.on_tick(),
            Event::Resize => {}
        }
        if app.running {
            draw(terminal, app)?;
        }
    }

    tracing::info!("quit requested");
    Ok(())
}

/// Measures the table against the current screen before drawing, so the
/// cursor can only land on a row that is actually shown.
fn draw(terminal: &mut ratatui::DefaultTerminal, app: &mut App) -> Result<()> {
    let size = terminal.size()?;
    app.set_viewport_rows(ui::table_rows(Rect::new(0, 0, size.width, size.height)));
    terminal.draw(|frame| ui::draw(frame, app))?;
    Ok(())
}

/// Loads the config file and applies CLI overrides. A file that cannot be
/// used falls back to defaults; its error is returned so it can be logged
/// after the subscriber is installed.
fn load_config_for_cli(cli: Cli) -> (Config, Option<ConfigError>) {
    let loaded = match &cli.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };
    let (mut config, error) = match loaded {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };

    if let Some(interval) = cli.interval {
        config.general.sample_interval_ms = interval;
    }
    if let Some(path) = cli.log_file {
        config.general.log_file = Some(path);
    }

    (config, error)
}
