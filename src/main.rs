use std::sync::Arc;
use std::time::Duration;

use clgmate::adapters::{JsonFileProfileSource, SimulatedAdSdk, StaticProfileSource};
use clgmate::ads::AdGateway;
use clgmate::app::{App, AppMessage};
use clgmate::cli::{parse_args, CliCommand, HELP_TEXT};
use clgmate::error::{ClgError, UiError};
use clgmate::startup::{init_logging, AppConfig};
use clgmate::terminal::{install_hooks, TerminalManager};
use clgmate::traits::{AdSdk, ProfileSource};
use clgmate::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use tokio::sync::mpsc;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Frame interval of the event loop.
const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    install_hooks()?;

    let overrides = match parse_args(std::env::args())? {
        CliCommand::Version => {
            println!("clgmate {}", VERSION);
            return Ok(());
        }
        CliCommand::Help => {
            print!("{}", HELP_TEXT);
            return Ok(());
        }
        CliCommand::Run(overrides) => overrides,
    };

    if init_logging().is_none() {
        eprintln!("Warning: logging disabled (could not open the log file)");
    }

    let config = AppConfig::from_env()
        .map_err(ClgError::from)?
        .apply_overrides(&overrides);
    tracing::info!(?config, "Starting clgmate {}", VERSION);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run(config))
}

async fn run(config: AppConfig) -> Result<()> {
    let profile_source: Arc<dyn ProfileSource> = match &config.profiles_path {
        Some(path) => Arc::new(JsonFileProfileSource::new(path)),
        None => Arc::new(StaticProfileSource::builtin()),
    };
    let ad_sdk: Arc<dyn AdSdk> = Arc::new(SimulatedAdSdk::default());
    let ads = AdGateway::initialize_or_disable(config.ads.clone(), ad_sdk.as_ref()).await;

    let mut app = App::new(config, ads, profile_source, ad_sdk);
    let mut manager = TerminalManager::new().map_err(ClgError::from)?;
    app.start();

    let result = run_app(manager.terminal(), &mut app).await;

    app.close_home();
    manager.restore();
    tracing::info!(
        impressions = app.ad_analytics.impressions,
        clicks = app.ad_analytics.clicks,
        "Session ended"
    );
    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let mut message_rx: mpsc::UnboundedReceiver<AppMessage> = app
        .message_rx
        .take()
        .ok_or(ClgError::Ui(UiError::ChannelClosed))?;

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = tokio::time::sleep(TICK) => {
                app.tick();
            }

            event = event_stream.next() => {
                match event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key_event(key);
                    }
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => return Ok(()),
                }
            }

            message = message_rx.recv() => {
                match message {
                    Some(message) => app.handle_message(message),
                    // App holds a sender, so this only happens on teardown.
                    None => return Ok(()),
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
