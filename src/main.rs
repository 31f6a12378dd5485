use littleyears::app::{App, AppMessage};
use littleyears::cli::{parse_args, run_cli_command, CliCommand};
use littleyears::config::PortalConfig;
use littleyears::terminal::{setup_panic_hook, TerminalManager};
use littleyears::{logging, ui};

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use std::time::Duration;
use tokio::sync::mpsc;

/// Event loop tick. Drives the spinner while something is loading.
const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    color_eyre::install()?;

    let command = parse_args(std::env::args())?;
    if run_cli_command(&command) {
        return Ok(());
    }
    let CliCommand::RunTui(overrides) = command else {
        return Ok(());
    };

    let config = overrides
        .apply(PortalConfig::from_env()?)
        .validate()
        .wrap_err("invalid configuration")?;

    // Logging is best effort; the portal works without it.
    if let Err(e) = logging::init_logging(&config.log_filter) {
        eprintln!("Warning: file logging disabled: {}", e);
    }
    tracing::info!(
        backend = %config.backend_url,
        viewer = %config.default_viewer,
        timeout_secs = config.request_timeout_secs,
        "starting portal"
    );

    let runtime = tokio::runtime::Runtime::new()?;
    let mut app = App::new(&config).wrap_err("failed to create HTTP client")?;

    setup_panic_hook();
    let mut term_manager = TerminalManager::new()?;

    let result = runtime.block_on(async {
        app.start();
        run_app(term_manager.terminal(), &mut app).await
    });

    term_manager.restore();
    tracing::info!("portal closed");
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        // Draw only when state changed
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = tokio::time::sleep(TICK) => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key_event(key);
                    }
                    Some(Ok(Event::Paste(text))) => app.handle_paste(&text),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::error!(error = %e, "terminal event stream failed");
                        return Err(e.into());
                    }
                    None => return Ok(()),
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
