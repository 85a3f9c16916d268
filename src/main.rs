use stdassess::adapters::ReqwestHttpClient;
use stdassess::app::{App, AppMessage};
use stdassess::cli::{parse_args, run_cli_command, run_info_command, USAGE};
use stdassess::client::AssessClient;
use stdassess::config::AssessConfig;
use stdassess::input::Command;
use stdassess::logging;
use stdassess::terminal::{setup_panic_hook, TerminalManager};
use stdassess::traits::HttpClient;
use stdassess::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use std::process::ExitCode;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info};

/// Frame tick; drives the spinner.
const TICK_INTERVAL: Duration = Duration::from_millis(16);

fn main() -> Result<ExitCode> {
    let args = match parse_args(std::env::args()) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("error: {}\n\n{}", e, USAGE);
            return Ok(ExitCode::from(2));
        }
    };

    // Handle --version / --help before any initialization
    if run_info_command(&args.command) {
        return Ok(ExitCode::SUCCESS);
    }

    color_eyre::install()?;

    let mut config = AssessConfig::from_env();
    if let Some(url) = &args.base_url {
        config = config.with_base_url(url.clone());
    }
    if let Err(e) = config.validate() {
        eprintln!("error: {}", e);
        return Ok(ExitCode::from(2));
    }

    // A missing log file must not keep the tool from running.
    match config.resolved_log_path() {
        Ok(path) => {
            if let Err(e) = logging::init(&path) {
                eprintln!("Warning: logging disabled: {}", e);
            }
        }
        Err(e) => eprintln!("Warning: logging disabled: {}", e),
    }
    info!("stdassess starting, backend {}", config.base_url);

    if let Some(result) = run_cli_command(&args.command, &config) {
        let success = result?;
        return Ok(if success {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run_tui(config))?;
    Ok(ExitCode::SUCCESS)
}

async fn run_tui(config: AssessConfig) -> Result<()> {
    let client = AssessClient::from_config(&config, ReqwestHttpClient::new());
    let mut app = App::new(client);
    app.spawn_health_check();

    let mut manager = TerminalManager::new()?;
    let result = run_app(manager.terminal(), &mut app).await;
    manager.restore()?;

    if let Err(e) = &result {
        error!("event loop failed: {}", e);
    }
    info!("stdassess exiting");
    result
}

async fn run_app<B, C>(terminal: &mut Terminal<B>, app: &mut App<C>) -> Result<()>
where
    B: ratatui::backend::Backend,
    B::Error: Send + Sync + 'static,
    C: HttpClient + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        if app.should_quit {
            return Ok(());
        }

        let timeout = tokio::time::sleep(TICK_INTERVAL);

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(&key);
                    }
                    Some(Ok(Event::Paste(text))) => {
                        app.execute(Command::Paste(text));
                    }
                    Some(Ok(Event::Resize(_, _))) => {
                        app.mark_dirty();
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => return Ok(()),
                }
            }

            Some(msg) = async {
                match message_rx.as_mut() {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                app.handle_message(msg);
            }
        }
    }
}
