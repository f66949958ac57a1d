use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;
use std::time::Instant;

use docqa::api;
use docqa::app::App;
use docqa::cli::{self, Args};
use docqa::config::{self, Config};
use docqa::notification::{Broadcaster, ConsoleSurface};

fn main() -> Result<()> {
    // Writes to /tmp/docqa-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    init_debug_log()?;

    color_eyre::install()?;

    // Load config early to avoid defaults during app initialization
    let config_result = config::load_config();

    let args = Args::parse();
    let config = config_result
        .config
        .clone()
        .with_base_url(args.api_url.clone());

    // One broadcaster per process, shared by every surface
    let notifications = Broadcaster::new();

    if let Some(command) = &args.command {
        let _console = ConsoleSurface::attach(&notifications);
        if let Some(warning) = &config_result.warning {
            notifications.error(warning.clone());
        }
        cli::run_command(&notifications, command, &config, args.json)?;
        return Ok(());
    }

    let terminal = init_terminal()?;

    let app = App::new(&config, notifications);
    let result = run(terminal, app, &config, config_result.warning);

    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== DOCQA DEBUG SESSION ENDED ===");

    Ok(())
}

#[cfg(debug_assertions)]
fn init_debug_log() -> Result<()> {
    use std::io::Write;

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("/tmp/docqa-debug.log")?;

    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Debug)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .format(|buf, record| {
            use std::time::SystemTime;
            let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
            writeln!(
                buf,
                "[{}] [{}] {}",
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();

    log::debug!("=== DOCQA DEBUG SESSION STARTED ===");
    Ok(())
}

/// Initialize terminal with raw mode, alternate screen, and bracketed paste
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(stdout(), EnterAlternateScreen, EnableBracketedPaste) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(
    mut terminal: DefaultTerminal,
    mut app: App,
    config: &Config,
    config_warning: Option<String>,
) -> Result<()> {
    if let Some(warning) = config_warning {
        app.notifications.error(warning);
    }

    setup_api_worker(&mut app, config);
    app.refresh_documents();

    loop {
        // Expire toasts and apply worker responses before drawing
        app.tick(Instant::now());

        if app.should_render() {
            terminal.draw(|frame| app.render(frame))?;
            app.clear_dirty();
        }

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    // Abandon a question still in flight so the worker can exit promptly
    app.ask.cancel();
    Ok(())
}

/// Set up the API worker thread and channels
fn setup_api_worker(app: &mut App, config: &Config) {
    let (request_tx, request_rx) = std::sync::mpsc::channel();
    let (response_tx, response_rx) = std::sync::mpsc::channel();
    app.set_channels(request_tx, response_rx);

    api::spawn_worker(&config.api, request_rx, response_tx);
}
