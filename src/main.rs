use anyhow::{Context, Result as AnyhowResult};
use clap::Parser;
use crossterm::event::{
    poll as event_poll, read as event_read, DisableMouseCapture, EnableMouseCapture,
    Event as CrosstermEvent, KeyEventKind,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use duotone::app::App;
use duotone::config::Config;
use duotone::services::tracing_setup;
use duotone::view::theme::ThemeSet;
use ratatui::Terminal;
use std::{
    io::{self, stdout},
    path::PathBuf,
    time::Duration,
};

/// A terminal demo of light/dark theme switching
#[derive(Parser, Debug)]
#[command(name = "duotone")]
#[command(about = "Toggle a shared light/dark theme across two nested panels", long_about = None)]
#[command(version)]
struct Args {
    /// Starting theme mode ("light" or "dark"), overrides the config file
    #[arg(long, value_name = "MODE")]
    theme: Option<String>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to log file for diagnostics (default: system temp dir)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Disable mouse capture
    #[arg(long)]
    no_mouse: bool,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,
}

/// Resolve CLI overrides on top of the loaded config.
fn effective_config(args: &Args) -> AnyhowResult<Config> {
    let mut config = Config::load_or_default(args.config.as_deref())?;
    if let Some(theme) = &args.theme {
        config.theme = theme.clone();
    }
    if args.no_mouse {
        config.mouse_enabled = false;
    }
    Ok(config)
}

fn setup_terminal(
    mouse_enabled: bool,
) -> AnyhowResult<Terminal<ratatui::backend::CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    stdout()
        .execute(EnterAlternateScreen)
        .context("Failed to enter alternate screen")?;
    if mouse_enabled {
        stdout()
            .execute(EnableMouseCapture)
            .context("Failed to enable mouse capture")?;
    }

    let backend = ratatui::backend::CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;
    Ok(terminal)
}

/// Best-effort terminal restore; also used by the panic hook, so it must
/// never panic itself.
fn restore_terminal() {
    let _ = stdout().execute(DisableMouseCapture);
    let _ = stdout().execute(LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

fn main() -> AnyhowResult<()> {
    let args = Args::parse();

    // Handle --dump-config early (no terminal setup needed)
    if args.dump_config {
        let config = effective_config(&args)?;
        let json =
            serde_json::to_string_pretty(&config).context("Failed to serialize config")?;
        println!("{}", json);
        return Ok(());
    }

    let log_file = args
        .log_file
        .clone()
        .unwrap_or_else(tracing_setup::default_log_path);
    if let Err(e) = tracing_setup::init_global(&log_file) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    let config = effective_config(&args).context("Failed to load configuration")?;
    tracing::info!(theme = %config.theme, "duotone starting");

    let themes = ThemeSet::load(config.themes_dir.as_deref());

    // Restore the terminal before the default panic output so the message
    // lands on a usable screen
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        restore_terminal();
        original_hook(panic);
    }));

    let mut terminal = setup_terminal(config.mouse_enabled)?;
    let mut app = App::new(&config, themes);

    let result = run_event_loop(&mut app, &mut terminal);

    restore_terminal();
    tracing::info!("duotone exiting");

    result.context("Event loop returned an error")
}

/// Main event loop: render when state changed, then poll for input with a
/// short timeout.
fn run_event_loop(
    app: &mut App,
    terminal: &mut Terminal<ratatui::backend::CrosstermBackend<io::Stdout>>,
) -> AnyhowResult<()> {
    const POLL_TIMEOUT: Duration = Duration::from_millis(50);
    let mut needs_render = true;

    loop {
        if app.should_quit() {
            break;
        }

        if needs_render {
            terminal.draw(|frame| app.render(frame))?;
            needs_render = false;
        }

        if !event_poll(POLL_TIMEOUT)? {
            continue;
        }

        match event_read()? {
            CrosstermEvent::Key(key_event) => {
                if key_event.kind == KeyEventKind::Press {
                    tracing::trace!(code = ?key_event.code, modifiers = ?key_event.modifiers, "key event");
                    app.handle_key(key_event);
                    needs_render = true;
                }
            }
            CrosstermEvent::Mouse(mouse_event) => {
                if app.handle_mouse(mouse_event) {
                    needs_render = true;
                }
            }
            CrosstermEvent::Resize(w, h) => {
                tracing::debug!("terminal resized to {}x{}", w, h);
                needs_render = true;
            }
            _ => {}
        }
    }

    Ok(())
}
