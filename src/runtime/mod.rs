use std::env;
use std::path::PathBuf;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::artwork::PlaceholderArtwork;
use crate::library::open_repository;
use crate::share::targets_from_settings;
use crate::strings::{Locale, Strings};

mod event_loop;
mod logging;
mod settings;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings();

    // `validate` already vetted the level; this only matters for defaults.
    let level = settings.log_level().unwrap_or(tracing_subscriber::filter::LevelFilter::INFO);
    let log_path = logging::init(&settings.log, level);
    tracing::info!(log = ?log_path, "vinyl starting");

    // A playlist path on the command line wins over the config file.
    let playlist_path = env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| settings.library.playlist_path.clone());
    let repository = open_repository(playlist_path.as_deref());

    let locale = Locale::detect(settings.ui.locale.as_deref());
    let mut app = App::new(
        repository.list(),
        Strings::new(locale),
        settings.spin_period(),
        Box::new(PlaceholderArtwork),
        targets_from_settings(&settings.share),
    );
    tracing::debug!(?locale, songs = app.navigator().playlist().songs().len(), "app ready");

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if settings.ui.mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &mut app, settings.frame_interval());

    disable_raw_mode()?;
    if settings.ui.mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match &run_result {
        Ok(()) => tracing::info!("vinyl exiting"),
        Err(e) => tracing::error!(error = %e, "vinyl exiting with error"),
    }
    run_result
}
