use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use note_highlights_config::Config;
use note_highlights_engine::io;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    env,
    io::{Stdout, stdout},
    path::PathBuf,
    process,
    time::{Duration, Instant},
};

mod app;
mod ui;
mod watch;

use app::{App, Settings};
use watch::{Debouncer, NoteWatcher};

/// Quiet period after the last change to the note before it is re-read.
const REFRESH_DEBOUNCE: Duration = Duration::from_millis(150);

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    if args.len() != 2 {
        eprintln!("Usage: {} <note-path>", args[0]);
        eprintln!(
            "Relative paths are resolved against notes_path in {}",
            config_path.display()
        );
        process::exit(1);
    }

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let notes_root = config.as_ref().and_then(|config| {
        match io::validate_notes_dir(&config.notes_path) {
            Ok(()) => Some(config.notes_path.clone()),
            Err(e) => {
                log::warn!(
                    "Ignoring notes path '{}' from config file '{}': {e}",
                    config.notes_path.display(),
                    config_path.display()
                );
                None
            }
        }
    });
    let settings = config.as_ref().map(Settings::from).unwrap_or_default();

    let note_path = io::resolve_note_path(&PathBuf::from(&args[1]), notes_root.as_deref());
    if !note_path.is_file() {
        eprintln!("Error: Note '{}' does not exist", note_path.display());
        process::exit(1);
    }
    log::info!("Opening {}", note_path.display());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let watcher = match NoteWatcher::new(&note_path) {
        Ok(watcher) => Some(watcher),
        Err(e) => {
            log::warn!(
                "Cannot watch {}, checking it on every tick instead: {e}",
                note_path.display()
            );
            None
        }
    };

    let mut app = App::new(note_path, settings);
    let res = run_app(&mut terminal, &mut app, watcher.as_ref());

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    watcher: Option<&NoteWatcher>,
) -> Result<()> {
    let mut debounce = Debouncer::new(REFRESH_DEBOUNCE);
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if !event::poll(REFRESH_DEBOUNCE)? {
            match watcher {
                Some(watcher) => {
                    let now = Instant::now();
                    if watcher.note_touched() {
                        debounce.register(now);
                    }
                    if debounce.ready(now) {
                        app.refresh_if_changed();
                    }
                }
                None => {
                    app.refresh_if_changed();
                }
            }
            continue;
        }

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_highlight(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_highlight(),
                KeyCode::Enter => {
                    app.navigate();
                }
                KeyCode::Char('r') => app.reload(),
                _ => {}
            }
        }
    }
}
