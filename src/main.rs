use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use lottle::{
    config::{init_settings, FileConfigStore, Overrides},
    lesson::LESSON_COUNT,
    navigation::NavigationController,
    runtime::{CrosstermEventSource, Runner},
    study::Direction,
    words::{DatasetError, WordStore},
    App,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    path::{Path, PathBuf},
};
use tracing::{error, info};

/// learn the thousand most common Italian words, a hundred at a time
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Browse the 1000 most common Italian words in ten lessons of 100 and drill each lesson with shuffled flashcards."
)]
pub struct Cli {
    /// which side of the flashcard is shown first
    #[clap(short = 'd', long, value_enum)]
    direction: Option<Direction>,

    /// open this lesson (1-10) instead of the lesson list
    #[clap(
        short = 'l',
        long,
        value_parser = clap::value_parser!(u32).range(1..=LESSON_COUNT as i64)
    )]
    lesson: Option<u32>,

    /// load the word list from a .json or .csv file instead of the built-in one
    #[clap(short = 'w', long = "words")]
    words_file: Option<PathBuf>,

    /// append diagnostics to this file (filter with LOTTLE_LOG)
    #[clap(long)]
    log_file: Option<PathBuf>,

    /// read preferences from this file instead of the default location
    #[clap(long)]
    config: Option<PathBuf>,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            direction: self.direction,
            words_file: self.words_file.clone(),
            log_file: self.log_file.clone(),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let store = match &cli.config {
        Some(path) => FileConfigStore::with_path(path),
        None => FileConfigStore::new(),
    };
    let settings = init_settings(&store, cli.overrides())?;

    // A malformed word list must fail here, before the terminal is taken over
    let loaded = match &settings.words_file {
        Some(path) => WordStore::from_path(path),
        None => WordStore::italian_1k(),
    };
    let words = match loaded {
        Ok(words) => words,
        Err(err) => {
            let msg = dataset_error_message(settings.words_file.as_deref(), &err);
            error!(%err, "word list rejected");
            Cli::command().error(ErrorKind::InvalidValue, msg).exit();
        }
    };
    info!(
        name = words.name(),
        size = words.len(),
        direction = %settings.direction,
        "word list loaded"
    );

    let mut app = App::new(NavigationController::new(words, settings.direction));
    if let Some(id) = cli.lesson {
        app.open_lesson(id);
    }

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = start_tui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn dataset_error_message(words_file: Option<&Path>, err: &DatasetError) -> String {
    match words_file {
        Some(path) => format!("cannot use word list {}: {err}", path.display()),
        None => format!("built-in word list is unusable: {err}"),
    }
}

fn start_tui<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    let runner = Runner::new(CrosstermEventSource::new());
    runner.run(app, |app| terminal.draw(|f| ui(app, f)).map(|_| ()))?;

    Ok(())
}

fn ui(app: &App, f: &mut Frame) {
    f.render_widget(app, f.area());
}
