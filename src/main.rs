use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    error::Error,
    io::{self, stdin},
    time::Duration,
};

use typr::{
    app::App,
    config::{self, GameConfig},
    runtime, TICK_RATE_MS,
};

/// terminal typing speed test
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A terminal typing speed test: type against a countdown, check words with space or enter, and watch live per-character feedback and wpm/cpm/accuracy metrics."
)]
struct Cli {
    /// number of seconds on the countdown
    #[clap(
        short = 's',
        long,
        default_value_t = config::DEFAULT_SECONDS,
        value_parser = clap::value_parser!(u16).range(config::MIN_SECONDS as i64..=config::MAX_SECONDS as i64)
    )]
    number_of_secs: u16,

    /// number of words in the round's word list
    #[clap(
        short = 'w',
        long,
        default_value_t = config::DEFAULT_WORD_COUNT,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    number_of_words: usize,
}

impl Cli {
    fn to_config(&self) -> GameConfig {
        GameConfig {
            seconds: self.number_of_secs,
            number_of_words: self.number_of_words,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(cli.to_config());
    let events = runtime::event_stream(Duration::from_millis(TICK_RATE_MS));

    let run = loop {
        if let Err(err) = terminal.draw(|f| f.render_widget(&app, f.area())) {
            break Err(err.into());
        }

        match events.recv() {
            Ok(event) => app.handle_event(event),
            Err(err) => break Err(err.into()),
        }

        if app.should_quit {
            break Ok(());
        }
    };

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run
}
