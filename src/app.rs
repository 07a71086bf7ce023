use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::{self, GameConfig};
use crate::game::{Game, Phase};
use crate::runtime::AppEvent;
use crate::words;

/// The duration entry never needs more than three digits.
const MAX_ENTRY_LEN: usize = 3;

/// App shell around the game: owns the duration entry field and routes
/// events by phase. Rendering reads this struct, nothing else.
#[derive(Debug)]
pub struct App {
    pub game: Game,
    pub seconds_entry: String,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: GameConfig) -> Self {
        let words = words::generate(config.number_of_words);

        Self {
            game: Game::new(words, config),
            seconds_entry: String::new(),
            should_quit: false,
        }
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick => self.game.on_tick(),
            AppEvent::Resize => {}
            AppEvent::Key(key) => self.handle_key(key),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        // Chorded keys carry no visible character; ctrl-c quits.
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                self.should_quit = true;
            }
            return;
        }

        if key.code == KeyCode::Esc {
            self.should_quit = true;
            return;
        }

        match self.game.phase {
            Phase::Started => match key.code {
                KeyCode::Backspace => self.game.backspace(),
                KeyCode::Enter => self.game.submit_word(),
                KeyCode::Char(' ') => self.game.submit_word(),
                KeyCode::Char(c) => self.game.type_char(c),
                _ => {}
            },
            Phase::Waiting | Phase::Finished => match key.code {
                KeyCode::Enter => self.start_round(),
                KeyCode::Backspace => {
                    self.seconds_entry.pop();
                }
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    if self.seconds_entry.len() < MAX_ENTRY_LEN {
                        self.seconds_entry.push(c);
                    }
                }
                _ => {}
            },
        }
    }

    /// The start/restart action: reads the duration entry (invalid or empty
    /// input silently keeps the configured duration) and enters a round,
    /// regenerating the word list when leaving Finished.
    fn start_round(&mut self) {
        let requested = config::parse_seconds(&self.seconds_entry);

        match self.game.phase {
            Phase::Started => {}
            Phase::Waiting => self.game.start(requested),
            Phase::Finished => {
                let words = words::generate(self.game.config.number_of_words);
                self.game.restart(words, requested);
            }
        }
    }
}
