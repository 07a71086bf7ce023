use crate::classifier::{self, CharClass};
use crate::config::GameConfig;
use crate::metrics::{self, Metrics};
use crate::TICK_RATE_MS;

/// Top-level game state. Finished is terminal until an explicit restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Waiting,
    Started,
    Finished,
}

/// Typing position: index of the current word and of the last typed
/// character within it. `char` is None until the first character of the
/// word is typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub word: usize,
    pub char: Option<usize>,
}

/// One round of the typing test: the word list, the typing cursor, the
/// countdown and the counters the metrics derive from.
#[derive(Debug)]
pub struct Game {
    pub words: Vec<String>,
    pub phase: Phase,
    pub cursor: Cursor,
    pub input: String,
    pub last_char: Option<char>,
    pub correct_chars: usize,
    pub correct_words: usize,
    pub incorrect_words: usize,
    pub max_wpm: u32,
    pub countdown: u16,
    pub config: GameConfig,
    tick_ms: u64,
}

impl Game {
    pub fn new(words: Vec<String>, config: GameConfig) -> Self {
        Self {
            words,
            phase: Phase::Waiting,
            cursor: Cursor::default(),
            input: String::new(),
            last_char: None,
            correct_chars: 0,
            correct_words: 0,
            incorrect_words: 0,
            max_wpm: 0,
            countdown: config.seconds,
            config,
            tick_ms: 0,
        }
    }

    /// Enters the round. A valid requested duration replaces the configured
    /// one; anything else (None) silently retains the previous value.
    /// No-op while a round is running.
    pub fn start(&mut self, requested_secs: Option<u16>) {
        if self.phase == Phase::Started {
            return;
        }

        if let Some(secs) = requested_secs {
            self.config.seconds = secs;
        }

        self.countdown = self.config.seconds;
        self.tick_ms = 0;
        self.phase = Phase::Started;
    }

    /// Full reset into a fresh round: new word list, zeroed counters and
    /// watermark, cursor back to the first word. Used to leave Finished.
    pub fn restart(&mut self, words: Vec<String>, requested_secs: Option<u16>) {
        self.words = words;
        self.cursor = Cursor::default();
        self.input.clear();
        self.last_char = None;
        self.correct_chars = 0;
        self.correct_words = 0;
        self.incorrect_words = 0;
        self.max_wpm = 0;
        self.phase = Phase::Waiting;
        self.start(requested_secs);
    }

    /// Consumes one background tick. The countdown only moves while the
    /// round is running; entering Started re-arms the accumulator.
    pub fn on_tick(&mut self) {
        if self.phase != Phase::Started {
            return;
        }

        self.tick_ms += TICK_RATE_MS;

        while self.tick_ms >= 1000 && self.phase == Phase::Started {
            self.tick_ms -= 1000;
            self.countdown = self.countdown.saturating_sub(1);

            if self.countdown == 0 {
                self.finish();
            }
        }
    }

    pub fn type_char(&mut self, c: char) {
        if self.phase != Phase::Started {
            return;
        }

        self.cursor.char = Some(self.cursor.char.map_or(0, |upto| upto + 1));
        self.input.push(c);
        self.last_char = Some(c);
    }

    pub fn backspace(&mut self) {
        if self.phase != Phase::Started {
            return;
        }

        if let Some(upto) = self.cursor.char {
            self.cursor.char = upto.checked_sub(1);
            self.input.pop();
        }
    }

    /// Word-submit (space or enter): checks the current word and advances
    /// past it on a match. The character cursor and input buffer reset
    /// regardless of the outcome. Running out of words finishes the round.
    pub fn submit_word(&mut self) {
        if self.phase != Phase::Started {
            return;
        }

        if self.check_match() {
            self.cursor.word += 1;

            if self.cursor.word == self.words.len() {
                self.finish();
            }
        }

        self.cursor.char = None;
        self.input.clear();
    }

    fn check_match(&mut self) -> bool {
        let matched = self.words[self.cursor.word] == self.input.trim();

        if matched {
            self.correct_words += 1;
            self.correct_chars += self.cursor.char.map_or(0, |upto| upto + 1);

            let instant = metrics::wpm(self.correct_words, self.elapsed_secs());
            if instant > self.max_wpm {
                self.max_wpm = instant;
            }
        } else {
            self.incorrect_words += 1;
        }

        matched
    }

    fn finish(&mut self) {
        self.input.clear();
        self.phase = Phase::Finished;
    }

    pub fn elapsed_secs(&self) -> u32 {
        (self.config.seconds - self.countdown) as u32
    }

    pub fn metrics(&self) -> Metrics {
        Metrics {
            wpm: metrics::wpm(self.correct_words, self.elapsed_secs()),
            cpm: metrics::cpm(self.correct_chars, self.elapsed_secs()),
            accuracy: metrics::accuracy(self.correct_words, self.incorrect_words),
            max_wpm: self.max_wpm,
        }
    }

    /// Styling class for one character cell of the word list. Only the
    /// current word is classified, and only after the first keystroke of
    /// the round; a finished round shows no classes.
    pub fn char_class(&self, word_index: usize, pos: usize) -> CharClass {
        if self.phase == Phase::Finished
            || word_index != self.cursor.word
            || self.last_char.is_none()
        {
            return CharClass::None;
        }

        classifier::classify_char(
            &self.words[word_index],
            self.input.trim(),
            self.cursor.char,
            pos,
        )
    }

    pub fn is_current_word(&self, word_index: usize) -> bool {
        word_index == self.cursor.word
    }
}
