use itertools::Itertools;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::classifier::CharClass;
use crate::game::Phase;

const HORIZONTAL_MARGIN: u16 = 5;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.game.phase {
            Phase::Waiting => render_waiting(self, area, buf),
            Phase::Started => render_round(self, area, buf),
            Phase::Finished => render_summary(self, area, buf),
        }
    }
}

fn bold() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

fn dim_bold() -> Style {
    bold().add_modifier(Modifier::DIM)
}

fn legend() -> Style {
    Style::default().add_modifier(Modifier::ITALIC | Modifier::DIM)
}

/// Color for one character cell. Current-word cells are additionally
/// underlined (the word-level marker).
fn char_style(class: CharClass, current_word: bool) -> Style {
    let styled = match class {
        CharClass::Success => bold().fg(Color::Green),
        CharClass::Failure => bold().fg(Color::Red),
        CharClass::Overflow => bold().fg(Color::Yellow),
        CharClass::Uppercase => bold().fg(Color::Rgb(255, 165, 0)),
        CharClass::None => {
            if current_word {
                bold()
            } else {
                dim_bold()
            }
        }
    };

    if current_word {
        styled.add_modifier(Modifier::UNDERLINED)
    } else {
        styled
    }
}

fn metrics_line(app: &App) -> Line<'static> {
    let m = app.game.metrics();

    Line::from(Span::styled(
        format!(
            "{} wpm   {} max wpm   {} cpm   {}% acc",
            m.wpm, m.max_wpm, m.cpm, m.accuracy
        ),
        bold(),
    ))
}

fn seconds_entry_line(app: &App) -> Line<'_> {
    let mut spans = vec![Span::styled("seconds [5-60]: ", legend())];

    if app.seconds_entry.is_empty() {
        spans.push(Span::styled(
            app.game.config.seconds.to_string(),
            dim_bold(),
        ));
    } else {
        spans.push(Span::styled(app.seconds_entry.clone(), bold()));
    }

    spans.push(Span::styled("_", dim_bold()));

    Line::from(spans)
}

/// Vertically centers `content_height` rows within `area`.
fn centered_chunks(area: Rect, content_height: u16) -> std::rc::Rc<[Rect]> {
    let pad = area.height.saturating_sub(content_height) / 2;

    Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .constraints([
            Constraint::Length(pad),
            Constraint::Length(content_height),
            Constraint::Length(pad),
        ])
        .split(area)
}

fn render_waiting(app: &App, area: Rect, buf: &mut Buffer) {
    let lines = vec![
        Line::from(Span::styled("typr", bold())),
        Line::default(),
        Line::from(Span::styled("enter starts the countdown", legend())),
        Line::from(Span::styled(
            "space or enter checks the current word; a correct word advances",
            legend(),
        )),
        Line::from(vec![
            Span::styled("green", bold().fg(Color::Green)),
            Span::styled(" correct   ", legend()),
            Span::styled("red", bold().fg(Color::Red)),
            Span::styled(" mistake   ", legend()),
            Span::styled("yellow", bold().fg(Color::Yellow)),
            Span::styled(" too long   ", legend()),
            Span::styled("orange", bold().fg(Color::Rgb(255, 165, 0))),
            Span::styled(" uppercase", legend()),
        ]),
        Line::default(),
        seconds_entry_line(app),
        Line::default(),
        metrics_line(app),
        Line::default(),
        Line::from(Span::styled("(enter) start / (esc) quit", legend())),
    ];

    let height = lines.len() as u16;
    let chunks = centered_chunks(area, height);

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(chunks[1], buf);
}

fn render_round(app: &App, area: Rect, buf: &mut Buffer) {
    let game = &app.game;

    let max_chars_per_line = area.width.saturating_sub(HORIZONTAL_MARGIN * 2).max(1);
    let prompt_width = game.words.iter().join(" ").width();
    let mut prompt_lines =
        ((prompt_width as f64 / max_chars_per_line as f64).ceil() + 1.0) as u16;
    if prompt_width <= max_chars_per_line as usize {
        prompt_lines = 1;
    }

    // timer, words, input echo, live metrics
    let content_height = 2 + prompt_lines + 2 + 1;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .constraints([
            Constraint::Length(area.height.saturating_sub(content_height) / 2),
            Constraint::Length(2),
            Constraint::Length(prompt_lines),
            Constraint::Length(2),
            Constraint::Length(1),
        ])
        .split(area);

    let timer = Paragraph::new(Span::styled(game.countdown.to_string(), dim_bold()))
        .alignment(Alignment::Center);
    timer.render(chunks[1], buf);

    let mut spans = Vec::new();
    for (word_index, word) in game.words.iter().enumerate() {
        let current = game.is_current_word(word_index);

        for (pos, c) in word.chars().enumerate() {
            let class = game.char_class(word_index, pos);
            spans.push(Span::styled(c.to_string(), char_style(class, current)));
        }

        spans.push(Span::styled(" ".to_string(), dim_bold()));
    }

    Paragraph::new(Line::from(spans))
        .alignment(if prompt_lines == 1 {
            Alignment::Center
        } else {
            Alignment::Left
        })
        .wrap(Wrap { trim: true })
        .render(chunks[2], buf);

    let echo = Paragraph::new(Line::from(vec![
        Span::styled("> ", legend()),
        Span::styled(game.input.clone(), bold()),
        Span::styled("_", dim_bold()),
    ]))
    .alignment(Alignment::Center);
    echo.render(chunks[3], buf);

    Paragraph::new(metrics_line(app))
        .alignment(Alignment::Center)
        .render(chunks[4], buf);
}

fn render_summary(app: &App, area: Rect, buf: &mut Buffer) {
    let game = &app.game;
    let checked = game.correct_words + game.incorrect_words;

    let lines = vec![
        Line::from(Span::styled("time's up", dim_bold())),
        Line::default(),
        metrics_line(app),
        Line::from(Span::styled(
            format!(
                "{}/{} words correct in {}s",
                game.correct_words,
                checked,
                game.elapsed_secs()
            ),
            legend(),
        )),
        Line::default(),
        seconds_entry_line(app),
        Line::default(),
        Line::from(Span::styled("(enter) new round / (esc) quit", legend())),
    ];

    let height = lines.len() as u16;
    let chunks = centered_chunks(area, height);

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(chunks[1], buf);
}
