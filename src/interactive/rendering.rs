//! TUI rendering with ratatui
//!
//! Header, status line, tile grid, on-screen keyboard and footer.

use super::app::App;
use super::keyboard::{self, KEYBOARD_HEIGHT, OnScreenKey};
use super::palette::Palette;
use crate::core::{GameStatus, MAX_ATTEMPTS, Mark, WORD_LENGTH};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

const TILE_WIDTH: u16 = 7;
const TILE_HEIGHT: u16 = 3;
const TILE_GAP: u16 = 1;
const GRID_HEIGHT: u16 = TILE_HEIGHT * MAX_ATTEMPTS as u16;

/// Main UI rendering function
///
/// Returns where the keyboard was drawn so clicks can be mapped back to keys.
pub fn ui(f: &mut Frame, app: &App) -> Rect {
    let palette = Palette::for_theme(app.theme());

    let background = Block::default().style(Style::default().bg(palette.background).fg(palette.text));
    f.render_widget(background, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),               // Header
            Constraint::Length(3),               // Status line
            Constraint::Length(GRID_HEIGHT),     // Tiles
            Constraint::Min(1),                  // Spacer
            Constraint::Length(KEYBOARD_HEIGHT), // Keyboard
            Constraint::Length(3),               // Footer
        ])
        .split(f.area());

    render_header(f, app, &palette, chunks[0]);
    render_status_line(f, app, &palette, chunks[1]);
    render_grid(f, app, &palette, chunks[2]);
    render_keyboard(f, app, &palette, chunks[4]);
    render_footer(f, app, &palette, chunks[5]);

    chunks[4]
}

fn render_header(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "🌊 Ocean Word Splash",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("   [{} theme]", app.theme()),
            Style::default().fg(palette.muted),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.border)),
    );
    f.render_widget(header, area);
}

fn render_status_line(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let message = if app.submitting {
        "Scoring…"
    } else {
        app.state.message()
    };
    let mut spans = vec![Span::styled(
        message.to_string(),
        Style::default().fg(palette.text),
    )];
    if !app.state.date().is_empty() {
        spans.push(Span::styled(" • ", Style::default().fg(palette.muted)));
        spans.push(Span::styled(
            format!("Day: {}", app.state.date()),
            Style::default().fg(palette.muted),
        ));
    }

    let status = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(palette.border)),
        );
    f.render_widget(status, area);
}

fn render_grid(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let grid_width = TILE_WIDTH * WORD_LENGTH as u16 + TILE_GAP * (WORD_LENGTH as u16 - 1);
    let left = area.x + area.width.saturating_sub(grid_width) / 2;
    let attempts = app.state.attempts();
    let input: Vec<char> = app.state.current_input().chars().collect();

    for row in 0..MAX_ATTEMPTS {
        let y = area.y + row as u16 * TILE_HEIGHT;
        if y + TILE_HEIGHT > area.bottom() {
            break;
        }

        for col in 0..WORD_LENGTH {
            let x = left + col as u16 * (TILE_WIDTH + TILE_GAP);
            if x + TILE_WIDTH > area.right() {
                break;
            }
            let tile = Rect::new(x, y, TILE_WIDTH, TILE_HEIGHT);

            if let Some(attempt) = attempts.get(row) {
                let letter = attempt.guess().letter_at(col).unwrap_or(' ');
                let mark = attempt.feedback().mark_at(col).unwrap_or(Mark::Grey);
                render_tile(f, tile, letter, TileKind::Scored(mark), palette);
            } else if row == attempts.len() && app.state.accepts_input() {
                let letter = input.get(col).copied().unwrap_or(' ');
                let kind = if letter == ' ' {
                    TileKind::Empty
                } else {
                    TileKind::Typed
                };
                render_tile(f, tile, letter, kind, palette);
            } else {
                render_tile(f, tile, ' ', TileKind::Empty, palette);
            }
        }
    }
}

#[derive(Clone, Copy)]
enum TileKind {
    Empty,
    Typed,
    Scored(Mark),
}

fn render_tile(f: &mut Frame, area: Rect, letter: char, kind: TileKind, palette: &Palette) {
    let (border, style) = match kind {
        TileKind::Empty => (
            Style::default().fg(palette.border),
            Style::default().fg(palette.text),
        ),
        TileKind::Typed => (
            Style::default().fg(palette.accent),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        ),
        TileKind::Scored(mark) => (
            Style::default().fg(palette.mark(mark)),
            Style::default()
                .bg(palette.mark(mark))
                .fg(palette.on_mark)
                .add_modifier(Modifier::BOLD),
        ),
    };

    let tile = Paragraph::new(letter.to_string())
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border),
        );
    f.render_widget(tile, area);
}

fn render_keyboard(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let marks = app.state.letter_marks();
    let dimmed = !app.state.accepts_input();

    for (key, rect) in keyboard::layout(area) {
        let mark = match key {
            OnScreenKey::Letter(ch) => marks.get(&ch).copied(),
            OnScreenKey::Enter | OnScreenKey::Back => None,
        };

        let mut style = mark.map_or_else(
            || Style::default().bg(palette.key).fg(palette.text),
            |mark| Style::default().bg(palette.mark(mark)).fg(palette.on_mark),
        );
        if dimmed {
            style = style.add_modifier(Modifier::DIM);
        }

        let button = Paragraph::new(key.label())
            .alignment(Alignment::Center)
            .style(style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(style),
            );
        f.render_widget(button, rect);
    }
}

fn render_footer(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let mut spans = vec![Span::styled(
        format!("Attempts: {}/{MAX_ATTEMPTS}", app.state.attempts_used()),
        Style::default().fg(palette.text),
    )];

    match app.state.status() {
        GameStatus::Won => {
            spans.push(Span::raw(" • "));
            spans.push(Span::styled(
                "WON",
                Style::default()
                    .fg(palette.green)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        GameStatus::Lost => {
            spans.push(Span::raw(" • "));
            spans.push(Span::styled(
                "LOST",
                Style::default()
                    .fg(palette.grey)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        GameStatus::InProgress => {}
    }

    spans.push(Span::styled(
        "   Enter: submit • Tab: theme • Esc: quit",
        Style::default().fg(palette.muted),
    ));

    let footer = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(palette.border)),
        );
    f.render_widget(footer, area);
}
