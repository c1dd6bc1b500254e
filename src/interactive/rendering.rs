//! TUI rendering with ratatui
//!
//! Board, search progress and messages for the code breaker screen.

use super::app::{App, InputMode, MessageStyle};
use crate::output::board_lines;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 MASTERMIND - Break the Code")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let reveal = match app.input_mode {
        InputMode::RoundOver => app.round.secret(),
        InputMode::Guessing => None,
    };
    let lines: Vec<Line> = board_lines(app.round.board(), &app.config, app.style, reveal)
        .into_iter()
        .map(Line::from)
        .collect();

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    render_search_progress(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

/// Information gained so far, as a share of the bits needed to pin down one code
fn render_search_progress(f: &mut Frame, app: &App, area: Rect) {
    let total_bits = (app.config.code_space_size() as f64).log2();
    let remaining_bits = (app.candidates_count.max(1) as f64).log2();
    let bits_gained = total_bits - remaining_bits;
    let progress_pct = if total_bits > 0.0 {
        (bits_gained / total_bits * 100.0).clamp(0.0, 100.0) as u16
    } else {
        100
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Search Space ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress_pct)
        .label(format!(
            "{bits_gained:.1}/{total_bits:.1} bits | {} candidates remain",
            app.candidates_count
        ));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::RoundOver => (
            " Round over | Press 'n' for a new round or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Guessing => (
            " Enter Guess (peg letters, e.g. RGBY) | TAB for solver hint ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let turn_text = format!(
        "Turn: {}/{}",
        app.round.board().len(),
        app.config.turn_limit()
    );
    f.render_widget(
        Paragraph::new(turn_text).alignment(Alignment::Center),
        chunks[0],
    );

    let stats_text = format!(
        "Rounds: {} | Win Rate: {:.0}%",
        app.stats.rounds,
        app.stats.win_rate() * 100.0
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let average_text = app.stats.average_score().map_or_else(
        || "Average: -".to_string(),
        |avg| format!("Average: {avg:.2}"),
    );
    f.render_widget(
        Paragraph::new(average_text).alignment(Alignment::Center),
        chunks[2],
    );

    let help_text = match app.input_mode {
        InputMode::RoundOver => "q: Quit | n: New Round",
        InputMode::Guessing => "Esc: Quit | Enter: Submit | TAB: Hint",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use crate::output::PegStyle;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn draws_board_and_status() {
        let app = App::new(
            GameConfig::default(),
            PegStyle::Letters,
            &mut StdRng::seed_from_u64(1),
        )
        .unwrap();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("Board"));
        assert!(screen.contains("Turn: 0/12"));
        assert!(screen.contains("1296 candidates remain"));
    }
}
