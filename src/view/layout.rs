//! Layout rendering (top bar, footer)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::model::{ActiveSection, LoadingStatus, SearchSnapshot, UiState};

pub fn render_top_bar(frame: &mut Frame, area: Rect, ui_state: &UiState, search: &SearchSnapshot) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),     // Search input
            Constraint::Length(24), // Search status
        ])
        .split(area);

    let is_focused = ui_state.active_section == ActiveSection::Search;
    let focus_style = if is_focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    let search_line = if ui_state.search_query.is_empty() {
        Line::from(Span::styled(
            "Search for albums...",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(Span::styled(
            ui_state.search_query.as_str(),
            if is_focused {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::White)
            },
        ))
    };

    let search_block = Block::default()
        .borders(Borders::ALL)
        .title(" Search ")
        .padding(Padding::horizontal(1))
        .border_style(focus_style);
    let inner = search_block.inner(chunks[0]);
    frame.render_widget(Paragraph::new(search_line).block(search_block), chunks[0]);

    if is_focused {
        let typed = u16::try_from(ui_state.search_query.chars().count()).unwrap_or(u16::MAX);
        let cursor_x = inner.x.saturating_add(typed);
        frame.set_cursor_position((cursor_x.min(inner.right().saturating_sub(1)), inner.y));
    }

    let (label, color) = status_label(search);
    let status = Paragraph::new(label)
        .style(Style::default().fg(color))
        .block(Block::default().borders(Borders::ALL).title(" Status "));
    frame.render_widget(status, chunks[1]);
}

pub fn render_footer(frame: &mut Frame, area: Rect, ui_state: &UiState) {
    let hints = match ui_state.active_section {
        ActiveSection::Search => "Type to search · Enter search now · Esc clear · Tab/↓ results · Ctrl+C quit",
        ActiveSection::Results => "←↑↓→ move · Enter open · / search · ? help · q quit",
    };
    let footer = Paragraph::new(hints).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, area);
}

fn status_label(search: &SearchSnapshot) -> (String, Color) {
    match &search.status {
        LoadingStatus::Idle => ("Idle".to_string(), Color::DarkGray),
        LoadingStatus::Loading => ("Loading...".to_string(), Color::Yellow),
        LoadingStatus::Ready => {
            let count = search.results.len();
            let noun = if count == 1 { "album" } else { "albums" };
            (format!("{} {}", count, noun), Color::Cyan)
        }
        LoadingStatus::Failed(_) => ("Failed".to_string(), Color::Red),
    }
}
