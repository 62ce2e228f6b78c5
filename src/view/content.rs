//! Main content area rendering (status messages and the album grid)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

use crate::model::{ActiveSection, Album, LoadingStatus, MAX_GRID_COLUMNS, SearchSnapshot, UiState};
use super::utils::truncate_string;

/// Rows per card: border, title, artist, cover, border
pub const CARD_HEIGHT: u16 = 5;

const IDLE_MESSAGE: &str = "Type to search for albums...";
const LOADING_MESSAGE: &str = "Loading albums...";
const EMPTY_MESSAGE: &str = "No albums found.";

pub fn render_main_content(frame: &mut Frame, area: Rect, ui_state: &UiState, search: &SearchSnapshot) {
    let is_focused = ui_state.active_section == ActiveSection::Results;
    let border_style = if is_focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    let title = if search.committed_query.trim().is_empty() {
        " Albums ".to_string()
    } else {
        format!(" Albums: {} ", truncate_string(&search.committed_query, 40))
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding::horizontal(1))
        .border_style(border_style);

    let message = match &search.status {
        LoadingStatus::Idle => Some((IDLE_MESSAGE.to_string(), Color::DarkGray)),
        LoadingStatus::Loading => Some((LOADING_MESSAGE.to_string(), Color::Yellow)),
        LoadingStatus::Failed(reason) => Some((reason.clone(), Color::Red)),
        LoadingStatus::Ready if search.results.is_empty() => {
            Some((EMPTY_MESSAGE.to_string(), Color::DarkGray))
        }
        LoadingStatus::Ready => None,
    };

    if let Some((text, color)) = message {
        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(color))
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);
    render_album_grid(frame, inner, &search.results, ui_state, is_focused);
}

fn render_album_grid(frame: &mut Frame, area: Rect, albums: &[Album], ui_state: &UiState, is_focused: bool) {
    let columns = ui_state.grid_columns.clamp(1, MAX_GRID_COLUMNS);
    let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
    let selected = ui_state.grid_selected.min(albums.len().saturating_sub(1));
    let first_row = first_visible_row(selected / columns, visible_rows);

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); visible_rows])
        .split(area);

    let column_constraints = vec![Constraint::Ratio(1, columns as u32); columns];

    for (row_offset, row_area) in row_areas.iter().enumerate() {
        let start = (first_row + row_offset) * columns;
        if start >= albums.len() {
            break;
        }

        let cell_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(column_constraints.clone())
            .split(*row_area);

        for (column, cell_area) in cell_areas.iter().enumerate() {
            let index = start + column;
            let Some(album) = albums.get(index) else {
                break;
            };
            render_album_card(frame, *cell_area, album, index == selected, is_focused);
        }
    }
}

/// First grid row to draw so that `selected_row` stays on screen
pub fn first_visible_row(selected_row: usize, visible_rows: usize) -> usize {
    selected_row.saturating_sub(visible_rows.saturating_sub(1))
}

fn render_album_card(frame: &mut Frame, area: Rect, album: &Album, is_selected: bool, is_focused: bool) {
    let border_style = match (is_selected, is_focused) {
        (true, true) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        (true, false) => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        _ => Style::default().fg(Color::DarkGray),
    };

    let width = area.width.saturating_sub(2) as usize;
    let lines = vec![
        Line::from(Span::styled(
            truncate_string(&album.title, width),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            truncate_string(&album.artist, width),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(Span::styled(
            truncate_string(album.card_cover(), width),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let card = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(card, area);
}
