//! Overlay rendering (album detail modal, help popup)

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
    Frame,
};

use crate::model::AlbumDetailState;
use super::utils::centered_rect;

pub fn render_album_detail(frame: &mut Frame, detail: &AlbumDetailState) {
    let popup_area = centered_rect(frame.area(), 64, 14);

    // Clear the area behind the popup first
    frame.render_widget(Clear, popup_area);

    let album = &detail.album;
    let label = Style::default().fg(Color::DarkGray);
    let play_pause = if detail.is_playing { "⏸" } else { "▶" };

    let lines = vec![
        Line::from(Span::styled(
            album.title.as_str(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(album.artist.as_str(), Style::default().fg(Color::Cyan))),
        Line::from(""),
        Line::from(vec![
            Span::styled("Released  ", label),
            Span::raw(album.release_date_display()),
        ]),
        Line::from(vec![
            Span::styled("Tracks    ", label),
            Span::raw(album.track_count_display()),
        ]),
        Line::from(vec![
            Span::styled("Cover     ", label),
            Span::raw(album.detail_cover()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  ⏮  ", Style::default().fg(Color::White)),
            Span::styled(
                format!("  {}  ", play_pause),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  ⏹  ", Style::default().fg(Color::White)),
            Span::styled("  ⏭  ", Style::default().fg(Color::White)),
        ]),
        Line::from(Span::styled(
            "   P     Space    S      N",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Album (Esc to close) ")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .padding(Padding::horizontal(1))
                .style(Style::default().bg(Color::Black)),
        );

    frame.render_widget(widget, popup_area);
}

pub fn render_help_popup(frame: &mut Frame) {
    // Define keybindings organized by category
    let keybindings = vec![
        ("", "── Search ──"),
        ("Type", "Search after a short pause"),
        ("Enter", "Search now"),
        ("Esc", "Clear search"),
        ("Tab / ↓", "Go to results"),
        ("", ""),
        ("", "── Results ──"),
        ("← ↑ ↓ →", "Move selection"),
        ("Enter", "Open album"),
        ("/ / Esc", "Back to search"),
        ("", ""),
        ("", "── Album ──"),
        ("Space", "Play / Pause"),
        ("S", "Stop"),
        ("P / N", "Previous / Next"),
        ("Esc", "Close"),
        ("", ""),
        ("", "── General ──"),
        ("?", "Toggle this help"),
        ("Q / Ctrl+C", "Quit"),
    ];

    let area = frame.area();
    let popup_area = centered_rect(area, 56, keybindings.len() as u16 + 2);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let lines: Vec<Line> = keybindings
        .iter()
        .map(|(key, desc)| {
            if key.is_empty() {
                // Section header or empty line
                Line::from(Span::styled(
                    format!("{:^52}", desc),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(vec![
                    Span::styled(
                        format!("{:>14}", key),
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(desc.to_string(), Style::default().fg(Color::White)),
                ])
            }
        })
        .collect();

    let help_text = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Help (? or Esc to close) ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(help_text, popup_area);
}
