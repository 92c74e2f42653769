//! Bag review overlay

use crate::store::BagLine;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

/// Centered rectangle taking `percent_x` by `percent_y` of `area`
fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(rows[1])[1]
}

/// Render the current bag on top of the item list
pub fn render_bag_overlay(frame: &mut Frame, area: Rect, lines: &[BagLine], total: u64) {
    let popup = centered(area, 60, 60);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(format!(" Your bag ({}) ", total))
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        )
        .style(Style::default().bg(DEFAULT_THEME.bg));

    if lines.is_empty() {
        let paragraph = Paragraph::new("(bag is empty)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.muted));
        frame.render_widget(paragraph, popup);
        return;
    }

    let items: Vec<ListItem> = lines
        .iter()
        .map(|line| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!(" {:>3} × ", line.count),
                    Style::default().fg(DEFAULT_THEME.highlight),
                ),
                Span::styled(line.title.clone(), Style::default().fg(DEFAULT_THEME.fg)),
                Span::styled(
                    format!("  ({})", line.id),
                    Style::default().fg(DEFAULT_THEME.muted),
                ),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), popup);
}
