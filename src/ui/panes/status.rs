//! Status bar rendering with keybindings

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status bar: message on the left, key hints on the right
pub fn render_status_bar(frame: &mut Frame, area: Rect, message: &str, is_reviewing: bool) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let mode = if is_reviewing { " BAG " } else { " SHOP " };
    let left_spans = vec![
        Span::styled(
            mode,
            Style::default()
                .bg(if is_reviewing {
                    DEFAULT_THEME.brand
                } else {
                    DEFAULT_THEME.success
                })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default().bg(DEFAULT_THEME.bg).fg(DEFAULT_THEME.fg),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.bg))
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    let key_style = Style::default().bg(DEFAULT_THEME.muted).fg(Color::Black);
    let desc_style = Style::default().bg(DEFAULT_THEME.bg).fg(DEFAULT_THEME.fg);
    let sep_style = Style::default().bg(DEFAULT_THEME.bg).fg(DEFAULT_THEME.muted);

    let hints: &[(&str, &str)] = &[
        (" ↑/↓ ", " item "),
        (" 0-9 +/- ", " qty "),
        (" ⇥ ", " category "),
        (" ↵ ", " bag "),
        (" r ", " reset "),
        (" q ", " quit "),
    ];

    let mut right_spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            right_spans.push(Span::styled("│", sep_style));
        }
        right_spans.push(Span::styled(*key, key_style));
        right_spans.push(Span::styled(*desc, desc_style));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.bg))
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}
