//! Category selector line

use crate::catalog::ALL_CATEGORIES;
use crate::store::Storefront;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the selector with every option, the current one emphasized
pub fn render_filter_line(frame: &mut Frame, area: Rect, store: &Storefront) {
    let current = store.filter().as_value();

    let mut spans = vec![Span::styled(
        " Category: ",
        Style::default().fg(DEFAULT_THEME.muted),
    )];

    let options = std::iter::once(ALL_CATEGORIES).chain(store.categories().iter().map(String::as_str));
    for option in options {
        let style = if option == current {
            Style::default()
                .bg(DEFAULT_THEME.accent)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.fg)
        };
        spans.push(Span::styled(format!(" {} ", option), style));
        spans.push(Span::raw(" "));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
