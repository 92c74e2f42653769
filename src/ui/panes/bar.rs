//! Bottom bar rendering

use crate::store::{BarEmphasis, BottomBar};
use crate::ui::classes::{apply_class, BAR_ACTIVE, BAR_INACTIVE};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the bag total, dimmed while the bag is empty
pub fn render_bottom_bar(frame: &mut Frame, area: Rect, bar: &BottomBar) {
    let class = match bar.emphasis {
        BarEmphasis::Active => BAR_ACTIVE,
        BarEmphasis::Inactive => BAR_INACTIVE,
    };
    let base = apply_class(
        Style::default().bg(DEFAULT_THEME.bar_bg).fg(DEFAULT_THEME.fg),
        class,
    );

    let line = Line::from(vec![
        Span::styled(" Bag: ", base),
        Span::styled(
            bar.total_text.clone(),
            base.fg(DEFAULT_THEME.highlight).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" item(s)  ", base),
        Span::styled(" ↵ review ", base.bg(DEFAULT_THEME.brand)),
    ]);

    let paragraph = Paragraph::new(line)
        .style(base)
        .alignment(Alignment::Right);
    frame.render_widget(paragraph, area);
}
