//! Item list rendering
//!
//! Each visible item wrapper is one row: the info panel (title, category,
//! stock) followed by the quantity field. Info panels of items in the bag
//! carry the highlight classes; hidden wrappers are not drawn at all.

use crate::store::{ItemEntry, Storefront};
use crate::ui::classes::{resolve_classes, HIGHLIGHT_CLASSES};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Scroll state for the item list
#[derive(Debug, Default)]
pub struct ItemsScrollState {
    pub offset: usize,
}

impl ItemsScrollState {
    /// Move the window so that row `selected` is inside `height` rows
    pub fn follow(&mut self, selected: usize, height: usize) {
        let height = height.max(1);
        if selected < self.offset {
            self.offset = selected;
        } else if selected >= self.offset + height {
            self.offset = selected + 1 - height;
        }
    }
}

fn item_line(entry: &ItemEntry, is_selected: bool, width: usize) -> Line<'static> {
    let panel_style = if entry.highlighted {
        resolve_classes(HIGHLIGHT_CLASSES)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    };

    let marker = if is_selected { "▶ " } else { "  " };
    let field = format!("[{:>3}]", entry.field.text());
    let info = format!(
        " {} · {} · stock {} ",
        entry.item.title, entry.item.category, entry.item.stock
    );

    // Pad the info panel so the quantity fields line up on the right
    let used = marker.chars().count() + field.chars().count() + 1;
    let info_width = width.saturating_sub(used);
    let info = format!("{:<width$}", info, width = info_width);

    let field_style = if is_selected {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.accent)
    };

    Line::from(vec![
        Span::styled(marker, Style::default().fg(DEFAULT_THEME.border_focused)),
        Span::styled(info, panel_style),
        Span::raw(" "),
        Span::styled(field, field_style),
    ])
}

/// Render the list of visible items, `selected` indexing into the visible rows
pub fn render_items_pane(
    frame: &mut Frame,
    area: Rect,
    store: &Storefront,
    selected: usize,
    scroll_state: &mut ItemsScrollState,
) {
    let block = Block::default()
        .title(" Items ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    if store.visible_count() == 0 {
        let paragraph = Paragraph::new("(no items in this category)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.muted));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let content_width = area.width.saturating_sub(2) as usize;
    scroll_state.follow(selected, visible_height);

    let items: Vec<ListItem> = store
        .visible_entries()
        .enumerate()
        .skip(scroll_state.offset)
        .take(visible_height)
        .map(|(row, entry)| ListItem::new(item_line(entry, row == selected, content_width)))
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_keeps_selection_visible() {
        let mut scroll = ItemsScrollState::default();
        scroll.follow(7, 5);
        assert_eq!(scroll.offset, 3);
        scroll.follow(1, 5);
        assert_eq!(scroll.offset, 1);
        scroll.follow(3, 5);
        assert_eq!(scroll.offset, 1);
    }
}
