//! Main TUI application state and logic

use crate::catalog::ItemId;
use crate::store::Storefront;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

use super::panes::{self, ItemsScrollState};
use super::theme::DEFAULT_THEME;

/// The main application state
pub struct App {
    /// Page state driven by the key handlers
    pub store: Storefront,

    /// Focused row among the visible item wrappers
    pub selected: usize,

    pub items_scroll: ItemsScrollState,

    /// Whether the bag review overlay is open
    pub is_reviewing: bool,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create a new app around an already initialized storefront
    pub fn new(store: Storefront) -> Self {
        App {
            store,
            selected: 0,
            items_scroll: ItemsScrollState::default(),
            is_reviewing: false,
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Title | filter | items | bottom bar | status
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(size);

        let title = Paragraph::new(Line::from(Span::styled(
            " bagtty ",
            Style::default()
                .bg(DEFAULT_THEME.brand)
                .fg(DEFAULT_THEME.fg)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Left);
        frame.render_widget(title, rows[0]);

        panes::render_filter_line(frame, rows[1], &self.store);
        panes::render_items_pane(
            frame,
            rows[2],
            &self.store,
            self.selected,
            &mut self.items_scroll,
        );
        panes::render_bottom_bar(frame, rows[3], self.store.bar());
        panes::render_status_bar(frame, rows[4], &self.status_message, self.is_reviewing);

        if self.is_reviewing {
            panes::render_bag_overlay(frame, rows[2], &self.store.bag(), self.store.total());
        }
    }

    /// Id of the focused item, if any item is visible
    pub fn selected_id(&self) -> Option<ItemId> {
        self.store
            .visible_entries()
            .nth(self.selected)
            .map(|entry| entry.item.id.clone())
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.is_reviewing {
            match key.code {
                KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('b') => {
                    self.is_reviewing = false;
                    self.status_message = "Back to shopping".to_string();
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let last = self.store.visible_count().saturating_sub(1);
                self.selected = (self.selected + 1).min(last);
            }
            KeyCode::Char(c @ '0'..='9') => self.type_digit(c),
            KeyCode::Backspace => self.erase_digit(),
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => self.step(1),
            KeyCode::Char('-') | KeyCode::Left => self.step(-1),
            KeyCode::Tab => self.change_filter(true),
            KeyCode::BackTab => self.change_filter(false),
            KeyCode::Enter | KeyCode::Char('b') => {
                self.is_reviewing = true;
                self.status_message = format!("{} item(s) in the bag", self.store.total());
            }
            KeyCode::Char('r') => {
                self.store.initialize();
                self.selected = 0;
                self.items_scroll = ItemsScrollState::default();
                self.status_message = "Bag emptied".to_string();
            }
            _ => {}
        }
    }

    fn type_digit(&mut self, digit: char) {
        let Some(id) = self.selected_id() else {
            return;
        };
        let Some(entry) = self.store.entry(&id) else {
            return;
        };

        // A lone "0" is replaced rather than extended
        let mut text = match entry.field.text() {
            "0" => String::new(),
            other => other.to_string(),
        };
        text.push(digit);

        self.store.set_quantity(&id, &text);
        self.report(&id);
    }

    fn erase_digit(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        let Some(entry) = self.store.entry(&id) else {
            return;
        };

        let mut text = entry.field.text().to_string();
        text.pop();
        self.store.set_quantity(&id, &text);
        self.report(&id);
    }

    fn step(&mut self, delta: i64) {
        if let Some(id) = self.selected_id() {
            self.store.step_quantity(&id, delta);
            self.report(&id);
        }
    }

    fn change_filter(&mut self, forward: bool) {
        self.store.cycle_filter(forward);
        self.selected = 0;
        self.items_scroll = ItemsScrollState::default();
        self.status_message = format!(
            "Showing {} ({} item(s))",
            self.store.filter(),
            self.store.visible_count()
        );
    }

    fn report(&mut self, id: &ItemId) {
        if let Some(entry) = self.store.entry(id) {
            self.status_message = format!(
                "{}: {} of {}",
                entry.item.title,
                entry.field.count(),
                entry.item.stock
            );
        }
    }
}
