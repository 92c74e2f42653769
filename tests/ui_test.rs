// Rendering and key handling through the TUI front end

use bagtty::catalog::{Catalog, ItemId};
use bagtty::store::Storefront;
use bagtty::ui::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

fn app() -> App {
    let mut store = Storefront::new(Catalog::sample());
    store.initialize();
    App::new(store)
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

fn row_text(buffer: &Buffer, y: u16) -> String {
    let width = buffer.area.width as usize;
    let start = y as usize * width;
    buffer.content[start..start + width]
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

fn draw(app: &mut App, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("Terminal creation failed");
    terminal.draw(|f| app.render(f)).expect("Draw failed");
    terminal.backend().buffer().clone()
}

#[test]
fn test_typing_digits_clamps_to_stock() {
    let mut app = app();
    // First row is the tent, stock 4
    press(&mut app, KeyCode::Char('9'));

    let tent = app.store.entry(&ItemId::from("tent")).unwrap();
    assert_eq!(tent.field.text(), "4");
    assert!(tent.highlighted);
    assert_eq!(app.store.bar().total_text, "4");
}

#[test]
fn test_typing_builds_multi_digit_numbers() {
    let mut app = app();
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down); // lantern, stock 10
    press(&mut app, KeyCode::Char('1'));
    press(&mut app, KeyCode::Char('0'));

    let lantern = app.store.entry(&ItemId::from("lantern")).unwrap();
    assert_eq!(lantern.field.text(), "10");

    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Backspace);
    let lantern = app.store.entry(&ItemId::from("lantern")).unwrap();
    assert_eq!(lantern.field.text(), "");
    assert!(!lantern.highlighted);
    assert_eq!(app.store.total(), 0);
}

#[test]
fn test_tab_cycles_filter_and_resets_focus() {
    let mut app = app();
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Tab);

    assert_eq!(app.store.filter().as_value(), "camping");
    assert_eq!(app.selected, 0);
    assert_eq!(app.selected_id(), Some(ItemId::from("tent")));

    press(&mut app, KeyCode::BackTab);
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.store.filter().as_value(), "beverages");
    assert_eq!(app.selected_id(), Some(ItemId::from("lemonade")));
}

#[test]
fn test_reset_key_reinitializes() {
    let mut app = app();
    press(&mut app, KeyCode::Char('+'));
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('r'));

    assert_eq!(app.store.total(), 0);
    assert_eq!(app.store.filter().as_value(), "all");
    assert!(app.store.entries().iter().all(|e| !e.highlighted));
}

#[test]
fn test_review_overlay_swallows_edits() {
    let mut app = app();
    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Enter);
    assert!(app.is_reviewing);

    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.store.total(), 2);

    press(&mut app, KeyCode::Esc);
    assert!(!app.is_reviewing);
    assert!(!app.should_quit);

    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);
}

#[test]
fn test_bottom_bar_shows_total() {
    let mut app = app();
    press(&mut app, KeyCode::Char('3'));

    let buffer = draw(&mut app, 80, 12);
    let bar = row_text(&buffer, 10);
    assert!(bar.contains("Bag: 3"), "bottom bar was {:?}", bar);
}

#[test]
fn test_render_lists_only_visible_items() {
    let mut app = app();
    press(&mut app, KeyCode::BackTab); // beverages

    let buffer = draw(&mut app, 80, 14);
    let screen: String = (0..14).map(|y| row_text(&buffer, y)).collect::<Vec<_>>().join("\n");

    assert!(screen.contains("Lemonade crate"));
    assert!(screen.contains("Cola crate"));
    assert!(!screen.contains("Two-person tent"));
}

#[test]
fn test_render_bag_overlay() {
    let mut app = app();
    press(&mut app, KeyCode::Char('1'));
    press(&mut app, KeyCode::Enter);

    let buffer = draw(&mut app, 80, 20);
    let screen: String = (0..20).map(|y| row_text(&buffer, y)).collect::<Vec<_>>().join("\n");

    assert!(screen.contains("Your bag (1)"));
    assert!(screen.contains("Two-person tent"));
}
