//! Utility-class styling
//!
//! Elements carry class lists such as `"bg-brand text-white"`; this module
//! turns them into ratatui styles using the names in [`PALETTE`].
//!
//! [`PALETTE`]: super::theme::PALETTE

use super::theme::palette_color;
use ratatui::style::{Color, Modifier, Style};

/// Classes toggled on an info panel whose item is in the bag
pub const HIGHLIGHT_CLASSES: &str = "bg-brand text-white";
/// Bottom bar with a non-empty bag
pub const BAR_ACTIVE: &str = "opacity-100";
/// Bottom bar with an empty bag
pub const BAR_INACTIVE: &str = "opacity-50";

fn named_color(name: &str) -> Option<Color> {
    match name {
        "white" => Some(Color::White),
        "black" => Some(Color::Black),
        _ => palette_color(name),
    }
}

/// Apply one class on top of `style`. Unknown classes leave it unchanged.
pub fn apply_class(style: Style, class: &str) -> Style {
    if let Some(name) = class.strip_prefix("bg-") {
        if let Some(color) = named_color(name) {
            return style.bg(color);
        }
    } else if let Some(name) = class.strip_prefix("text-") {
        if let Some(color) = named_color(name) {
            return style.fg(color);
        }
    } else {
        match class {
            "font-bold" => return style.add_modifier(Modifier::BOLD),
            "opacity-50" => return style.add_modifier(Modifier::DIM),
            "opacity-100" => return style.remove_modifier(Modifier::DIM),
            _ => {}
        }
    }

    tracing::debug!(class, "unknown utility class ignored");
    style
}

/// Resolve a whitespace-separated class list, later classes winning
pub fn resolve_classes(classes: &str) -> Style {
    classes
        .split_whitespace()
        .fold(Style::default(), apply_class)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_classes() {
        let style = resolve_classes(HIGHLIGHT_CLASSES);
        assert_eq!(style.bg, Some(Color::Rgb(216, 7, 0)));
        assert_eq!(style.fg, Some(Color::White));
    }

    #[test]
    fn test_opacity_classes() {
        assert!(resolve_classes(BAR_INACTIVE)
            .add_modifier
            .contains(Modifier::DIM));
        assert!(!resolve_classes(BAR_ACTIVE)
            .add_modifier
            .contains(Modifier::DIM));
        assert!(resolve_classes("opacity-50 opacity-100")
            .sub_modifier
            .contains(Modifier::DIM));
    }

    #[test]
    fn test_palette_text_and_bold() {
        let style = resolve_classes("text-accent1 font-bold");
        assert_eq!(style.fg, Some(Color::Rgb(0x00, 0x6f, 0xc2)));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_unknown_classes_ignored() {
        assert_eq!(resolve_classes("flex hidden bg-nope"), Style::default());
        assert_eq!(resolve_classes(""), Style::default());
    }
}
