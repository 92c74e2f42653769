//! TUI pane rendering modules
//!
//! Every pane is a stateless `render_*` function over the [`Storefront`];
//! the only state kept between frames is the item list scroll offset.
//!
//! - [`filter`]: category selector line
//! - [`items`]: item wrappers with info panels and quantity fields
//! - [`bar`]: bottom bar with the bag total
//! - [`bag`]: bag review overlay
//! - [`status`]: status bar with keybindings
//!
//! [`Storefront`]: crate::store::Storefront

pub mod bag;
pub mod bar;
pub mod filter;
pub mod items;
pub mod status;

pub use bag::render_bag_overlay;
pub use bar::render_bottom_bar;
pub use filter::render_filter_line;
pub use items::{render_items_pane, ItemsScrollState};
pub use status::render_status_bar;
