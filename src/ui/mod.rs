//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]**: key event loop, item focus, maps keys to storefront handlers
//! - **[`panes`]**: stateless render functions (filter line, items, bottom bar,
//!   bag overlay, status bar)
//! - **[`classes`]**: utility-class styling resolved against the palette
//! - **[`theme`]**: the named color palette and the semantic theme
//!
//! The entry point for consumers is [`App`]: construct it with a [`Storefront`] and
//! call [`App::run`] to start the event loop.
//!
//! [`Storefront`]: crate::store::Storefront
//! [`App::run`]: app::App::run

pub mod app;
pub mod classes;
pub mod panes;
pub mod theme;

pub use app::App;
