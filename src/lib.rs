//! # Introduction
//!
//! bagtty is a storefront page in the terminal: every item has a quantity
//! counter, a category selector narrows the visible items, and a bottom bar
//! keeps a running total of the bag. The page is drawn with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Catalog (TOML) → Storefront → key handlers → Storefront → TUI
//! ```
//!
//! 1. [`catalog`]: the item list (identifier, title, category, stock limit).
//! 2. [`store`]: the page state and its handlers: `update_counter`,
//!    `filter_items`, `update_bar_state` and the `initialize` page-load reset.
//! 3. [`ui`]: ratatui front end, the color palette and the utility-class
//!    styling that consumes it.
//!
//! ## Invariants
//!
//! After every handler the displayed total equals the sum of all quantity
//! fields, an info panel is highlighted iff its quantity is at least 1, and a
//! quantity set through `update_counter` lies in `[0, stock_limit]`.

pub mod catalog;
pub mod store;
pub mod ui;
