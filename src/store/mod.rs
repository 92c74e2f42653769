//! Storefront state and the handlers that keep it consistent
//!
//! [`Storefront`] owns everything the page shows: one entry per catalog item
//! (quantity field, info panel highlight, wrapper visibility), the category
//! filter selection and the bottom bar. Handlers mutate it in place and the
//! UI layer projects it onto the screen afterwards.
//!
//! - [`quantity`]: lenient quantity parsing and the editable field
//! - [`filter`]: category filter selection
//! - [`bar`]: bottom bar emphasis and total text

pub mod bar;
pub mod filter;
pub mod quantity;

pub use bar::{BarEmphasis, BottomBar};
pub use filter::CategoryFilter;
pub use quantity::{clamp_quantity, parse_quantity, QuantityField};

use crate::catalog::{Catalog, Item, ItemId};
use rustc_hash::FxHashMap;

/// Page elements belonging to one item
#[derive(Debug, Clone)]
pub struct ItemEntry {
    pub item: Item,
    pub field: QuantityField,
    /// Info panel highlight
    pub highlighted: bool,
    /// Item wrapper visibility
    pub visible: bool,
}

impl ItemEntry {
    fn new(item: Item) -> Self {
        ItemEntry {
            item,
            field: QuantityField::new(),
            highlighted: false,
            visible: true,
        }
    }
}

/// One line of the bag review
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BagLine {
    pub id: ItemId,
    pub title: String,
    pub count: u32,
}

/// The storefront page state
#[derive(Debug, Clone)]
pub struct Storefront {
    entries: Vec<ItemEntry>,
    index: FxHashMap<ItemId, usize>,
    categories: Vec<String>,
    filter: CategoryFilter,
    bar: BottomBar,
}

impl Storefront {
    /// Build the page for a catalog. Call [`Storefront::initialize`] before use.
    pub fn new(catalog: Catalog) -> Self {
        let categories = catalog.categories();
        let entries: Vec<ItemEntry> = catalog.into_items().into_iter().map(ItemEntry::new).collect();
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.item.id.clone(), i))
            .collect();

        Storefront {
            entries,
            index,
            categories,
            filter: CategoryFilter::All,
            bar: BottomBar::new(),
        }
    }

    /// Page-load handler: empty every quantity field and show all categories
    pub fn initialize(&mut self) {
        for entry in &mut self.entries {
            entry.field.reset();
            entry.highlighted = false;
        }
        self.filter = CategoryFilter::All;
        self.filter_items();
        self.update_bar_state();
        tracing::info!(items = self.entries.len(), "storefront initialized");
    }

    /// Keystroke handler for a quantity field.
    ///
    /// Stores `input` in the field of `id`, highlights the info panel when the
    /// typed value is at least 1, clamps the stored value into
    /// `[0, stock_limit]` and refreshes the bottom bar. Text without a leading
    /// number stays in the field and counts as 0. Unknown ids are ignored.
    pub fn update_counter(&mut self, id: &ItemId, input: &str, stock_limit: u32) {
        let Some(&position) = self.index.get(id) else {
            tracing::warn!(item = %id, "update for unknown item ignored");
            return;
        };

        let entry = &mut self.entries[position];
        entry.field.set_text(input);
        let value = entry.field.value();

        entry.highlighted = value >= 1;

        if value < 0 || value > i64::from(stock_limit) {
            let clamped = clamp_quantity(value, stock_limit);
            entry.field.set_text(clamped.to_string());
        }

        tracing::debug!(
            item = %id,
            input,
            stored = entry.field.text(),
            highlighted = entry.highlighted,
            "counter updated"
        );

        self.update_bar_state();
    }

    /// [`Storefront::update_counter`] with the item's catalog stock as the limit
    pub fn set_quantity(&mut self, id: &ItemId, input: &str) {
        match self.stock_of(id) {
            Some(stock) => self.update_counter(id, input, stock),
            None => tracing::warn!(item = %id, "update for unknown item ignored"),
        }
    }

    /// Add `delta` to the current quantity of `id`
    pub fn step_quantity(&mut self, id: &ItemId, delta: i64) {
        let Some(current) = self.entry(id).map(|entry| entry.field.value()) else {
            tracing::warn!(item = %id, "update for unknown item ignored");
            return;
        };
        let next = current.saturating_add(delta);
        self.set_quantity(id, &next.to_string());
    }

    /// Show the wrappers whose category matches the selector, hide the rest
    pub fn filter_items(&mut self) {
        for entry in &mut self.entries {
            entry.visible = self.filter.matches(&entry.item.category);
        }
        tracing::debug!(filter = %self.filter, visible = self.visible_count(), "items filtered");
    }

    /// Change the selector value and refilter
    pub fn select_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
        self.filter_items();
    }

    /// Move the selector to the next (or previous) option, wrapping around.
    ///
    /// Options are `all` followed by the catalog categories in order.
    pub fn cycle_filter(&mut self, forward: bool) {
        let options = self.categories.len() + 1;
        let current = match &self.filter {
            CategoryFilter::All => 0,
            CategoryFilter::Category(name) => self
                .categories
                .iter()
                .position(|c| c == name)
                .map_or(0, |i| i + 1),
        };
        let next = if forward {
            (current + 1) % options
        } else {
            (current + options - 1) % options
        };
        let filter = match next {
            0 => CategoryFilter::All,
            i => CategoryFilter::Category(self.categories[i - 1].clone()),
        };
        self.select_filter(filter);
    }

    /// Recompute the bag total and the bottom bar emphasis
    pub fn update_bar_state(&mut self) {
        let total = self.total();
        self.bar.show_total(total);
    }

    /// Sum of every quantity field
    pub fn total(&self) -> u64 {
        self.entries
            .iter()
            .map(|entry| u64::from(entry.field.count()))
            .sum()
    }

    /// Items currently in the bag, in catalog order
    pub fn bag(&self) -> Vec<BagLine> {
        self.entries
            .iter()
            .filter(|entry| entry.field.value() >= 1)
            .map(|entry| BagLine {
                id: entry.item.id.clone(),
                title: entry.item.title.clone(),
                count: entry.field.count(),
            })
            .collect()
    }

    pub fn entries(&self) -> &[ItemEntry] {
        &self.entries
    }

    pub fn entry(&self, id: &ItemId) -> Option<&ItemEntry> {
        self.index.get(id).map(|&i| &self.entries[i])
    }

    pub fn visible_entries(&self) -> impl Iterator<Item = &ItemEntry> {
        self.entries.iter().filter(|entry| entry.visible)
    }

    pub fn visible_count(&self) -> usize {
        self.visible_entries().count()
    }

    pub fn stock_of(&self, id: &ItemId) -> Option<u32> {
        self.entry(id).map(|entry| entry.item.stock)
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    pub fn bar(&self) -> &BottomBar {
        &self.bar
    }
}
