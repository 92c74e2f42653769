//! Bottom bar state

/// Visual emphasis of the bottom bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BarEmphasis {
    /// Full opacity, something is in the bag
    Active,
    /// Reduced opacity, the bag is empty
    #[default]
    Inactive,
}

/// Summary line shown at the bottom of the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BottomBar {
    pub emphasis: BarEmphasis,
    /// Text of the total-count display
    pub total_text: String,
}

impl BottomBar {
    pub fn new() -> Self {
        BottomBar {
            emphasis: BarEmphasis::Inactive,
            total_text: String::from("0"),
        }
    }

    pub fn is_active(&self) -> bool {
        self.emphasis == BarEmphasis::Active
    }

    /// Write a freshly computed total into the bar
    pub fn show_total(&mut self, total: u64) {
        self.emphasis = if total > 0 {
            BarEmphasis::Active
        } else {
            BarEmphasis::Inactive
        };
        self.total_text = total.to_string();
    }
}

impl Default for BottomBar {
    fn default() -> Self {
        Self::new()
    }
}
