//! Quantity field text and its numeric reading

/// Read the leading integer of `text`, falling back to 0.
///
/// Leading whitespace is skipped and one optional `+`/`-` sign is accepted.
/// The run of ASCII digits that follows is the value; anything after it is
/// ignored, so `"12abc"` reads as 12 and `"3.9"` as 3. Text without a leading
/// digit reads as 0. Values outside `i64` saturate.
pub fn parse_quantity(text: &str) -> i64 {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    for digit in rest.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(digit - b'0');
        value = value.saturating_mul(10);
        value = if negative {
            value.saturating_sub(digit)
        } else {
            value.saturating_add(digit)
        };
    }
    value
}

/// Clamp a parsed value into `[0, stock_limit]`
pub fn clamp_quantity(value: i64, stock_limit: u32) -> u32 {
    // Fits in u32 after the clamp.
    value.clamp(0, i64::from(stock_limit)) as u32
}

/// Editable quantity input for one item.
///
/// Holds exactly what was typed. The numeric reading is always
/// [`parse_quantity`] of the text, so a field holding `"abc"` counts as 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantityField {
    text: String,
}

impl QuantityField {
    pub fn new() -> Self {
        QuantityField {
            text: String::from("0"),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn value(&self) -> i64 {
        parse_quantity(&self.text)
    }

    /// Quantity as it counts toward the bag; never negative
    pub fn count(&self) -> u32 {
        self.value().clamp(0, i64::from(u32::MAX)) as u32
    }

    pub fn reset(&mut self) {
        self.text.clear();
        self.text.push('0');
    }
}

impl Default for QuantityField {
    fn default() -> Self {
        Self::new()
    }
}
