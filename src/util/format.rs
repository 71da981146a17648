//! Display formatting for prices.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format an amount in dong the way `vi-VN` currency formatting does:
/// dot thousands separators, a non-breaking space, then the dong sign.
#[must_use]
pub fn format_vnd(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 4);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out.push('\u{a0}');
    out.push('₫');
    out
}

/// Format a min-max price range.
#[must_use]
pub fn format_vnd_range(min: u64, max: u64) -> String {
    format!("{} - {}", format_vnd(min), format_vnd(max))
}

/// Percentage saved going from `original` to `price`, rounded down.
#[must_use]
pub fn discount_percent(price: u64, original: u64) -> u64 {
    if original == 0 || price >= original {
        return 0;
    }
    (original - price) * 100 / original
}
