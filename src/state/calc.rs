//! Enquiry calculator: quantity times unit price.

#[cfg(test)]
#[path = "calc_test.rs"]
mod calc_test;

/// Parse a numeric text input the way the browser's `parseFloat` does:
/// the longest numeric prefix counts, and empty or non-numeric input is 0.
pub fn parse_amount(input: &str) -> f64 {
    let input = input.trim();
    let mut value = 0.0;
    for end in 1..=input.len() {
        if !input.is_char_boundary(end) {
            continue;
        }
        if let Ok(v) = input[..end].parse::<f64>() {
            value = v;
        }
    }
    if value.is_nan() { 0.0 } else { value }
}

pub fn total(quantity: f64, unit_price: f64) -> f64 {
    quantity * unit_price
}

/// Format an amount to exactly two decimal places.
pub fn format_amount(value: f64) -> String {
    format!("{value:.2}")
}

/// Human-readable order summary line for the enquiry page.
pub fn summary(quantity: f64, unit_price: f64) -> String {
    format!(
        "Order: {quantity} item(s) • Unit price: R{} • Total: R{}",
        format_amount(unit_price),
        format_amount(total(quantity, unit_price)),
    )
}
