use super::*;

// =============================================================
// parse_amount
// =============================================================

#[test]
fn empty_input_is_zero() {
    assert_eq!(parse_amount(""), 0.0);
}

#[test]
fn non_numeric_input_is_zero() {
    assert_eq!(parse_amount("abc"), 0.0);
}

#[test]
fn plain_number_parses() {
    assert_eq!(parse_amount("12.5"), 12.5);
}

#[test]
fn numeric_prefix_counts() {
    // parseFloat("12abc") is 12 in the browser.
    assert_eq!(parse_amount("12abc"), 12.0);
    assert_eq!(parse_amount("3.5x2"), 3.5);
}

#[test]
fn surrounding_whitespace_is_ignored() {
    assert_eq!(parse_amount("  7 "), 7.0);
}

#[test]
fn lone_minus_is_zero() {
    assert_eq!(parse_amount("-"), 0.0);
}

// =============================================================
// total and formatting
// =============================================================

#[test]
fn total_is_product() {
    assert_eq!(total(3.0, 2.5), 7.5);
}

#[test]
fn format_rounds_to_two_decimals() {
    assert_eq!(format_amount(total(3.0, 19.999)), "60.00");
    assert_eq!(format_amount(0.0), "0.00");
    assert_eq!(format_amount(1.005), "1.00");
}

#[test]
fn summary_renders_quantity_and_formatted_amounts() {
    assert_eq!(
        summary(3.0, 19.99),
        "Order: 3 item(s) • Unit price: R19.99 • Total: R59.97"
    );
}

#[test]
fn summary_with_invalid_inputs_is_all_zero() {
    let qty = parse_amount("abc");
    let unit = parse_amount("");
    assert_eq!(summary(qty, unit), "Order: 0 item(s) • Unit price: R0.00 • Total: R0.00");
}
