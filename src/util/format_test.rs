use super::*;

#[test]
fn format_vnd_groups_thousands() {
    assert_eq!(format_vnd(29_990_000), "29.990.000\u{a0}₫");
    assert_eq!(format_vnd(25_000), "25.000\u{a0}₫");
}

#[test]
fn format_vnd_small_amounts_have_no_separator() {
    assert_eq!(format_vnd(0), "0\u{a0}₫");
    assert_eq!(format_vnd(999), "999\u{a0}₫");
    assert_eq!(format_vnd(1000), "1.000\u{a0}₫");
}

#[test]
fn format_vnd_range_joins_both_ends() {
    assert_eq!(format_vnd_range(299_000, 399_000), "299.000\u{a0}₫ - 399.000\u{a0}₫");
}

#[test]
fn discount_percent_rounds_down() {
    assert_eq!(discount_percent(29_990_000, 32_990_000), 9);
    assert_eq!(discount_percent(100, 100), 0);
    assert_eq!(discount_percent(5, 0), 0);
}
