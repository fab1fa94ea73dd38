use estimator_core::{format_count, format_currency};

#[test]
fn currency_has_no_decimals_and_groups_thousands() {
    assert_eq!(format_currency(0.0), "$0");
    assert_eq!(format_currency(200.0), "$200");
    assert_eq!(format_currency(220_000.0), "$220,000");
    assert_eq!(format_currency(1_234_567.89), "$1,234,568");
    assert_eq!(format_currency(999.5), "$1,000");
    assert_eq!(format_currency(-1234.5), "-$1,235");
}

#[test]
fn counts_are_whole_numbers() {
    assert_eq!(format_count(5.0), "5");
    assert_eq!(format_count(1000.0), "1,000");
    assert_eq!(format_count(12_345.4), "12,345");
}
