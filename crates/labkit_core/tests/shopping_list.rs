use labkit_core::{checkout, Product};

fn catalog() -> Vec<Product> {
    vec![
        Product::new("Яблоки", 120.0),
        Product::new("Бананы", 89.5),
        Product::new("Молоко", 75.0),
        Product::new("Хлеб", 45.0),
    ]
}

#[test]
fn empty_selection_yields_no_checkout() {
    assert_eq!(checkout(&catalog(), &[]), None);
}

#[test]
fn selection_sums_prices_and_keeps_catalog_order() {
    let summary = checkout(&catalog(), &[0, 2]).expect("selection is non-empty");
    assert_eq!(summary.lines, ["Яблоки — 120 руб.", "Молоко — 75 руб."]);
    assert_eq!(summary.total, 195.0);
}

#[test]
fn fractional_prices_are_carried_through() {
    let summary = checkout(&catalog(), &[1]).unwrap();
    assert_eq!(summary.lines, ["Бананы — 89.5 руб."]);
    assert_eq!(summary.total, 89.5);
}

#[test]
fn out_of_range_indices_are_ignored() {
    let summary = checkout(&catalog(), &[3, 99]).unwrap();
    assert_eq!(summary.lines.len(), 1);
    assert_eq!(summary.total, 45.0);
}

#[test]
fn only_invalid_indices_count_as_empty_selection() {
    assert_eq!(checkout(&catalog(), &[99, 100]), None);
}
