use super::*;

fn product(id: &str, enabled: bool) -> Product {
    Product {
        id: id.to_owned(),
        title: format!("Product {id}"),
        origin_price: 300.0,
        price: 249.5,
        is_enabled: enabled,
        ..Product::default()
    }
}

#[test]
fn empty_catalog_renders_single_placeholder_spanning_all_columns() {
    assert_eq!(table_body(&[]), TableBody::Placeholder { colspan: 5 });
    assert_eq!(COLUMNS.len(), 5);
}

#[test]
fn catalog_renders_one_row_per_product_in_order() {
    let TableBody::Rows(rows) = table_body(&[product("a", true), product("b", false)]) else {
        panic!("expected rows");
    };
    let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[test]
fn enabled_and_disabled_products_get_distinct_badges() {
    let TableBody::Rows(rows) = table_body(&[product("a", true), product("b", false)]) else {
        panic!("expected rows");
    };
    assert_eq!(rows[0].badge, EnabledBadge { label: "Enabled", class: "text-success" });
    assert_eq!(rows[1].badge, EnabledBadge { label: "Disabled", class: "text-secondary" });
    assert_ne!(rows[0].badge, rows[1].badge);
}

#[test]
fn row_formats_prices() {
    let row = ProductRow::from(&product("a", true));
    assert_eq!(row.origin_price, "300");
    assert_eq!(row.price, "249.5");
}

#[test]
fn format_price_drops_trailing_zero_fraction() {
    assert_eq!(format_price(0.0), "0");
    assert_eq!(format_price(1200.0), "1200");
    assert_eq!(format_price(9.99), "9.99");
}
