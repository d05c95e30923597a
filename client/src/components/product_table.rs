//! Catalog table with one row per product.
//!
//! The row model ([`table_body`]) is computed separately from the view so the
//! empty-catalog placeholder and the enabled/disabled badge can be tested
//! without a DOM.

#[cfg(test)]
#[path = "product_table_test.rs"]
mod product_table_test;

use leptos::prelude::*;

use crate::net::types::Product;
use crate::state::console::ConsoleState;

pub const COLUMNS: [&str; 5] = ["Title", "Original price", "Price", "Enabled", "Details"];
pub const EMPTY_CATALOG_MESSAGE: &str = "No products yet";

/// Enabled-state indicator for a product row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnabledBadge {
    pub label: &'static str,
    pub class: &'static str,
}

impl EnabledBadge {
    pub fn for_product(product: &Product) -> Self {
        if product.is_enabled {
            Self { label: "Enabled", class: "text-success" }
        } else {
            Self { label: "Disabled", class: "text-secondary" }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductRow {
    pub id: String,
    pub title: String,
    pub origin_price: String,
    pub price: String,
    pub badge: EnabledBadge,
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            title: product.title.clone(),
            origin_price: format_price(product.origin_price),
            price: format_price(product.price),
            badge: EnabledBadge::for_product(product),
        }
    }
}

/// Table body contents: a full-width placeholder or product rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableBody {
    Placeholder { colspan: usize },
    Rows(Vec<ProductRow>),
}

pub fn table_body(products: &[Product]) -> TableBody {
    if products.is_empty() {
        TableBody::Placeholder { colspan: COLUMNS.len() }
    } else {
        TableBody::Rows(products.iter().map(ProductRow::from).collect())
    }
}

/// Whole prices print without decimals; fractional prices print as-is.
pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 { format!("{price:.0}") } else { format!("{price}") }
}

/// Product list table. `on_select` receives the id of the clicked row.
#[component]
pub fn ProductTable(on_select: Callback<String>) -> impl IntoView {
    let console = expect_context::<RwSignal<ConsoleState>>();

    view! {
        <div class="table-responsive">
            <table class="table align-middle">
                <thead>
                    <tr>
                        {COLUMNS.iter().map(|c| view! { <th scope="col">{*c}</th> }).collect::<Vec<_>>()}
                    </tr>
                </thead>
                <tbody>
                    {move || match console.with(|s| table_body(&s.products)) {
                        TableBody::Placeholder { colspan } => {
                            view! {
                                <tr>
                                    <td colspan=colspan.to_string()>
                                        <p class="text-center text-secondary my-0">{EMPTY_CATALOG_MESSAGE}</p>
                                    </td>
                                </tr>
                            }
                                .into_any()
                        }
                        TableBody::Rows(rows) => {
                            rows.into_iter()
                                .map(|row| {
                                    let id = row.id;
                                    view! {
                                        <tr>
                                            <th scope="row">{row.title}</th>
                                            <td>{row.origin_price}</td>
                                            <td>{row.price}</td>
                                            <td>
                                                <span class=row.badge.class>{row.badge.label}</span>
                                            </td>
                                            <td>
                                                <button
                                                    type="button"
                                                    class="btn btn-sm btn-primary"
                                                    on:click=move |_| on_select.run(id.clone())
                                                >
                                                    "View details"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_any()
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}
