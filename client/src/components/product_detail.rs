//! Detail pane for the selected product.

#[cfg(test)]
#[path = "product_detail_test.rs"]
mod product_detail_test;

use leptos::prelude::*;

use super::product_table::format_price;
use crate::net::types::Product;
use crate::state::console::ConsoleState;

pub const NO_SELECTION_MESSAGE: &str = "Select a product to view its details";

/// Display-ready fields of a product card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductDetail {
    pub title: String,
    pub category: String,
    pub image_url: String,
    pub description: String,
    pub content: String,
    pub origin_price: String,
    pub price: String,
    pub unit: String,
    pub gallery: Vec<String>,
}

impl ProductDetail {
    /// The "More images" section is only shown for a non-empty gallery.
    pub fn has_gallery(&self) -> bool {
        !self.gallery.is_empty()
    }

    /// Unit suffix for the price line; empty when the API gave no unit.
    pub fn price_suffix(&self) -> String {
        if self.unit.is_empty() { String::new() } else { format!(" per {}", self.unit) }
    }
}

impl From<&Product> for ProductDetail {
    fn from(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            category: product.category.clone(),
            image_url: product.image_url.clone(),
            description: product.description.clone(),
            content: product.content.clone(),
            origin_price: format_price(product.origin_price),
            price: format_price(product.price),
            unit: product.unit.clone(),
            gallery: product.images_url.clone(),
        }
    }
}

/// Right-hand pane: the selected product card, or a prompt to pick one.
#[component]
pub fn ProductDetailPane(on_close: Callback<()>) -> impl IntoView {
    let console = expect_context::<RwSignal<ConsoleState>>();

    move || match console.with(|s| s.selected.as_ref().map(ProductDetail::from)) {
        None => view! { <p class="text-secondary">{NO_SELECTION_MESSAGE}</p> }.into_any(),
        Some(detail) => {
            let suffix = detail.price_suffix();
            let gallery = detail.has_gallery().then(|| {
                view! {
                    <h5 class="card-title">"More images"</h5>
                    <div class="d-flex flex-wrap mb-3">
                        {detail
                            .gallery
                            .iter()
                            .map(|url| {
                                view! {
                                    <img class="images object-fit me-3 mb-3" src=url.clone() alt="More images"/>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                }
            });
            view! {
                <div class="card">
                    <img src=detail.image_url.clone() class="card-img-top" alt=detail.title.clone()/>
                    <div class="card-body">
                        <h5 class="card-title">
                            {detail.title.clone()}
                            <span class="badge bg-primary ms-2">{detail.category.clone()}</span>
                        </h5>
                        <p class="card-text">"Description: " {detail.description.clone()}</p>
                        <p class="card-text">"Content: " {detail.content.clone()}</p>
                        <p class="card-text">
                            <del class="text-secondary">{detail.origin_price.clone()}</del>
                            " / "
                            {detail.price.clone()}
                            {suffix}
                        </p>
                        {gallery}
                        <button type="button" class="btn btn-primary" on:click=move |_| on_close.run(())>
                            "Close"
                        </button>
                    </div>
                </div>
            }
                .into_any()
        }
    }
}
