// web_app/pages/products.rs - Admin products page
//
// Owns the catalog and the current page. The table only reports which page
// was requested; this page decides what that page contains.

use leptos::prelude::*;
use rust_decimal::Decimal;

use crate::fixtures::demo_catalog;
use crate::web_app::components::{PageShell, ProductsTable};
use crate::web_app::model::{format_brl, PageWindow, Product, DEFAULT_PAGE_SIZE, FIRST_PAGE};

#[component]
pub fn AdminProductsPage() -> impl IntoView {
    let window = PageWindow::new(DEFAULT_PAGE_SIZE);
    let catalog = RwSignal::new(Vec::<Product>::new());
    let loading = RwSignal::new(true);
    let current_page = RwSignal::new(FIRST_PAGE);
    let editing = RwSignal::new(None::<Product>);

    // Runs after the first render, so the loading row is what SSR emits.
    Effect::new(move |_| {
        match demo_catalog() {
            Ok(products) => {
                tracing::debug!(count = products.len(), "catalog loaded");
                catalog.set(products);
            }
            Err(err) => tracing::error!(%err, "could not load demo catalog"),
        }
        loading.set(false);
    });

    let total_pages = Signal::derive(move || catalog.with(|items| window.total_pages(items.len())));
    let page_items = Signal::derive(move || {
        catalog.with(|items| window.slice(items, current_page.get()).to_vec())
    });

    let on_page_change = Callback::new(move |page: u32| {
        tracing::debug!(page, "products page changed");
        current_page.set(page);
    });

    let on_edit_product = Callback::new(move |product: Product| {
        tracing::info!(product = %product.id, "editing product");
        editing.set(Some(product));
    });

    let on_delete_product = Callback::new(move |id: String| {
        catalog.update(|items| items.retain(|product| product.id != id));
        let last = catalog.with_untracked(|items| window.total_pages(items.len()));
        current_page.update(|page| *page = (*page).min(last));
        if editing.with_untracked(|current| current.as_ref().is_some_and(|p| p.id == id)) {
            editing.set(None);
        }
        tracing::info!(product = %id, "product deleted");
    });

    let format_currency = Callback::new(|value: Decimal| format_brl(value));

    view! {
        <PageShell title="Produtos">
            <ProductsTable
                loading=loading
                products=page_items
                format_currency=format_currency
                on_edit_product=on_edit_product
                on_delete_product=on_delete_product
                current_page=current_page
                total_pages=total_pages
                on_page_change=on_page_change
            />
            {move || {
                editing.get().map(|product| {
                    view! {
                        <section class="mt-6 rounded-md border bg-white p-6" data-panel="product-edit">
                            <div class="flex justify-between items-start">
                                <div>
                                    <h2 class="text-lg font-semibold">{product.display_name().to_string()}</h2>
                                    <p class="text-sm text-gray-500">{product.display_brand().to_string()}</p>
                                    <p class="mt-2">{format_brl(product.price())}</p>
                                </div>
                                <button
                                    type="button"
                                    class="text-sm text-gray-500 hover:text-gray-800"
                                    on:click=move |_| editing.set(None)
                                >
                                    "Fechar"
                                </button>
                            </div>
                        </section>
                    }
                })
            }}
        </PageShell>
    }
}
