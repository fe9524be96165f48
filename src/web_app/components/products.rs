// web_app/components/products.rs - Admin products table
//
// - ProductsTable: loading/empty/rows body plus the page-number control
// - ProductRow: name, brand, price, status badge, edit and delete buttons

use leptos::prelude::*;
use rust_decimal::Decimal;

use super::common::{PageControlsNav, StatusBadge, TableHeader, TablePlaceholderRow};
use crate::web_app::model::{
    PageControls, Product, TableBody, FIRST_PAGE, LOADING_PRODUCTS_MESSAGE, NO_PRODUCTS_MESSAGE,
    PRODUCT_COLUMNS,
};

/// Products table with optional pagination
///
/// Pagination is owned by the caller: pass the page being shown, the page
/// count, and a callback that receives the page the user asked for.
#[component]
pub fn ProductsTable(
    /// Show the loading row regardless of the list
    #[prop(into)]
    loading: Signal<bool>,
    /// Products for the current page
    #[prop(into)]
    products: Signal<Vec<Product>>,
    /// Renders a price
    format_currency: Callback<Decimal, String>,
    /// Edit button on a row
    on_edit_product: Callback<Product>,
    /// Delete button on a row, with the product id
    on_delete_product: Callback<String>,
    /// Page being shown (1-indexed)
    #[prop(into, default = Signal::stored(FIRST_PAGE))]
    current_page: Signal<u32>,
    /// Number of pages
    #[prop(into, default = Signal::stored(FIRST_PAGE))]
    total_pages: Signal<u32>,
    /// Receives the requested page, already clamped
    #[prop(optional)]
    on_page_change: Option<Callback<u32>>,
) -> impl IntoView {
    let body = move || TableBody::resolve(loading.get(), products.with(Vec::len));
    let controls = Signal::derive(move || PageControls::new(current_page.get(), total_pages.get()));
    let show_controls =
        move || controls.get().should_render(loading.get(), products.with(Vec::len));

    view! {
        <div class="w-full">
            <div class="rounded-md border bg-white">
                <div class="overflow-x-auto">
                    <table class="w-full caption-bottom text-sm">
                        <TableHeader columns=&PRODUCT_COLUMNS />
                        <tbody>
                            {move || match body() {
                                TableBody::Loading => view! {
                                    <TablePlaceholderRow
                                        colspan=PRODUCT_COLUMNS.len()
                                        message=LOADING_PRODUCTS_MESSAGE
                                    />
                                }
                                .into_any(),
                                TableBody::Empty => view! {
                                    <TablePlaceholderRow
                                        colspan=PRODUCT_COLUMNS.len()
                                        message=NO_PRODUCTS_MESSAGE
                                    />
                                }
                                .into_any(),
                                TableBody::Rows => view! {
                                    <For
                                        each=move || products.get()
                                        key=|product| product.id.clone()
                                        children=move |product| {
                                            view! {
                                                <ProductRow
                                                    product=product
                                                    format_currency=format_currency
                                                    on_edit_product=on_edit_product
                                                    on_delete_product=on_delete_product
                                                />
                                            }
                                        }
                                    />
                                }
                                .into_any(),
                            }}
                        </tbody>
                    </table>
                </div>
            </div>

            <Show when=show_controls>
                <PageControlsNav controls=controls on_page_change=on_page_change />
            </Show>
        </div>
    }
}

/// One product row.
#[component]
pub fn ProductRow(
    product: Product,
    format_currency: Callback<Decimal, String>,
    on_edit_product: Callback<Product>,
    on_delete_product: Callback<String>,
) -> impl IntoView {
    let status = product.status;
    let price = format_currency.run(product.price());
    let name = product.display_name().to_string();
    let brand = product.display_brand().to_string();
    let product_id = product.id.clone();

    view! {
        <tr class="border-b transition-colors hover:bg-gray-50" data-row="product">
            <td class="p-2 align-middle">
                <div class="flex flex-col">
                    <span class="font-medium">{name}</span>
                    <span class="text-xs text-gray-500">{brand}</span>
                </div>
            </td>
            <td class="p-2 align-middle text-right">{price}</td>
            <td class="p-2 align-middle text-center">
                <StatusBadge tone=status.badge() label=status.label() />
            </td>
            <td class="p-2 align-middle">
                <div class="flex justify-end space-x-1 whitespace-nowrap">
                    <button
                        type="button"
                        title="Editar"
                        data-action="edit"
                        class="h-8 w-8 rounded-md hover:bg-gray-100"
                        on:click=move |_| on_edit_product.run(product.clone())
                    >
                        "✎"
                    </button>
                    <button
                        type="button"
                        title="Excluir"
                        data-action="delete"
                        class="h-8 w-8 rounded-md text-red-500 hover:text-red-700 hover:bg-red-50"
                        on:click=move |_| on_delete_product.run(product_id.clone())
                    >
                        "🗑"
                    </button>
                </div>
            </td>
        </tr>
    }
}
