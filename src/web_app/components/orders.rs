// web_app/components/orders.rs - Admin orders table
//
// - OrdersTable: one row per order, or a single placeholder row
// - OrderTableRow: order columns plus the actions menu
// - OrderDetail: read-only panel opened by "Ver detalhes"
//
// The table keeps no state; every action goes straight to a callback.

use leptos::prelude::*;

use super::common::{StatusBadge, TableHeader, TablePlaceholderRow};
use crate::web_app::model::{format_brl, Order, OrderStatus, NO_ORDERS_MESSAGE, ORDER_COLUMNS};

const CELL: &str = "p-2 align-middle";
const WIDE_CELL: &str = "p-2 align-middle hidden md:table-cell";

/// Orders table for the admin panel
#[component]
pub fn OrdersTable(
    /// Orders to render, in display order
    #[prop(into)]
    orders: Signal<Vec<Order>>,
    /// "Ver detalhes" on a row
    on_view_order: Callback<Order>,
    /// New status picked from a row's menu, as (order id, status)
    on_change_order_status: Callback<(String, OrderStatus)>,
    /// "Excluir" on a row, with the order id
    on_delete_order: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="rounded-md border bg-white">
            <div class="w-full">
                <table class="w-full caption-bottom text-sm">
                    <TableHeader columns=&ORDER_COLUMNS />
                    <tbody>
                        <Show
                            when=move || orders.with(|list| !list.is_empty())
                            fallback=|| view! {
                                <TablePlaceholderRow
                                    colspan=ORDER_COLUMNS.len()
                                    message=NO_ORDERS_MESSAGE
                                />
                            }
                        >
                            <For
                                each=move || orders.get()
                                key=|order| order.id.clone()
                                children=move |order| {
                                    view! {
                                        <OrderTableRow
                                            order=order
                                            on_view_order=on_view_order
                                            on_change_order_status=on_change_order_status
                                            on_delete_order=on_delete_order
                                        />
                                    }
                                }
                            />
                        </Show>
                    </tbody>
                </table>
            </div>
        </div>
    }
}

/// A single order row with its actions menu.
#[component]
pub fn OrderTableRow(
    order: Order,
    on_view_order: Callback<Order>,
    on_change_order_status: Callback<(String, OrderStatus)>,
    on_delete_order: Callback<String>,
) -> impl IntoView {
    let menu_open = RwSignal::new(false);
    let status = order.status;
    let order_id = order.id.clone();

    let status_options = status
        .alternatives()
        .map(|next| {
            let order_id = order_id.clone();
            view! {
                <button
                    type="button"
                    data-action="change-status"
                    class="w-full text-left px-3 py-1.5 text-sm hover:bg-gray-100"
                    on:click=move |_| {
                        menu_open.set(false);
                        on_change_order_status.run((order_id.clone(), next));
                    }
                >
                    {next.label()}
                </button>
            }
        })
        .collect_view();

    let view_target = order.clone();
    let delete_id = order_id.clone();

    view! {
        <tr class="border-b transition-colors hover:bg-gray-50" data-row="order">
            <td class=format!("{} font-medium", CELL)>{order.display_id()}</td>
            <td class=WIDE_CELL>{order.display_date()}</td>
            <td class=CELL>
                <div class="flex flex-col">
                    <span>{order.customer.name.clone()}</span>
                    {order.customer.email.clone().map(|email| view! {
                        <span class="text-xs text-gray-500 hidden md:inline">{email}</span>
                    })}
                </div>
            </td>
            <td class=format!("{} text-right", WIDE_CELL)>{format_brl(order.total)}</td>
            <td class=WIDE_CELL>{order.payment.describe()}</td>
            <td class=CELL>
                <StatusBadge tone=status.badge() label=status.label() />
            </td>
            <td class=format!("{} text-center", CELL)>
                <div class="relative inline-block text-left">
                    <button
                        type="button"
                        title="Ações"
                        class="h-8 w-8 rounded-md hover:bg-gray-100"
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        "⋮"
                    </button>
                    <div class=move || {
                        if menu_open.get() {
                            "absolute right-0 z-10 mt-1 w-48 rounded-md border bg-white shadow-lg py-1"
                        } else {
                            "hidden"
                        }
                    }>
                        <button
                            type="button"
                            data-action="view"
                            class="w-full text-left px-3 py-1.5 text-sm hover:bg-gray-100"
                            on:click=move |_| {
                                menu_open.set(false);
                                on_view_order.run(view_target.clone());
                            }
                        >
                            "Ver detalhes"
                        </button>
                        <span class="block px-3 pt-2 pb-1 text-xs font-semibold text-gray-500">
                            "Alterar status"
                        </span>
                        {status_options}
                        <button
                            type="button"
                            data-action="delete"
                            class="w-full text-left px-3 py-1.5 text-sm text-red-600 hover:bg-red-50"
                            on:click=move |_| {
                                menu_open.set(false);
                                on_delete_order.run(delete_id.clone());
                            }
                        >
                            "Excluir"
                        </button>
                    </div>
                </div>
            </td>
        </tr>
    }
}

/// Read-only order summary.
#[component]
pub fn OrderDetail(
    order: Order,
    /// Close button
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <section class="mt-6 rounded-md border bg-white p-6" data-panel="order-detail">
            <div class="flex justify-between items-start mb-4">
                <h2 class="text-lg font-semibold">"Pedido " {order.display_id()}</h2>
                <button
                    type="button"
                    class="text-sm text-gray-500 hover:text-gray-800"
                    on:click=move |_| on_close.run(())
                >
                    "Fechar"
                </button>
            </div>
            <dl class="grid grid-cols-2 gap-y-2 text-sm">
                <dt class="text-gray-500">"Data"</dt>
                <dd>{order.display_date()}</dd>
                <dt class="text-gray-500">"Cliente"</dt>
                <dd>{order.customer.name.clone()}</dd>
                <dt class="text-gray-500">"E-mail"</dt>
                <dd>{order.customer.email.clone().unwrap_or_else(|| "-".to_string())}</dd>
                <dt class="text-gray-500">"Total"</dt>
                <dd>{format_brl(order.total)}</dd>
                <dt class="text-gray-500">"Pagamento"</dt>
                <dd>{order.payment.describe()}</dd>
                <dt class="text-gray-500">"Status"</dt>
                <dd><StatusBadge tone=order.status.badge() label=order.status.label() /></dd>
            </dl>
        </section>
    }
}
