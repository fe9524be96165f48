// web_app/pages/orders.rs - Admin orders page
//
// Owns the order list and applies the table's callbacks to it.

use leptos::prelude::*;

use crate::fixtures::demo_orders;
use crate::web_app::components::{OrderDetail, OrdersTable, PageShell};
use crate::web_app::model::{Order, OrderStatus};

/// Replaces the status of the order with `id`. Returns false when absent.
pub fn apply_status_change(orders: &mut [Order], id: &str, status: OrderStatus) -> bool {
    match orders.iter_mut().find(|order| order.id == id) {
        Some(order) => {
            order.status = status;
            true
        }
        None => false,
    }
}

/// Drops the order with `id`. Returns false when absent.
pub fn remove_order(orders: &mut Vec<Order>, id: &str) -> bool {
    let before = orders.len();
    orders.retain(|order| order.id != id);
    orders.len() != before
}

#[component]
pub fn AdminOrdersPage() -> impl IntoView {
    let initial = demo_orders().unwrap_or_else(|err| {
        tracing::error!(%err, "could not load demo orders");
        Vec::new()
    });
    let orders = RwSignal::new(initial);
    let selected = RwSignal::new(None::<Order>);

    let on_view_order = Callback::new(move |order: Order| {
        tracing::info!(order = %order.id, "viewing order");
        selected.set(Some(order));
    });

    let on_change_order_status = Callback::new(move |(id, status): (String, OrderStatus)| {
        let changed = orders
            .try_update(|list| apply_status_change(list, &id, status))
            .unwrap_or(false);
        if changed {
            tracing::info!(order = %id, status = status.as_str(), "order status changed");
            selected.update(|current| {
                if let Some(order) = current.as_mut().filter(|order| order.id == id) {
                    order.status = status;
                }
            });
        }
    });

    let on_delete_order = Callback::new(move |id: String| {
        if orders.try_update(|list| remove_order(list, &id)).unwrap_or(false) {
            tracing::info!(order = %id, "order deleted");
            if selected.with_untracked(|current| current.as_ref().is_some_and(|o| o.id == id)) {
                selected.set(None);
            }
        }
    });

    let on_close = Callback::new(move |()| selected.set(None));

    view! {
        <PageShell title="Pedidos">
            <OrdersTable
                orders=orders
                on_view_order=on_view_order
                on_change_order_status=on_change_order_status
                on_delete_order=on_delete_order
            />
            {move || {
                selected
                    .get()
                    .map(|order| view! { <OrderDetail order=order on_close=on_close /> })
            }}
        </PageShell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orders() -> Vec<Order> {
        demo_orders().unwrap()
    }

    #[test]
    fn test_apply_status_change() {
        let mut list = orders();
        assert!(apply_status_change(&mut list, "10231", OrderStatus::Shipped));
        assert_eq!(list[0].status, OrderStatus::Shipped);
        assert!(!apply_status_change(&mut list, "missing", OrderStatus::Shipped));
    }

    #[test]
    fn test_remove_order() {
        let mut list = orders();
        let count = list.len();
        assert!(remove_order(&mut list, "10232"));
        assert_eq!(list.len(), count - 1);
        assert!(list.iter().all(|order| order.id != "10232"));
        assert!(!remove_order(&mut list, "10232"));
    }
}
