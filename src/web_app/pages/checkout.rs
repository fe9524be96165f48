// web_app/pages/checkout.rs - Checkout shipping step

use leptos::prelude::*;

use crate::web_app::components::{PageShell, ShippingMethodForm};
use crate::web_app::model::{validate_shipping_step, FormErrors, ShippingMethod};

/// Holds the chosen method and only shows validation errors after the
/// customer has tried to continue once.
#[component]
pub fn CheckoutPage() -> impl IntoView {
    let shipping_method = RwSignal::new(None::<ShippingMethod>);
    let attempted = RwSignal::new(false);
    let confirmed = RwSignal::new(None::<ShippingMethod>);

    let form_errors = Signal::derive(move || {
        if attempted.get() {
            validate_shipping_step(shipping_method.get())
        } else {
            FormErrors::new()
        }
    });

    let set_shipping_method = Callback::new(move |method: Option<ShippingMethod>| {
        shipping_method.set(method);
        confirmed.set(None);
    });

    let on_continue = move |_: leptos::ev::MouseEvent| {
        attempted.set(true);
        let method = shipping_method.get_untracked();
        if validate_shipping_step(method).is_empty() {
            tracing::info!(method = method.map(ShippingMethod::as_str), "shipping step completed");
            confirmed.set(method);
        }
    };

    view! {
        <PageShell title="Checkout">
            <ShippingMethodForm
                set_shipping_method=set_shipping_method
                form_errors=form_errors
            />
            <div class="flex items-center justify-end gap-4">
                {move || {
                    confirmed
                        .get()
                        .map(|method| {
                            view! {
                                <span class="text-sm text-green-700" data-confirmed=method.as_str()>
                                    "Envio por " {method.label()}
                                </span>
                            }
                        })
                }}
                <button
                    type="button"
                    class="px-6 py-3 bg-imperio-navy text-white rounded-lg hover:opacity-90"
                    on:click=on_continue
                >
                    "Continuar"
                </button>
            </div>
        </PageShell>
    }
}
