// web_app/components/checkout.rs - Shipping method step of checkout
//
// The form marks the quote as calculating, reports the chosen method to its
// caller, then shows a simulated quote after a short delay. `QuoteFlow` owns
// that sequence and talks to the clock through a `QuoteScheduler`. Choosing
// again cancels the pending timer, and the quote ticket check in
// `ShippingSelection` drops any callback that slipped through.

use std::time::Duration;

use leptos::prelude::*;

use crate::web_app::model::{
    format_brl, FormErrors, QuoteTicket, ShippingMethod, ShippingSelection,
    SHIPPING_METHOD_FIELD, SHIPPING_QUOTE_DELAY,
};
use crate::web_app::region::RegionProvider;

/// Delivery-time disclaimer under the form.
pub const DELIVERY_NOTICE: &str =
    "Os prazos de entrega são estimados e podem variar de acordo com a região.";

fn option_class(selected: bool) -> &'static str {
    if selected {
        "block border rounded-lg p-4 cursor-pointer transition-all border-imperio-navy bg-imperio-extra-light-navy"
    } else {
        "block border rounded-lg p-4 cursor-pointer transition-all hover:border-imperio-navy/30 border-gray-200"
    }
}

/// Runs a quote task after a delay.
pub trait QuoteScheduler: Copy + Send + Sync + 'static {
    type Handle: Send + Sync + 'static;

    /// `None` when the task could not be scheduled; the task is dropped.
    fn schedule(self, task: impl FnOnce() + 'static, delay: Duration) -> Option<Self::Handle>;

    fn cancel(self, handle: Self::Handle);
}

/// `window.setTimeout`, through Leptos.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimer;

impl QuoteScheduler for BrowserTimer {
    type Handle = TimeoutHandle;

    fn schedule(self, task: impl FnOnce() + 'static, delay: Duration) -> Option<TimeoutHandle> {
        set_timeout_with_handle(task, delay)
            .map_err(|err| tracing::warn!(?err, "could not schedule shipping quote"))
            .ok()
    }

    fn cancel(self, handle: TimeoutHandle) {
        handle.clear();
    }
}

/// Selection state plus the one timer that may still resolve it.
///
/// Created inside a reactive owner; disposing the owner cancels the
/// pending quote.
#[derive(Clone, Copy)]
pub struct QuoteFlow<S: QuoteScheduler> {
    selection: RwSignal<ShippingSelection>,
    pending: StoredValue<Option<S::Handle>>,
    region: StoredValue<RegionProvider>,
    scheduler: S,
    delay: Duration,
}

impl<S: QuoteScheduler> QuoteFlow<S> {
    pub fn new(region: RegionProvider, scheduler: S, delay: Duration) -> Self {
        let flow = Self {
            selection: RwSignal::new(ShippingSelection::new()),
            pending: StoredValue::new(None),
            region: StoredValue::new(region),
            scheduler,
            delay,
        };
        on_cleanup(move || flow.cancel_pending());
        flow
    }

    pub fn selection(&self) -> RwSignal<ShippingSelection> {
        self.selection
    }

    pub fn cancel_pending(self) {
        if let Some(handle) = self.pending.try_update_value(Option::take).flatten() {
            self.scheduler.cancel(handle);
        }
    }

    /// Select `method`, report it, then schedule its quote.
    ///
    /// `report` already sees the selection as calculating. If no timer can
    /// be scheduled the quote resolves on the spot.
    pub fn choose(
        self,
        method: Option<ShippingMethod>,
        report: Callback<Option<ShippingMethod>>,
    ) {
        tracing::debug!(method = method.map(ShippingMethod::as_str), "shipping method selected");
        self.cancel_pending();
        let ticket = self.selection.try_update(|state| state.select(method)).flatten();
        report.run(method);

        let Some(ticket) = ticket else {
            return;
        };
        match self.scheduler.schedule(move || self.finish(ticket), self.delay) {
            Some(handle) => {
                self.pending.try_set_value(Some(handle));
            }
            None => self.finish(ticket),
        }
    }

    fn finish(self, ticket: QuoteTicket) {
        let current = self.region.try_get_value().unwrap_or_default().current_region();
        if self.selection.try_update(|state| state.resolve(ticket, &current)) == Some(true) {
            self.pending.try_set_value(None);
            tracing::debug!(region = %current, method = ticket.method().as_str(), "shipping quote ready");
        }
    }
}

/// Shipping method selection with cost estimate
///
/// The region used for the estimate comes from the `region` prop, then a
/// `RegionProvider` in context, then the browser's stored state.
#[component]
pub fn ShippingMethodForm(
    /// Receives every selection before its cost is known
    set_shipping_method: Callback<Option<ShippingMethod>>,
    /// Validation messages computed by the caller
    #[prop(into)]
    form_errors: Signal<FormErrors>,
    /// Region lookup override
    #[prop(optional)]
    region: Option<RegionProvider>,
    /// Simulated quote latency
    #[prop(default = SHIPPING_QUOTE_DELAY)]
    quote_delay: Duration,
) -> impl IntoView {
    let region = region
        .or_else(use_context::<RegionProvider>)
        .unwrap_or_else(RegionProvider::ambient);
    let flow = QuoteFlow::new(region, BrowserTimer, quote_delay);
    let selection = flow.selection();

    let on_change = move |ev: leptos::ev::Event| {
        match event_target_value(&ev).parse::<ShippingMethod>() {
            Ok(method) => flow.choose(Some(method), set_shipping_method),
            Err(err) => tracing::warn!(%err, "ignoring shipping radio change"),
        }
    };

    let error_message =
        move || form_errors.with(|errors| errors.get(SHIPPING_METHOD_FIELD).cloned());

    view! {
        <div class="bg-white rounded-lg shadow-subtle p-6 mb-8">
            <h2 class="text-xl font-medium mb-6">"Método de Envio"</h2>

            <div role="radiogroup" class="space-y-4">
                {ShippingMethod::ALL
                    .into_iter()
                    .map(move |method| {
                        let is_selected = move || selection.with(|state| state.method() == Some(method));
                        view! {
                            <label
                                class=move || option_class(is_selected())
                                data-method=method.as_str()
                            >
                                <div class="flex items-center space-x-3">
                                    <input
                                        type="radio"
                                        name="shipping_method"
                                        id=method.as_str()
                                        value=method.as_str()
                                        prop:checked=is_selected
                                        on:change=on_change
                                    />
                                    <span class="flex items-center cursor-pointer">
                                        <span class="mr-2 text-imperio-navy">{method.icon()}</span>
                                        <span class="font-medium">{method.label()}</span>
                                    </span>
                                </div>
                            </label>
                        }
                    })
                    .collect_view()}
            </div>

            {move || {
                error_message()
                    .map(|message| {
                        view! {
                            <p class="text-imperio-red text-sm mt-3" data-error=SHIPPING_METHOD_FIELD>
                                {message}
                            </p>
                        }
                    })
            }}

            <Show when=move || selection.with(|state| state.method().is_some())>
                <div class="mt-4 p-4 bg-imperio-extra-light-navy rounded-lg" data-panel="shipping-cost">
                    <h3 class="font-medium mb-2">"Valor do Frete"</h3>
                    <Show
                        when=move || selection.with(ShippingSelection::is_calculating)
                        fallback=move || view! {
                            <div class="flex items-center justify-between">
                                <span>"Total do frete:"</span>
                                <span class="font-semibold text-imperio-navy">
                                    {move || format_brl(selection.with(ShippingSelection::cost))}
                                </span>
                            </div>
                        }
                    >
                        <div class="flex items-center">
                            <div class="w-5 h-5 border-t-2 border-b-2 border-imperio-navy rounded-full animate-spin mr-2"></div>
                            <span>"Calculando..."</span>
                        </div>
                    </Show>
                </div>
            </Show>

            <div role="alert" class="mt-4 rounded-lg border p-4 bg-yellow-50 border-yellow-200 flex gap-3">
                <span class="text-yellow-600">"⚠"</span>
                <p class="text-sm text-yellow-800">{DELIVERY_NOTICE}</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    use rust_decimal::Decimal;

    use crate::web_app::region::FixedRegion;

    type Task = Box<dyn FnOnce()>;

    thread_local! {
        static NEXT_HANDLE: Cell<u32> = const { Cell::new(0) };
        static SCHEDULED: RefCell<Vec<(u32, Task)>> = RefCell::new(Vec::new());
        static CANCELLED: RefCell<Vec<u32>> = RefCell::new(Vec::new());
    }

    /// Holds tasks until the test fires them.
    #[derive(Clone, Copy)]
    struct ManualTimer;

    impl QuoteScheduler for ManualTimer {
        type Handle = u32;

        fn schedule(self, task: impl FnOnce() + 'static, _delay: Duration) -> Option<u32> {
            let handle = NEXT_HANDLE.with(|next| {
                next.set(next.get() + 1);
                next.get()
            });
            SCHEDULED.with_borrow_mut(|tasks| tasks.push((handle, Box::new(task))));
            Some(handle)
        }

        fn cancel(self, handle: u32) {
            SCHEDULED.with_borrow_mut(|tasks| tasks.retain(|(id, _)| *id != handle));
            CANCELLED.with_borrow_mut(|cancelled| cancelled.push(handle));
        }
    }

    #[derive(Clone, Copy)]
    struct FailingTimer;

    impl QuoteScheduler for FailingTimer {
        type Handle = ();

        fn schedule(self, _task: impl FnOnce() + 'static, _delay: Duration) -> Option<()> {
            None
        }

        fn cancel(self, _handle: ()) {}
    }

    fn scheduled() -> Vec<u32> {
        SCHEDULED.with_borrow(|tasks| tasks.iter().map(|(id, _)| *id).collect())
    }

    fn cancelled() -> Vec<u32> {
        CANCELLED.with_borrow(|cancelled| cancelled.clone())
    }

    fn fire(handle: u32) {
        let task = SCHEDULED.with_borrow_mut(|tasks| {
            let index = tasks.iter().position(|(id, _)| *id == handle).unwrap();
            tasks.remove(index).1
        });
        task();
    }

    fn sp_flow<S: QuoteScheduler>(scheduler: S) -> QuoteFlow<S> {
        NEXT_HANDLE.set(0);
        SCHEDULED.with_borrow_mut(Vec::clear);
        CANCELLED.with_borrow_mut(Vec::clear);
        QuoteFlow::new(
            RegionProvider::new(FixedRegion::new("SP")),
            scheduler,
            SHIPPING_QUOTE_DELAY,
        )
    }

    fn ignore() -> Callback<Option<ShippingMethod>> {
        Callback::new(|_: Option<ShippingMethod>| {})
    }

    #[test]
    fn test_option_class_highlights_selection() {
        assert!(option_class(true).contains("border-imperio-navy bg-imperio-extra-light-navy"));
        assert!(option_class(false).contains("border-gray-200"));
    }

    #[test]
    fn test_caller_sees_choice_while_calculating() {
        let owner = Owner::new();
        owner.with(|| {
            let flow = sp_flow(ManualTimer);
            let selection = flow.selection();
            let seen = StoredValue::new(Vec::new());
            let report = Callback::new(move |method: Option<ShippingMethod>| {
                let calculating = selection.with_untracked(ShippingSelection::is_calculating);
                seen.update_value(|seen| seen.push((method, calculating)));
            });

            flow.choose(Some(ShippingMethod::Sedex), report);

            assert_eq!(seen.get_value(), vec![(Some(ShippingMethod::Sedex), true)]);
            assert_eq!(scheduled(), vec![1]);
        });
    }

    #[test]
    fn test_reselecting_cancels_replaced_timer() {
        let owner = Owner::new();
        owner.with(|| {
            let flow = sp_flow(ManualTimer);
            flow.choose(Some(ShippingMethod::Sedex), ignore());
            flow.choose(Some(ShippingMethod::Pac), ignore());

            assert_eq!(cancelled(), vec![1]);
            assert_eq!(scheduled(), vec![2]);

            fire(2);
            let selection = flow.selection().get_untracked();
            assert!(!selection.is_calculating());
            assert_eq!(selection.method(), Some(ShippingMethod::Pac));
            assert_eq!(selection.cost(), Decimal::from(15));
        });
    }

    #[test]
    fn test_clearing_cancels_without_scheduling() {
        let owner = Owner::new();
        owner.with(|| {
            let flow = sp_flow(ManualTimer);
            let seen = StoredValue::new(Vec::new());
            let report = Callback::new(move |method: Option<ShippingMethod>| {
                seen.update_value(|seen| seen.push(method));
            });

            flow.choose(Some(ShippingMethod::Transportadora), report);
            flow.choose(None, report);

            assert_eq!(seen.get_value(), vec![Some(ShippingMethod::Transportadora), None]);
            assert_eq!(cancelled(), vec![1]);
            assert!(scheduled().is_empty());
            assert_eq!(flow.selection().get_untracked().cost(), Decimal::ZERO);
        });
    }

    #[test]
    fn test_cleanup_cancels_pending_quote() {
        let owner = Owner::new();
        owner.with(|| {
            sp_flow(ManualTimer).choose(Some(ShippingMethod::Sedex), ignore());
        });
        assert!(cancelled().is_empty());

        owner.cleanup();
        assert_eq!(cancelled(), vec![1]);
        assert!(scheduled().is_empty());
    }

    #[test]
    fn test_unscheduled_quote_resolves_immediately() {
        let owner = Owner::new();
        owner.with(|| {
            let flow = sp_flow(FailingTimer);
            flow.choose(Some(ShippingMethod::Sedex), ignore());

            let selection = flow.selection().get_untracked();
            assert!(!selection.is_calculating());
            assert_eq!(selection.cost(), Decimal::from(20));
        });
    }
}
