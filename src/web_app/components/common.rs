// web_app/components/common.rs - Small building blocks shared by the tables
//
// Pure, stateless components that receive all data via props.

use leptos::prelude::*;

use crate::web_app::model::{BadgeTone, ColumnSpec, PageControls};

/// Status pill.
#[component]
pub fn StatusBadge(
    /// Color tone of the pill
    tone: BadgeTone,
    /// Text inside the pill
    label: &'static str,
) -> impl IntoView {
    view! {
        <span class=tone.class() data-badge=label>
            {label}
        </span>
    }
}

/// Header row built from a column table.
#[component]
pub fn TableHeader(columns: &'static [ColumnSpec]) -> impl IntoView {
    view! {
        <thead class="[&_tr]:border-b">
            <tr class="border-b transition-colors">
                {columns
                    .iter()
                    .map(|column| view! { <th class=column.class>{column.label}</th> })
                    .collect_view()}
            </tr>
        </thead>
    }
}

/// Single row spanning the whole table, used for loading and empty states.
#[component]
pub fn TablePlaceholderRow(
    /// Number of columns to span
    colspan: usize,
    /// Message shown in the row
    message: &'static str,
) -> impl IntoView {
    view! {
        <tr class="border-b" data-row="placeholder">
            <td colspan=colspan.to_string() class="h-24 text-center p-2 align-middle">
                {message}
            </td>
        </tr>
    }
}

fn control_class(enabled: bool) -> &'static str {
    if enabled {
        "inline-flex items-center gap-1 h-10 px-4 rounded-md hover:bg-gray-100 cursor-pointer"
    } else {
        "inline-flex items-center gap-1 h-10 px-4 rounded-md pointer-events-none opacity-50"
    }
}

/// Page-number control. Stateless: the caller owns the current page.
///
/// Every page handed to `on_page_change` is already clamped into range.
#[component]
pub fn PageControlsNav(
    /// Caller's pagination state
    controls: Signal<PageControls>,
    /// Invoked with the requested page
    #[prop(optional_no_strip)]
    on_page_change: Option<Callback<u32>>,
) -> impl IntoView {
    let request = move |page: Option<u32>| {
        if let (Some(page), Some(handler)) = (page, on_page_change) {
            tracing::debug!(page, "page change requested");
            handler.run(page);
        }
    };

    view! {
        <nav role="navigation" aria-label="pagination" class="mt-4 flex justify-center">
            <ul class="flex flex-row items-center gap-1">
                <li>
                    <button
                        type="button"
                        data-control="previous"
                        class=move || control_class(controls.get().has_previous())
                        disabled=move || !controls.get().has_previous()
                        on:click=move |_| request(controls.get_untracked().previous())
                    >
                        "‹ Anterior"
                    </button>
                </li>

                {move || {
                    let current = controls.get();
                    current
                        .pages()
                        .map(move |page| {
                            let active = current.is_active(page);
                            let class = if active {
                                "h-10 w-10 rounded-md border border-gray-300 bg-white font-semibold"
                            } else {
                                "h-10 w-10 rounded-md hover:bg-gray-100 cursor-pointer"
                            };
                            view! {
                                <li>
                                    <button
                                        type="button"
                                        data-page=page.to_string()
                                        aria-current=active.then_some("page")
                                        class=class
                                        on:click=move |_| request(Some(current.clamp(page)))
                                    >
                                        {page}
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()
                }}

                <li>
                    <button
                        type="button"
                        data-control="next"
                        class=move || control_class(controls.get().has_next())
                        disabled=move || !controls.get().has_next()
                        on:click=move |_| request(controls.get_untracked().next())
                    >
                        "Próximo ›"
                    </button>
                </li>
            </ul>
        </nav>
    }
}

/// Admin/checkout page frame with the top navigation.
#[component]
pub fn PageShell(
    /// Page heading
    title: &'static str,
    children: Children,
) -> impl IntoView {
    let links = [
        ("/admin/pedidos", "Pedidos"),
        ("/admin/produtos", "Produtos"),
        ("/checkout", "Checkout"),
    ];

    view! {
        <div class="min-h-screen bg-gray-50 text-gray-900">
            <header class="bg-white border-b border-gray-200">
                <nav class="max-w-6xl mx-auto px-4 h-14 flex items-center gap-6">
                    <span class="font-bold">"Imperio"</span>
                    {links
                        .into_iter()
                        .map(|(href, label)| {
                            view! {
                                <a href=href class="text-sm text-gray-600 hover:text-gray-900">
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
            </header>
            <main class="max-w-6xl mx-auto px-4 py-8">
                <h1 class="text-2xl font-semibold mb-6">{title}</h1>
                {children()}
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_class_toggles_pointer_events() {
        assert!(control_class(true).contains("cursor-pointer"));
        assert!(control_class(false).contains("pointer-events-none"));
        assert!(control_class(false).contains("opacity-50"));
    }
}
