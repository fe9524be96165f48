// web_app/app.rs - Root application component
//
// Sets up meta tags, the stylesheet and the routes for the admin pages and
// checkout.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::pages::{AdminOrdersPage, AdminProductsPage, CheckoutPage};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Imperio" />
        <Meta name="description" content="Painel administrativo e checkout da loja Imperio" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Stylesheet id="leptos" href="/pkg/storefront_ui.css" />

        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=CheckoutPage />
                <Route path=path!("/checkout") view=CheckoutPage />
                <Route path=path!("/admin/pedidos") view=AdminOrdersPage />
                <Route path=path!("/admin/produtos") view=AdminProductsPage />
            </Routes>
        </Router>
    }
}

/// 404 page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-8">"Página não encontrada"</p>
                <a
                    href="/checkout"
                    class="px-6 py-3 bg-imperio-navy text-white rounded-lg hover:opacity-90 transition-colors"
                >
                    "Voltar à loja"
                </a>
            </div>
        </div>
    }
}
