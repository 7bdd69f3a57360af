// web_app/pages/inventory.rs - Inventory page component
//
// Hosts the product table and owns everything the table deliberately does
// not: the search query state, the data resource, and the edit/delete
// click behavior.

use leptos::prelude::*;
use crate::web_app::components::*;
use crate::web_app::server_fns::fetch_products;

/// Server-function argument for a search query.
///
/// An empty box means "no filter", sent as `None` so the catalog returns
/// everything.
fn query_arg(query: String) -> Option<String> {
    if query.is_empty() {
        None
    } else {
        Some(query)
    }
}

/// Main inventory page component
///
/// Loads products through the server function and hands them to the
/// table as a plain list. Re-fetches whenever the search query changes.
#[component]
pub fn InventoryPage() -> impl IntoView {
    let query = RwSignal::new(String::new());

    let products = Resource::new(
        move || query.get(),
        |q| async move { fetch_products(query_arg(q)).await },
    );

    let on_search = Callback::new(move |q: String| {
        query.set(q);
    });

    // Placeholder handlers; real edit/delete flows live outside this page.
    let on_edit = Callback::new(move |id: i32| {
        leptos::logging::log!("edit requested for product {id}");
    });
    let on_delete = Callback::new(move |id: i32| {
        leptos::logging::log!("delete requested for product {id}");
    });

    view! {
        <div class="min-h-screen bg-gray-50 font-sans text-gray-900">
            <header class="bg-white shadow-sm sticky top-0 z-40 border-b border-gray-200">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between">
                    <div class="flex items-center gap-2">
                        <span class="text-2xl">"📦"</span>
                        <h1 class="text-xl font-bold bg-clip-text text-transparent bg-gradient-to-r from-blue-600 to-indigo-600">
                            "Inventory Dashboard"
                        </h1>
                    </div>
                </div>
            </header>

            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <Suspense fallback=move || view! {
                    <div class="bg-white rounded-2xl p-12 shadow-sm border border-gray-100 text-center">
                        <Loading message="Loading inventory..." />
                    </div>
                }>
                    {move || {
                        match products.get() {
                            None => view! {
                                <div class="bg-white rounded-2xl p-12 shadow-sm border border-gray-100">
                                    <Loading message="Initializing..." />
                                </div>
                            }.into_any(),
                            Some(Err(e)) => view! {
                                <ErrorDisplay error=e.to_string() />
                            }.into_any(),
                            Some(Ok(items)) => view! {
                                <ProductsTable
                                    products=items
                                    on_edit=on_edit
                                    on_delete=on_delete
                                    on_search=on_search
                                />
                            }.into_any(),
                        }
                    }}
                </Suspense>
            </main>

            <footer class="bg-white border-t border-gray-200 mt-12 py-8">
                <div class="max-w-7xl mx-auto px-4 text-center text-gray-500 text-sm">
                    <p>"Built with Leptos and Actix."</p>
                </div>
            </footer>
        </div>
    }
}
