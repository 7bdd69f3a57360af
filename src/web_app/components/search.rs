// web_app/components/search.rs - Search input widget
//
// The search box owns no filtering logic. It collects a query string and
// hands it upstream; the data supply layer decides what to do with it.

use leptos::prelude::*;

/// Search input widget
///
/// Emits the entered query via `on_search` when the form is submitted.
#[component]
pub fn Search(
    /// Placeholder text for the input
    placeholder: &'static str,
    /// Callback receiving the query string
    on_search: Callback<String>,
) -> impl IntoView {
    let local_query = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        on_search.run(local_query.get());
    };

    view! {
        <form on:submit=on_submit class="relative flex flex-1 flex-shrink-0">
            <label class="sr-only" for="search">"Search"</label>
            <input
                id="search"
                type="text"
                placeholder=placeholder
                class="peer block w-full rounded-md border border-gray-200 py-[9px] pl-10 text-sm \
                       outline-2 placeholder:text-gray-500"
                prop:value=move || local_query.get()
                on:input=move |ev| local_query.set(event_target_value(&ev))
            />
            <span class="absolute left-3 top-1/2 -translate-y-1/2 text-gray-500 peer-focus:text-gray-900">
                "🔍"
            </span>
        </form>
    }
}
