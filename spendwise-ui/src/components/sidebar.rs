//! Sidebar Component
//!
//! Collapsible navigation with the five app sections and log out.

use leptos::*;
use leptos_router::{use_location, use_navigate};

use spendwise::router::{Location as AppLocation, LOGIN_PATH, NAV_ITEMS};

use crate::state::AuthState;

/// Navigation sidebar
#[component]
pub fn Sidebar(collapsed: ReadSignal<bool>, set_collapsed: WriteSignal<bool>) -> impl IntoView {
    let auth = expect_context::<AuthState>();
    let location = use_location();
    let navigate = use_navigate();

    let current = create_memo(move |_| AppLocation::parse(&location.pathname.get()));

    let logout = move |_| {
        auth.logout();
        navigate(LOGIN_PATH, Default::default());
    };

    view! {
        <aside class=move || {
            if collapsed.get() {
                "w-20 bg-gray-800 text-white flex flex-col transition-all"
            } else {
                "w-64 bg-gray-800 text-white flex flex-col transition-all"
            }
        }>
            <div class="flex items-center justify-between h-16 px-4 border-b border-gray-700">
                <Show when=move || !collapsed.get()>
                    <span class="text-xl font-bold">"SpendWise"</span>
                </Show>
                <button
                    class="p-2 rounded hover:bg-gray-700"
                    on:click=move |_| set_collapsed.update(|c| *c = !*c)
                >
                    {move || if collapsed.get() { "»" } else { "«" }}
                </button>
            </div>

            <nav class="flex-1 py-4 space-y-1">
                {NAV_ITEMS
                    .iter()
                    .map(|item| {
                        let class = move || {
                            if current.with(|loc| item.is_active(loc)) {
                                "flex items-center px-4 py-2 bg-gray-700 text-white"
                            } else {
                                "flex items-center px-4 py-2 text-gray-300 hover:bg-gray-700 hover:text-white"
                            }
                        };
                        view! {
                            <a href=item.path class=class>
                                {move || if collapsed.get() {
                                    item.label.chars().take(1).collect::<String>()
                                } else {
                                    item.label.to_string()
                                }}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>

            <button
                class="m-4 px-4 py-2 rounded bg-red-600 hover:bg-red-700 text-white"
                on:click=logout
            >
                {move || if collapsed.get() { "⎋" } else { "Log out" }}
            </button>
        </aside>
    }
}
