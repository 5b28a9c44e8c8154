//! Navbar Component
//!
//! Top bar greeting the signed-in user, with a log out button.

use leptos::*;
use leptos_router::use_navigate;

use spendwise::router::LOGIN_PATH;
use spendwise::session::FALLBACK_DISPLAY_NAME;

use crate::state::AuthState;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<AuthState>();
    let navigate = use_navigate();

    let auth_for_name = auth.clone();
    let name = move || {
        auth_for_name
            .user()
            .map(|user| user.display_name().to_string())
            .unwrap_or_else(|| FALLBACK_DISPLAY_NAME.to_string())
    };

    view! {
        <header class="h-16 bg-white dark:bg-gray-800 shadow flex items-center justify-end px-6">
            <span class="text-gray-700 dark:text-gray-200">"Hello, " {name}</span>
            <button
                class="ml-4 px-3 py-1 rounded text-sm text-gray-700 dark:text-gray-200 hover:bg-gray-100 dark:hover:bg-gray-700"
                title="Log out"
                on:click=move |_| {
                    auth.logout();
                    navigate(LOGIN_PATH, Default::default());
                }
            >
                "Log out"
            </button>
        </header>
    }
}
