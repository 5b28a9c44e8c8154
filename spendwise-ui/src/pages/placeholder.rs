//! Placeholder Page
//!
//! Title and a one-line note for sections that are not built out yet.

use leptos::*;

use spendwise::router::View as Page;

#[component]
pub fn Placeholder(page: Page) -> impl IntoView {
    view! {
        <div>
            <h1 class="text-2xl font-bold text-gray-900 dark:text-gray-100 mb-4">{page.title()}</h1>
            <div class="bg-white dark:bg-gray-800 p-6 rounded-lg shadow">
                <p class="text-gray-600 dark:text-gray-300">{page.placeholder_message()}</p>
            </div>
        </div>
    }
}
