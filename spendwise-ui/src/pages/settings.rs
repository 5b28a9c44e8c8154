//! Settings Page
//!
//! Profile from the API and display preferences.

use leptos::*;

use spendwise::api::FinanceApi;
use spendwise::router::View as Page;
use spendwise::User;

use crate::api::HttpApi;
use crate::components::Loading;
use crate::state::{AuthState, ThemeState};

/// Settings page component
#[component]
pub fn Settings() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-2xl font-bold text-gray-900 dark:text-gray-100">{Page::Settings.title()}</h1>
                <p class="text-gray-500 mt-1">{Page::Settings.placeholder_message()}</p>
            </div>

            <ProfileSection />
            <DisplaySettings />
        </div>
    }
}

/// Profile of the token's owner, falling back to the stored profile
#[component]
fn ProfileSection() -> impl IntoView {
    let auth = expect_context::<AuthState>();
    let profile = create_rw_signal(None::<User>);

    create_effect(move |_| {
        let Some(token) = auth.token() else {
            return;
        };
        let stored = auth.user().unwrap_or_default();
        spawn_local(async move {
            let user = match HttpApi::new().current_user(&token).await {
                Ok(user) => user,
                Err(e) => {
                    web_sys::console::error_1(&format!("Error fetching profile: {}", e).into());
                    stored
                }
            };
            profile.set(Some(user));
        });
    });

    view! {
        <section class="bg-white dark:bg-gray-800 rounded-lg shadow p-6">
            <h2 class="text-xl font-semibold text-gray-900 dark:text-gray-100 mb-4">"Profile"</h2>
            {move || match profile.get() {
                None => view! { <Loading /> }.into_view(),
                Some(user) => view! {
                    <dl class="grid grid-cols-3 gap-4 text-sm">
                        <dt class="text-gray-500">"Name"</dt>
                        <dd class="col-span-2 text-gray-900 dark:text-gray-100">{user.display_name().to_string()}</dd>
                        <dt class="text-gray-500">"Email"</dt>
                        <dd class="col-span-2 text-gray-900 dark:text-gray-100">{user.email.clone()}</dd>
                    </dl>
                }.into_view(),
            }}
        </section>
    }
}

/// Dark/light theme toggle backed by the app-wide theme
#[component]
fn DisplaySettings() -> impl IntoView {
    let theme = expect_context::<ThemeState>();

    view! {
        <section class="bg-white dark:bg-gray-800 rounded-lg shadow p-6">
            <h2 class="text-xl font-semibold text-gray-900 dark:text-gray-100 mb-4">"Display"</h2>
            <label class="flex items-center justify-between">
                <span class="text-gray-700 dark:text-gray-300">"Dark mode"</span>
                <input
                    type="checkbox"
                    class="h-5 w-5"
                    prop:checked=move || theme.is_dark()
                    on:change=move |ev| theme.set_dark(event_target_checked(&ev))
                />
            </label>
        </section>
    }
}
