//! Login Page
//!
//! Sign-in and registration share one form; `?register=true` selects
//! registration.

use leptos::*;
use leptos_router::use_navigate;
use std::rc::Rc;

use spendwise::auth::{AuthFlow, AuthMode, LoginForm, SubmitOutcome, SUBMITTING_LABEL};

use crate::api::HttpApi;
use crate::state::AuthState;

#[component]
pub fn LoginPage(mode: AuthMode) -> impl IntoView {
    let auth = expect_context::<AuthState>();
    let navigate = use_navigate();
    let api = HttpApi::new();
    let flow = Rc::new(AuthFlow::new());

    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let full_name = create_rw_signal(String::new());
    let submitting = create_rw_signal(false);
    let error = create_rw_signal(None::<String>);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let form = LoginForm::new(email.get_untracked(), password.get_untracked())
            .with_full_name(full_name.get_untracked());
        let flow = flow.clone();
        let auth = auth.clone();
        let api = api.clone();
        let navigate = navigate.clone();

        submitting.set(true);
        error.set(None);
        spawn_local(async move {
            let outcome = flow.submit(&api, auth.store(), mode, &form).await;
            if outcome == SubmitOutcome::Blocked {
                return;
            }
            submitting.set(false);

            match outcome {
                SubmitOutcome::Authenticated { redirect } => {
                    auth.refresh();
                    navigate(redirect, Default::default());
                }
                SubmitOutcome::Failed { message } => error.set(Some(message)),
                SubmitOutcome::Blocked => {}
            }
        });
    };

    let input_class = "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-indigo-500";

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 py-12 px-4">
            <div class="max-w-md w-full space-y-8">
                <div class="text-center">
                    <h1 class="text-3xl font-bold text-indigo-600">"SpendWise"</h1>
                    <h2 class="mt-6 text-2xl font-extrabold text-gray-900">{mode.heading()}</h2>
                </div>

                <form class="mt-8 space-y-4" on:submit=on_submit>
                    <Show when=move || mode.needs_full_name()>
                        <input
                            type="text"
                            required
                            placeholder="Full name"
                            class=input_class
                            prop:value=full_name
                            on:input=move |ev| full_name.set(event_target_value(&ev))
                        />
                    </Show>
                    <input
                        type="email"
                        required
                        placeholder="Email address"
                        class=input_class
                        prop:value=email
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        type="password"
                        required
                        placeholder="Password"
                        class=input_class
                        prop:value=password
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />

                    {move || error.get().map(|message| view! {
                        <p class="text-sm text-red-600">{message}</p>
                    })}

                    <button
                        type="submit"
                        class="w-full py-2 px-4 rounded-md text-white bg-indigo-600 hover:bg-indigo-700 disabled:opacity-50"
                        disabled=move || submitting.get()
                    >
                        {move || if submitting.get() { SUBMITTING_LABEL } else { mode.submit_label() }}
                    </button>
                </form>

                <p class="text-center text-sm text-gray-600">
                    {mode.switch_prompt()}
                    " "
                    <a href=mode.switch_path() class="font-medium text-indigo-600 hover:text-indigo-500">
                        {mode.switch_label()}
                    </a>
                </p>
            </div>
        </div>
    }
}
