//! App Root Component
//!
//! Every path goes through the guard from `spendwise::router`; the router
//! only supplies the current location.

use leptos::*;
use leptos_router::*;

use spendwise::router::{decide, Layout, Location as AppLocation, Outcome, View as Page, LOGIN_PATH};

use crate::components::{Navbar, Sidebar};
use crate::pages::{Dashboard, LoginPage, Placeholder, Settings};
use crate::state::{provide_auth_state, provide_theme_state, AuthState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_auth_state();
    provide_theme_state();

    view! {
        <Router>
            <Routes>
                <Route path="/*any" view=Guarded />
            </Routes>
        </Router>
    }
}

/// Runs the guard for the current location on every navigation
#[component]
fn Guarded() -> impl IntoView {
    let auth = expect_context::<AuthState>();
    let location = use_location();
    // Survives moves between protected pages
    let (collapsed, set_collapsed) = create_signal(false);

    let outcome = create_memo(move |_| {
        let requested = AppLocation::parse(&format!(
            "{}{}",
            location.pathname.get(),
            location.search.get()
        ));
        decide(&requested, auth.is_authenticated())
    });

    move || match outcome.get() {
        Outcome::Render { view: page, layout } => match layout {
            Layout::Bare => render(page),
            Layout::Authenticated => view! {
                <AuthenticatedLayout page=page collapsed=collapsed set_collapsed=set_collapsed />
            }
            .into_view(),
        },
        redirect => {
            let path = redirect.redirect_path().unwrap_or(LOGIN_PATH);
            view! { <Redirect path=path /> }.into_view()
        }
    }
}

/// Sidebar, navbar and the content region
#[component]
fn AuthenticatedLayout(
    page: Page,
    collapsed: ReadSignal<bool>,
    set_collapsed: WriteSignal<bool>,
) -> impl IntoView {
    view! {
        <div class="flex h-screen bg-gray-100 dark:bg-gray-900">
            <Sidebar collapsed=collapsed set_collapsed=set_collapsed />
            <div class="flex-1 flex flex-col overflow-hidden">
                <Navbar />
                <main class="flex-1 overflow-y-auto p-6">
                    {render(page)}
                </main>
            </div>
        </div>
    }
}

fn render(page: Page) -> View {
    match page {
        Page::Login(mode) => view! { <LoginPage mode=mode /> }.into_view(),
        Page::Dashboard => view! { <Dashboard /> }.into_view(),
        Page::Settings => view! { <Settings /> }.into_view(),
        other => view! { <Placeholder page=other /> }.into_view(),
    }
}
