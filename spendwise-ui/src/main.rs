//! SpendWise Dashboard
//!
//! Personal finance dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Sign in and registration against the finance API
//! - Guarded routes: every page but `/login` needs a session
//! - Dashboard with summary cards, spending chart and recent transactions
//!
//! # Architecture
//!
//! Client-side rendered (CSR) Leptos application compiled to WebAssembly.
//! Session handling, the route guard, the auth flow and the dashboard view
//! model come from the `spendwise` library; this crate supplies the
//! browser storage, the gloo-net API client and the components.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
