//! Dashboard Page
//!
//! Summary cards, spending chart and recent transactions for the selected
//! period. Both fetches run together and the page renders once both settle.

use leptos::*;

use spendwise::api::TimePeriod;
use spendwise::dashboard::{DashboardData, DashboardView, Sign, EMPTY_TRANSACTIONS_MESSAGE};

use crate::api::HttpApi;
use crate::components::{CardSkeleton, CategoryChart, Loading, StatCard};
use crate::state::AuthState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let auth = expect_context::<AuthState>();
    let api = HttpApi::new();

    let period = create_rw_signal(TimePeriod::default());
    let data = create_rw_signal(None::<DashboardData>);

    // Re-fetch whenever the period or the session changes
    let auth_for_effect = auth.clone();
    create_effect(move |_| {
        let auth = auth_for_effect.clone();
        let requested = period.get();
        let Some(token) = auth.token() else {
            return;
        };
        let api = api.clone();

        data.set(None);
        spawn_local(async move {
            let loaded = match DashboardData::load(&api, &token, requested).await {
                Ok(loaded) => loaded,
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Error fetching dashboard data: {}", e).into(),
                    );
                    DashboardData::empty(requested)
                }
            };
            let same_session = auth.token_untracked().as_deref() == Some(token.as_str());
            let current = period
                .try_get_untracked()
                .is_some_and(|selected| loaded.is_current_for(selected));
            if same_session && current {
                data.set(Some(loaded));
            }
        });
    });

    let dashboard = create_memo(move |_| {
        let user = auth.user().unwrap_or_default();
        data.with(|data| data.as_ref().map(|d| DashboardView::build(d, &user)))
    });

    view! {
        <div class="space-y-8">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold text-gray-900 dark:text-gray-100">
                    {move || dashboard.with(|d| {
                        d.as_ref().map(|d| d.greeting.clone()).unwrap_or_else(|| "Dashboard".to_string())
                    })}
                </h1>
                <PeriodSelect period=period />
            </div>

            {move || match dashboard.get() {
                None => view! {
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                        <CardSkeleton />
                        <CardSkeleton />
                        <CardSkeleton />
                    </div>
                    <Loading />
                }.into_view(),
                Some(model) => view! { <DashboardBody model=model /> }.into_view(),
            }}
        </div>
    }
}

/// Time period dropdown
#[component]
fn PeriodSelect(period: RwSignal<TimePeriod>) -> impl IntoView {
    view! {
        <select
            class="px-3 py-2 border border-gray-300 rounded-md bg-white dark:bg-gray-800 dark:text-gray-100"
            on:change=move |ev| {
                if let Ok(selected) = event_target_value(&ev).parse::<TimePeriod>() {
                    period.set(selected);
                }
            }
        >
            {TimePeriod::ALL
                .into_iter()
                .map(|p| view! {
                    <option value=p.as_str() selected=move || period.get() == p>
                        {p.label()}
                    </option>
                })
                .collect_view()}
        </select>
    }
}

#[component]
fn DashboardBody(model: DashboardView) -> impl IntoView {
    let [balance, income, expenses] = model.cards;
    let sign = model.balance.sign;
    let balance_class = match sign {
        Sign::Positive => "text-sm text-green-600",
        Sign::Negative => "text-sm text-red-600",
    };

    view! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
            <div>
                <StatCard card=balance sign=sign />
                <p class=balance_class>{model.balance.label}</p>
            </div>
            <StatCard card=income />
            <StatCard card=expenses />
        </div>

        <section class="bg-white dark:bg-gray-800 p-6 rounded-lg shadow">
            <h2 class="text-xl font-bold text-gray-900 dark:text-gray-100 mb-4">"Spending by Category"</h2>
            <CategoryChart slices=model.categories />
        </section>

        <section>
            <h2 class="text-xl font-bold text-gray-900 dark:text-gray-100 mb-4">"Recent Transactions"</h2>
            <div class="bg-white dark:bg-gray-800 rounded-lg shadow overflow-hidden">
                {if model.recent.is_empty() {
                    view! {
                        <div class="p-4 text-center text-gray-500">{EMPTY_TRANSACTIONS_MESSAGE}</div>
                    }.into_view()
                } else {
                    view! {
                        <table class="min-w-full divide-y divide-gray-200">
                            <tbody>
                                {model.recent.into_iter().map(|row| {
                                    let amount_class = match row.sign {
                                        Sign::Positive => "px-4 py-3 text-right text-green-600",
                                        Sign::Negative => "px-4 py-3 text-right text-red-600",
                                    };
                                    view! {
                                        <tr>
                                            <td class="px-4 py-3 text-sm text-gray-500">{row.date}</td>
                                            <td class="px-4 py-3">{row.description}</td>
                                            <td class="px-4 py-3 text-sm text-gray-500">{row.category}</td>
                                            <td class=amount_class>{row.amount}</td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    }.into_view()
                }}
            </div>
        </section>
    }
}
