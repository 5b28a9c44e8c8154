//! Summary Card Component
//!
//! One of the three dashboard totals.

use leptos::*;

use spendwise::dashboard::{CardTone, Sign, SummaryCard};

/// Summary card; `sign` adds the up/down marker to the balance card
#[component]
pub fn StatCard(card: SummaryCard, #[prop(optional)] sign: Option<Sign>) -> impl IntoView {
    let amount_class = match card.tone {
        CardTone::Neutral => "text-3xl font-bold text-indigo-600",
        CardTone::Income => "text-3xl font-bold text-green-600",
        CardTone::Expense => "text-3xl font-bold text-red-600",
    };

    let marker = sign.map(|sign| match sign {
        Sign::Positive => view! { <span class="ml-2 text-green-500">"▲"</span> },
        Sign::Negative => view! { <span class="ml-2 text-red-500">"▼"</span> },
    });

    view! {
        <div class="bg-white dark:bg-gray-800 p-6 rounded-lg shadow">
            <h2 class="text-lg font-semibold text-gray-900 dark:text-gray-100 mb-2">{card.title}</h2>
            <p class=amount_class>
                {card.formatted()}
                {marker}
            </p>
        </div>
    }
}
