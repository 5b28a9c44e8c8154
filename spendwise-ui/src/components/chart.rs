//! Chart Component
//!
//! Spending by category as horizontal bars.

use leptos::*;

use spendwise::dashboard::{format_currency, CategorySlice};

/// Bar colors, cycled per category
const SERIES_COLORS: [&str; 6] = [
    "#6366F1", // Indigo
    "#10B981", // Green
    "#F59E0B", // Amber
    "#EF4444", // Red
    "#3B82F6", // Blue
    "#8B5CF6", // Purple
];

#[component]
pub fn CategoryChart(slices: Vec<CategorySlice>) -> impl IntoView {
    if slices.is_empty() {
        return view! {
            <p class="text-center text-gray-500 py-8">"No spending to chart"</p>
        }
        .into_view();
    }

    slices
        .into_iter()
        .enumerate()
        .map(|(i, slice)| {
            let color = SERIES_COLORS[i % SERIES_COLORS.len()];
            let width = format!("width: {}%; background-color: {}", slice.percent(), color);
            view! {
                <div class="mb-3">
                    <div class="flex justify-between text-sm text-gray-700 dark:text-gray-300 mb-1">
                        <span>{slice.category.clone()}</span>
                        <span>{format!("{} ({}%)", format_currency(slice.amount), slice.percent())}</span>
                    </div>
                    <div class="w-full bg-gray-200 dark:bg-gray-700 rounded h-3">
                        <div class="h-3 rounded" style=width />
                    </div>
                </div>
            }
        })
        .collect_view()
}
