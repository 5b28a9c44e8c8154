//! Dashboard
//!
//! Fetches transactions and the summary for a period together and turns them
//! into the view model both front ends render.
//!
//! ## Architecture
//!
//! - **DashboardData**: raw responses of the joint fetch
//! - **DashboardView**: greeting, summary cards, balance indicator, category
//!   chart slices and recent transaction rows
//! - **format_currency**: `$1,234.56` / `-$150.50`

mod load;
mod view;

pub use load::DashboardData;
pub use view::{
    format_currency, format_date, BalanceIndicator, CardTone, CategorySlice, DashboardView, Sign,
    SummaryCard, TransactionRow, EMPTY_TRANSACTIONS_MESSAGE, RECENT_LIMIT,
};
