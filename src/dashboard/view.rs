use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::{DateTime, NaiveDate};

use super::load::DashboardData;
use crate::api::{TimePeriod, Transaction};
use crate::session::User;

/// Rows in the recent transactions list
pub const RECENT_LIMIT: usize = 5;

/// Shown in place of the recent transactions list when it is empty
pub const EMPTY_TRANSACTIONS_MESSAGE: &str = "No recent transactions to display";

const UNCATEGORIZED: &str = "Uncategorized";

/// Sign of the net balance. Zero counts as positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    pub fn of(value: f64) -> Self {
        if value < 0.0 {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }
}

/// Colour family of a summary card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardTone {
    Neutral,
    Income,
    Expense,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryCard {
    pub title: &'static str,
    pub amount: f64,
    pub tone: CardTone,
}

impl SummaryCard {
    pub fn formatted(&self) -> String {
        format_currency(self.amount)
    }
}

/// Up/down marker next to the total balance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceIndicator {
    pub sign: Sign,
    pub label: &'static str,
}

impl BalanceIndicator {
    pub fn for_net(net: f64) -> Self {
        let sign = Sign::of(net);
        let label = match sign {
            Sign::Positive => "You're in the green",
            Sign::Negative => "You're spending more than you earn",
        };
        Self { sign, label }
    }
}

/// One bar of the spending-by-category chart
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySlice {
    pub category: String,
    pub amount: f64,
    /// Fraction of all listed spending, `0.0..=1.0`
    pub share: f64,
}

impl CategorySlice {
    pub fn percent(&self) -> u32 {
        (self.share * 100.0).round() as u32
    }
}

/// One line of the recent transactions list
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRow {
    pub date: String,
    pub description: String,
    pub category: String,
    pub amount: String,
    pub sign: Sign,
}

/// Everything the dashboard page displays
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub greeting: String,
    pub period: TimePeriod,
    pub cards: [SummaryCard; 3],
    pub balance: BalanceIndicator,
    pub categories: Vec<CategorySlice>,
    pub recent: Vec<TransactionRow>,
}

impl DashboardView {
    pub fn build(data: &DashboardData, user: &User) -> Self {
        let summary = &data.summary;

        let cards = [
            SummaryCard {
                title: "Total Balance",
                amount: summary.net,
                tone: CardTone::Neutral,
            },
            SummaryCard {
                title: "Income",
                amount: summary.total_income,
                tone: CardTone::Income,
            },
            SummaryCard {
                title: "Expenses",
                amount: summary.total_expenses,
                tone: CardTone::Expense,
            },
        ];

        Self {
            greeting: format!("Welcome, {}", user.display_name()),
            period: data.period,
            cards,
            balance: BalanceIndicator::for_net(summary.net),
            categories: category_slices(data),
            recent: recent_rows(&data.transactions),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.recent.is_empty()
    }
}

/// Category totals from the summary, else spending grouped from transactions
fn category_slices(data: &DashboardData) -> Vec<CategorySlice> {
    let mut totals: Vec<(String, f64)> = if data.summary.categories.is_empty() {
        let mut grouped: HashMap<String, f64> = HashMap::new();
        for tx in data.transactions.iter().filter(|tx| tx.amount < 0.0) {
            let name = tx
                .category
                .clone()
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| UNCATEGORIZED.to_string());
            *grouped.entry(name).or_default() += tx.amount.abs();
        }
        grouped.into_iter().collect()
    } else {
        data.summary
            .categories
            .iter()
            .map(|c| (c.category.clone(), c.amount.abs()))
            .collect()
    };

    totals.retain(|(_, amount)| *amount > 0.0);
    totals.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal).then_with(|| a.0.cmp(&b.0)));

    let total: f64 = totals.iter().map(|(_, amount)| amount).sum();
    totals
        .into_iter()
        .map(|(category, amount)| CategorySlice {
            share: if total > 0.0 { amount / total } else { 0.0 },
            category,
            amount,
        })
        .collect()
}

/// Newest first, at most [`RECENT_LIMIT`]
fn recent_rows(transactions: &[Transaction]) -> Vec<TransactionRow> {
    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    sorted.sort_by(|a, b| match (parse_date(&a.date), parse_date(&b.date)) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => b.date.cmp(&a.date),
    });

    sorted
        .into_iter()
        .take(RECENT_LIMIT)
        .map(|tx| TransactionRow {
            date: format_date(&tx.date),
            description: tx.description.clone(),
            category: tx
                .category
                .clone()
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| UNCATEGORIZED.to_string()),
            amount: format_currency(tx.amount),
            sign: Sign::of(tx.amount),
        })
        .collect()
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            raw.get(..10)
                .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
        })
}

/// `2024-03-05` → `Mar 5, 2024`; unparseable input is returned unchanged
pub fn format_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

/// US-dollar amount with thousands separators: `$1,234.56`, `-$150.50`
pub fn format_currency(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let negative = amount < 0.0 && fixed.bytes().any(|b| matches!(b, b'1'..=b'9'));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}${}.{}", if negative { "-" } else { "" }, grouped, cents)
}
