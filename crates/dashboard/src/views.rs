//! Presentation-ready data derived from a snapshot. Nothing here is stored;
//! views are rebuilt from the snapshot on every render.

use api_types::stats::{CategoryTotal, StatsSnapshot, TransactionKind, WeeklyPoint};
use chrono::{DateTime, Utc};

use crate::format::{format_compact_opt, format_full, format_full_currency, percent_of};

pub const EMPTY_HISTORY: &str = "Hozircha ma'lumot yo'q";

/// Slice colours for the expense distribution, cycled by index.
pub const CATEGORY_PALETTE: [&str; 9] = [
    "#ef4444", "#f59e0b", "#10b981", "#3b82f6", "#8b5cf6", "#ec4899", "#06b6d4", "#84cc16",
    "#cf1124",
];

#[derive(Debug, Clone, PartialEq)]
pub struct OverviewView {
    pub balance: String,
    pub monthly_income: String,
    pub monthly_expense: String,
    /// Oldest period first.
    pub weekly: Vec<WeeklyPoint>,
    pub income_categories: Vec<CategoryBar>,
    pub expense_categories: Vec<CategoryBar>,
    pub expense_shares: Vec<CategoryShare>,
}

/// A category row with a bar relative to the largest category of its list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryBar {
    pub category: String,
    pub value: i64,
    pub amount: String,
    pub percent: u16,
}

/// A category's share of the whole list, for the distribution chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryShare {
    pub category: String,
    pub value: i64,
    pub share: u16,
    pub color: &'static str,
}

impl OverviewView {
    pub fn from_snapshot(snapshot: &StatsSnapshot) -> Self {
        Self {
            balance: format_full(snapshot.balance),
            monthly_income: format!("+{}", format_compact_opt(snapshot.monthly_stats.income)),
            monthly_expense: format!("-{}", format_compact_opt(snapshot.monthly_stats.expense)),
            weekly: snapshot.weekly_data.clone(),
            income_categories: category_bars(&snapshot.incomes_by_category, '+'),
            expense_categories: category_bars(&snapshot.expenses_by_category, '-'),
            expense_shares: category_shares(&snapshot.expenses_by_category),
        }
    }

    /// Largest income or expense value of the weekly series.
    pub fn weekly_max(&self) -> i64 {
        self.weekly
            .iter()
            .map(|point| point.income.max(point.expense))
            .max()
            .unwrap_or(0)
    }
}

/// Bars relative to the first entry, which the server sorts as the largest.
/// An empty list yields no bars.
pub fn category_bars(items: &[CategoryTotal], sign: char) -> Vec<CategoryBar> {
    let Some(max) = items.first().map(|item| item.value) else {
        return Vec::new();
    };

    items
        .iter()
        .map(|item| CategoryBar {
            category: item.category.clone(),
            value: item.value,
            amount: format!("{sign}{}", format_full_currency(Some(item.value))),
            percent: percent_of(item.value, max),
        })
        .collect()
}

pub fn category_shares(items: &[CategoryTotal]) -> Vec<CategoryShare> {
    let total: i64 = items.iter().map(|item| item.value.max(0)).sum();
    items
        .iter()
        .enumerate()
        .map(|(idx, item)| CategoryShare {
            category: item.category.clone(),
            value: item.value,
            share: percent_of(item.value, total),
            color: CATEGORY_PALETTE[idx % CATEGORY_PALETTE.len()],
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub enum HistoryView {
    /// No transactions: render the placeholder, never an empty list.
    Empty,
    Rows(Vec<HistoryRow>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow {
    pub description: String,
    pub kind: TransactionKind,
    pub category: String,
    pub date: DateTime<Utc>,
    pub amount: String,
}

impl HistoryView {
    /// Keeps the server order (newest first).
    pub fn from_snapshot(snapshot: &StatsSnapshot) -> Self {
        if snapshot.recent_transactions.is_empty() {
            return Self::Empty;
        }

        let rows = snapshot
            .recent_transactions
            .iter()
            .map(|tx| {
                let (sign, fallback) = match tx.kind {
                    TransactionKind::Income => ('+', "Daromad"),
                    TransactionKind::Expense => ('-', "Boshqa"),
                };
                HistoryRow {
                    description: tx.description.clone(),
                    kind: tx.kind,
                    category: tx
                        .category
                        .clone()
                        .filter(|category| !category.is_empty())
                        .unwrap_or_else(|| fallback.to_string()),
                    date: tx.date,
                    amount: format!("{sign}{}", format_full(Some(tx.amount))),
                }
            })
            .collect();

        Self::Rows(rows)
    }
}
