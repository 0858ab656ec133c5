//! Wire types of the finance statistics backend.
//!
//! Field names follow the backend's camelCase JSON. Decoding is lenient where
//! the backend is known to omit data: missing lists decode as empty and
//! missing amounts as `None`.

pub mod stats {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Serialize};

    /// One fetched copy of the aggregated finance data of a user.
    ///
    /// `weekly_data` arrives newest-first on the wire; the client reorders it
    /// once when the snapshot is received.
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct StatsSnapshot {
        pub balance: Option<i64>,
        #[serde(default)]
        pub monthly_stats: MonthlyStats,
        #[serde(default)]
        pub weekly_data: Vec<WeeklyPoint>,
        #[serde(default)]
        pub recent_transactions: Vec<Transaction>,
        /// Sorted by the server, largest value first.
        #[serde(default)]
        pub expenses_by_category: Vec<CategoryTotal>,
        /// Sorted by the server, largest value first.
        #[serde(default)]
        pub incomes_by_category: Vec<CategoryTotal>,
    }

    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct MonthlyStats {
        pub income: Option<i64>,
        pub expense: Option<i64>,
    }

    /// A single period of the weekly chart.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct WeeklyPoint {
        pub name: String,
        #[serde(default)]
        pub income: i64,
        #[serde(default)]
        pub expense: i64,
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct CategoryTotal {
        pub category: String,
        pub value: i64,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum TransactionKind {
        Income,
        Expense,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct Transaction {
        pub description: String,
        pub amount: i64,
        #[serde(rename = "type")]
        pub kind: TransactionKind,
        pub category: Option<String>,
        pub date: DateTime<Utc>,
    }
}

#[cfg(test)]
mod tests {
    use super::stats::*;

    #[test]
    fn decodes_backend_payload() {
        let raw = r#"{
            "balance": 1500000,
            "monthlyStats": { "income": 2000000, "expense": 500000 },
            "weeklyData": [
                { "name": "Sun", "income": 10, "expense": 5 },
                { "name": "Mon", "income": 0, "expense": 7 }
            ],
            "recentTransactions": [
                {
                    "description": "Tushlik",
                    "amount": 45000,
                    "type": "expense",
                    "category": "Oziq-ovqat",
                    "date": "2024-03-05T09:41:00.000Z"
                },
                {
                    "description": "Oylik",
                    "amount": 2000000,
                    "type": "income",
                    "category": null,
                    "date": "2024-03-01T06:00:00Z"
                }
            ],
            "expensesByCategory": [{ "category": "Food", "value": 300000 }],
            "incomesByCategory": []
        }"#;

        let snapshot: StatsSnapshot = serde_json::from_str(raw).unwrap();
        assert_eq!(snapshot.balance, Some(1_500_000));
        assert_eq!(snapshot.monthly_stats.expense, Some(500_000));
        assert_eq!(snapshot.weekly_data[0].name, "Sun");
        assert_eq!(snapshot.recent_transactions[0].kind, TransactionKind::Expense);
        assert_eq!(snapshot.recent_transactions[1].category, None);
        assert_eq!(snapshot.expenses_by_category[0].value, 300_000);
        assert!(snapshot.incomes_by_category.is_empty());
    }

    #[test]
    fn missing_sections_decode_as_empty() {
        let snapshot: StatsSnapshot = serde_json::from_str(r#"{ "balance": null }"#).unwrap();
        assert_eq!(snapshot.balance, None);
        assert_eq!(snapshot.monthly_stats, MonthlyStats::default());
        assert!(snapshot.weekly_data.is_empty());
        assert!(snapshot.recent_transactions.is_empty());
    }

    #[test]
    fn rejects_unknown_transaction_type() {
        let raw = r#"{
            "recentTransactions": [{
                "description": "x",
                "amount": 1,
                "type": "transfer",
                "date": "2024-03-01T06:00:00Z"
            }]
        }"#;
        assert!(serde_json::from_str::<StatsSnapshot>(raw).is_err());
    }
}
