//! Request and response types shared by the server and its clients.
//!
//! Monetary values travel as `*_cents` integers (`1050` = 10.50).

use serde::{Deserialize, Serialize};

pub mod person {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct PersonNew {
        pub name: String,
        pub age: i32,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct PersonView {
        pub id: i32,
        pub name: String,
        pub age: i32,
    }
}

pub mod category {
    use super::*;

    /// Which transaction kinds a category accepts.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum CategoryScope {
        Expense,
        Income,
        Both,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CategoryNew {
        pub description: String,
        pub scope: CategoryScope,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CategoryView {
        pub id: i32,
        pub description: String,
        pub scope: CategoryScope,
    }
}

pub mod transaction {
    use super::*;
    use crate::{category::CategoryView, person::PersonView};

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum TransactionKind {
        Expense,
        Income,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionNew {
        pub description: String,
        pub value_cents: i64,
        pub kind: TransactionKind,
        pub person_id: i32,
        pub category_id: i32,
    }

    /// A transaction as returned by creation (references by id only).
    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionCreated {
        pub id: i32,
        pub description: String,
        pub value_cents: i64,
        pub kind: TransactionKind,
        pub person_id: i32,
        pub category_id: i32,
    }

    /// A listed transaction, decorated with its resolved person and category.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionView {
        pub id: i32,
        pub description: String,
        pub value_cents: i64,
        pub kind: TransactionKind,
        pub person: PersonView,
        pub category: CategoryView,
    }
}

pub mod report {
    use super::*;

    /// One row of a report: the grouping entity plus its sums.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ReportRow {
        pub id: i32,
        pub label: String,
        pub income_cents: i64,
        pub expense_cents: i64,
        pub balance_cents: i64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct GrandTotal {
        pub total_income_cents: i64,
        pub total_expense_cents: i64,
        pub net_balance_cents: i64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ReportResponse {
        pub details: Vec<ReportRow>,
        pub grand_total: GrandTotal,
    }
}

/// Response body for delete operations.
#[derive(Debug, Serialize, Deserialize)]
pub struct Deleted {
    pub message: String,
}
