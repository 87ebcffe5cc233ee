//! The report aggregator.
//!
//! Both reports are re-derived from the full transaction set on every call;
//! there is no cached aggregate state. Rows are emitted for every entity of
//! the grouping kind, including those with no transactions, ordered by id.

use std::collections::HashMap;

use sea_orm::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    Engine, MoneyCents, ResultEngine, Transaction, TransactionKind, transactions,
};

/// Income/expense/balance sums for one report row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub income: MoneyCents,
    pub expense: MoneyCents,
    pub balance: MoneyCents,
}

/// One report row: the entity the transactions were grouped by, plus sums.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub id: i32,
    pub label: String,
    pub totals: Totals,
}

/// Sums across all rows of a report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrandTotal {
    pub total_income: MoneyCents,
    pub total_expense: MoneyCents,
    pub net_balance: MoneyCents,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub details: Vec<ReportRow>,
    pub grand_total: GrandTotal,
}

impl Engine {
    /// Per-category income/expense/balance totals plus a grand total.
    pub async fn category_report(&self) -> ResultEngine<Report> {
        let groups = self
            .categories()
            .await?
            .into_iter()
            .map(|category| (category.id, category.description))
            .collect();
        let sums = self.fold_transactions(|tx| tx.category_id).await?;
        Ok(build_report(groups, &sums))
    }

    /// Per-person income/expense/balance totals plus a grand total.
    pub async fn person_report(&self) -> ResultEngine<Report> {
        let groups = self
            .people()
            .await?
            .into_iter()
            .map(|person| (person.id, person.name))
            .collect();
        let sums = self.fold_transactions(|tx| tx.person_id).await?;
        Ok(build_report(groups, &sums))
    }

    /// Folds the full transaction set into per-group (income, expense) sums,
    /// keyed by `group_of`.
    async fn fold_transactions(
        &self,
        group_of: impl Fn(&Transaction) -> i32,
    ) -> ResultEngine<HashMap<i32, (MoneyCents, MoneyCents)>> {
        let models = transactions::Entity::find().all(&self.database).await?;

        let mut sums: HashMap<i32, (MoneyCents, MoneyCents)> = HashMap::new();
        for model in models {
            let tx = Transaction::try_from(model)?;
            let entry = sums.entry(group_of(&tx)).or_default();
            match tx.kind {
                TransactionKind::Income => entry.0 += tx.value,
                TransactionKind::Expense => entry.1 += tx.value,
            }
        }
        Ok(sums)
    }
}

fn build_report(
    groups: Vec<(i32, String)>,
    sums: &HashMap<i32, (MoneyCents, MoneyCents)>,
) -> Report {
    let details: Vec<ReportRow> = groups
        .into_iter()
        .map(|(id, label)| {
            let (income, expense) = sums.get(&id).copied().unwrap_or_default();
            ReportRow {
                id,
                label,
                totals: Totals {
                    income,
                    expense,
                    balance: income - expense,
                },
            }
        })
        .collect();

    let total_income: MoneyCents = details.iter().map(|row| row.totals.income).sum();
    let total_expense: MoneyCents = details.iter().map(|row| row.totals.expense).sum();

    Report {
        details,
        grand_total: GrandTotal {
            total_income,
            total_expense,
            net_balance: total_income - total_expense,
        },
    }
}
