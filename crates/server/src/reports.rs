//! Report API endpoints

use api_types::report::{GrandTotal, ReportResponse, ReportRow};
use axum::{Json, extract::State};

use crate::{ServerError, server::ServerState};

fn map_report(report: engine::Report) -> ReportResponse {
    let details = report
        .details
        .into_iter()
        .map(|row| ReportRow {
            id: row.id,
            label: row.label,
            income_cents: row.totals.income.cents(),
            expense_cents: row.totals.expense.cents(),
            balance_cents: row.totals.balance.cents(),
        })
        .collect();

    ReportResponse {
        details,
        grand_total: GrandTotal {
            total_income_cents: report.grand_total.total_income.cents(),
            total_expense_cents: report.grand_total.total_expense.cents(),
            net_balance_cents: report.grand_total.net_balance.cents(),
        },
    }
}

/// Per-category totals across the full transaction set.
pub async fn by_category(
    State(state): State<ServerState>,
) -> Result<Json<ReportResponse>, ServerError> {
    let report = state.engine.category_report().await?;

    Ok(Json(map_report(report)))
}

/// Per-person totals across the full transaction set.
pub async fn by_person(
    State(state): State<ServerState>,
) -> Result<Json<ReportResponse>, ServerError> {
    let report = state.engine.person_report().await?;

    Ok(Json(map_report(report)))
}
