//! Transactions API endpoints

use api_types::{
    Deleted,
    transaction::{TransactionCreated, TransactionKind as ApiKind, TransactionNew, TransactionView},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use engine::{MoneyCents, TransactionDraft};

use crate::{ServerError, categories::map_category, people::map_person, server::ServerState};

pub(crate) fn map_kind(kind: engine::TransactionKind) -> ApiKind {
    match kind {
        engine::TransactionKind::Expense => ApiKind::Expense,
        engine::TransactionKind::Income => ApiKind::Income,
    }
}

fn engine_kind(kind: ApiKind) -> engine::TransactionKind {
    match kind {
        ApiKind::Expense => engine::TransactionKind::Expense,
        ApiKind::Income => engine::TransactionKind::Income,
    }
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<TransactionNew>,
) -> Result<(StatusCode, Json<TransactionCreated>), ServerError> {
    let tx = state
        .engine
        .new_transaction(TransactionDraft {
            description: payload.description,
            value: MoneyCents::new(payload.value_cents),
            kind: engine_kind(payload.kind),
            person_id: payload.person_id,
            category_id: payload.category_id,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(TransactionCreated {
            id: tx.id,
            description: tx.description,
            value_cents: tx.value.cents(),
            kind: map_kind(tx.kind),
            person_id: tx.person_id,
            category_id: tx.category_id,
        }),
    ))
}

pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<TransactionView>>, ServerError> {
    let records = state.engine.transactions().await?;

    let transactions = records
        .into_iter()
        .map(|record| TransactionView {
            id: record.transaction.id,
            description: record.transaction.description,
            value_cents: record.transaction.value.cents(),
            kind: map_kind(record.transaction.kind),
            person: map_person(record.person),
            category: map_category(record.category),
        })
        .collect();

    Ok(Json(transactions))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<Deleted>, ServerError> {
    state.engine.delete_transaction(id).await?;

    Ok(Json(Deleted {
        message: "transaction deleted".to_string(),
    }))
}
