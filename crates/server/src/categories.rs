//! Categories API endpoints

use api_types::category::{CategoryNew, CategoryScope as ApiScope, CategoryView};
use axum::{Json, extract::State, http::StatusCode};

use crate::{ServerError, server::ServerState};

pub(crate) fn map_scope(scope: engine::CategoryScope) -> ApiScope {
    match scope {
        engine::CategoryScope::Expense => ApiScope::Expense,
        engine::CategoryScope::Income => ApiScope::Income,
        engine::CategoryScope::Both => ApiScope::Both,
    }
}

fn engine_scope(scope: ApiScope) -> engine::CategoryScope {
    match scope {
        ApiScope::Expense => engine::CategoryScope::Expense,
        ApiScope::Income => engine::CategoryScope::Income,
        ApiScope::Both => engine::CategoryScope::Both,
    }
}

pub(crate) fn map_category(category: engine::Category) -> CategoryView {
    CategoryView {
        id: category.id,
        description: category.description,
        scope: map_scope(category.scope),
    }
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CategoryNew>,
) -> Result<(StatusCode, Json<CategoryView>), ServerError> {
    let category = state
        .engine
        .new_category(&payload.description, engine_scope(payload.scope))
        .await?;

    Ok((StatusCode::CREATED, Json(map_category(category))))
}

pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<CategoryView>>, ServerError> {
    let categories = state.engine.categories().await?;

    Ok(Json(categories.into_iter().map(map_category).collect()))
}
