//! People API endpoints

use api_types::{
    Deleted,
    person::{PersonNew, PersonView},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{ServerError, server::ServerState};

pub(crate) fn map_person(person: engine::Person) -> PersonView {
    PersonView {
        id: person.id,
        name: person.name,
        age: person.age,
    }
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<PersonNew>,
) -> Result<(StatusCode, Json<PersonView>), ServerError> {
    let person = state.engine.new_person(&payload.name, payload.age).await?;

    Ok((StatusCode::CREATED, Json(map_person(person))))
}

pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<PersonView>>, ServerError> {
    let people = state.engine.people().await?;

    Ok(Json(people.into_iter().map(map_person).collect()))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<Deleted>, ServerError> {
    state.engine.delete_person(id).await?;

    Ok(Json(Deleted {
        message: "person and owned transactions deleted".to_string(),
    }))
}
