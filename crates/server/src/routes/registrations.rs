use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use common::pagination::{Page, PageRequest, DEFAULT_PAGE_SIZE};
use service::errors::ServiceError;
use service::meetup::Meetup;
use service::registration::Registration;

use crate::{errors::JsonApiError, state::AppState};

#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRegistrationInput {
    pub name: String,
    /// External attribute used to look the registrant up
    pub registration: String,
    #[serde(default)]
    pub date_of_registration: Option<String>,
}

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    pub page: Option<u64>,
    pub size: Option<u64>,
}

#[utoipa::path(
    post, path = "/api/registrations", tag = "registrations",
    request_body = CreateRegistrationInput,
    responses(
        (status = 201, description = "Created, body is the new registration id", body = i32),
        (status = 400, description = "Validation Error or attribute already taken")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateRegistrationInput>,
) -> Result<(StatusCode, Json<i32>), JsonApiError> {
    let saved = state
        .registrations
        .save(Registration {
            id: None,
            name: input.name,
            registration: input.registration,
            date_of_registration: input.date_of_registration,
        })
        .await?;
    let id = saved.id.ok_or_else(|| ServiceError::Db("saved registration has no id".into()))?;
    info!(id, "created registration");
    Ok((StatusCode::CREATED, Json(id)))
}

#[utoipa::path(
    get, path = "/api/registrations/{id}", tag = "registrations",
    params(("id" = i32, Path, description = "Registration id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::RegistrationDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<Registration>, JsonApiError> {
    state
        .registrations
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| ServiceError::not_found(&format!("registration {id}")).into())
}

/// Meetups the registrant is linked to.
#[utoipa::path(
    get, path = "/api/registrations/{id}/meetups", tag = "registrations",
    params(("id" = i32, Path, description = "Registration id"), PageQuery),
    responses(
        (status = 200, description = "Page of meetups", body = crate::openapi::MeetupPageDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn meetups(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(q): Query<PageQuery>,
) -> Result<Json<Page<Meetup>>, JsonApiError> {
    let Some(registration) = state.registrations.get_by_id(id).await? else {
        return Err(ServiceError::not_found(&format!("registration {id}")).into());
    };
    let page = PageRequest::of(q.page.unwrap_or(0), q.size.unwrap_or(DEFAULT_PAGE_SIZE)).normalize();
    let result = state.meetups.get_registrations_by_meetup(&registration, page).await?;
    Ok(Json(result))
}
