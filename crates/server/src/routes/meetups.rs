use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use common::pagination::{Page, PageRequest, DEFAULT_PAGE_SIZE};
use service::errors::ServiceError;
use service::meetup::{Meetup, MeetupFilter};

use crate::{errors::JsonApiError, metrics, state::AppState};

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Registration attribute of the registrant
    pub registration: Option<String>,
    pub event: Option<String>,
    /// 0-based page index
    pub page: Option<u64>,
    pub size: Option<u64>,
}

impl ListQuery {
    fn page_request(&self) -> PageRequest {
        PageRequest::of(self.page.unwrap_or(0), self.size.unwrap_or(DEFAULT_PAGE_SIZE)).normalize()
    }
}

#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMeetupInput {
    pub registration_attribute: String,
    pub event: String,
    #[serde(default)]
    pub meetup_date: Option<String>,
}

/// Fields applied onto an existing meetup; absent fields are left untouched.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMeetupInput {
    pub event: Option<String>,
    pub meetup_date: Option<String>,
    pub registered: Option<bool>,
}

impl UpdateMeetupInput {
    fn apply(self, meetup: &mut Meetup) {
        if let Some(event) = self.event {
            meetup.event = event;
        }
        if let Some(date) = self.meetup_date {
            meetup.meetup_date = Some(date);
        }
        if let Some(registered) = self.registered {
            meetup.registered = registered;
        }
    }
}

#[utoipa::path(
    get, path = "/api/meetups", tag = "meetups",
    params(ListQuery),
    responses(
        (status = 200, description = "Page of meetups", body = crate::openapi::MeetupPageDoc),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(State(state): State<AppState>, Query(q): Query<ListQuery>) -> Result<Json<Page<Meetup>>, JsonApiError> {
    let page = q.page_request();
    let filter = MeetupFilter { registration: q.registration, event: q.event };
    let result = state.meetups.find(&filter, page).await?;
    info!(count = result.content.len(), total = result.total_elements, "list meetups");
    Ok(Json(result))
}

#[utoipa::path(
    post, path = "/api/meetups", tag = "meetups",
    request_body = CreateMeetupInput,
    responses(
        (status = 201, description = "Created, body is the new meetup id", body = i32),
        (status = 400, description = "Unknown registration or meetup already registered")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMeetupInput>,
) -> Result<(StatusCode, Json<i32>), JsonApiError> {
    models::meetup::validate_event(&input.event).map_err(ServiceError::from)?;

    let Some(registration) = state
        .registrations
        .get_registration_by_attribute(&input.registration_attribute)
        .await?
    else {
        metrics::MEETUP_CREATE_REJECTED_TOTAL.with_label_values(&["registration_not_found"]).inc();
        warn!(attribute = %input.registration_attribute, "meetup_create_unknown_registration");
        return Err(JsonApiError::bad_request("Registration not found"));
    };

    let meetup = Meetup {
        id: None,
        event: input.event,
        meetup_date: input.meetup_date,
        registered: false,
        registration: Some(registration),
    };
    match state.meetups.save(meetup).await {
        Ok(saved) => {
            let id = saved.id.ok_or_else(|| ServiceError::Db("saved meetup has no id".into()))?;
            metrics::MEETUPS_CREATED_TOTAL.inc();
            info!(id, event = %saved.event, "created meetup");
            Ok((StatusCode::CREATED, Json(id)))
        }
        Err(e @ ServiceError::Business(_)) => {
            metrics::MEETUP_CREATE_REJECTED_TOTAL.with_label_values(&["business_rule"]).inc();
            info!(err = %e, "meetup create rejected");
            Err(e.into())
        }
        Err(e) => Err(e.into()),
    }
}

#[utoipa::path(
    get, path = "/api/meetups/{id}", tag = "meetups",
    params(("id" = i32, Path, description = "Meetup id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::MeetupDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<Meetup>, JsonApiError> {
    match state.meetups.get_by_id(id).await? {
        Some(m) => Ok(Json(m)),
        None => Err(ServiceError::not_found(&format!("meetup {id}")).into()),
    }
}

#[utoipa::path(
    put, path = "/api/meetups/{id}", tag = "meetups",
    params(("id" = i32, Path, description = "Meetup id")),
    request_body = UpdateMeetupInput,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::MeetupDoc),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<UpdateMeetupInput>,
) -> Result<Json<Meetup>, JsonApiError> {
    let Some(mut meetup) = state.meetups.get_by_id(id).await? else {
        return Err(ServiceError::not_found(&format!("meetup {id}")).into());
    };
    input.apply(&mut meetup);
    models::meetup::validate_event(&meetup.event).map_err(ServiceError::from)?;
    let updated = state.meetups.update(Some(meetup)).await?;
    info!(id, "updated meetup");
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/api/meetups/{id}", tag = "meetups",
    params(("id" = i32, Path, description = "Meetup id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    let Some(meetup) = state.meetups.get_by_id(id).await? else {
        return Err(ServiceError::not_found(&format!("meetup {id}")).into());
    };
    state.meetups.delete(Some(meetup)).await?;
    metrics::MEETUPS_DELETED_TOTAL.inc();
    info!(id, "deleted meetup");
    Ok(StatusCode::NO_CONTENT)
}
