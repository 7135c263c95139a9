use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

use crate::routes::{meetups::{CreateMeetupInput, UpdateMeetupInput}, registrations::CreateRegistrationInput};

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationDoc {
    pub id: i32,
    pub name: String,
    pub registration: String,
    pub date_of_registration: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MeetupDoc {
    pub id: i32,
    pub event: String,
    pub meetup_date: Option<String>,
    pub registered: bool,
    pub registration: Option<RegistrationDoc>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageableDoc {
    pub page_number: u64,
    pub page_size: u64,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MeetupPageDoc {
    pub content: Vec<MeetupDoc>,
    pub total_elements: u64,
    pub total_pages: u64,
    pub pageable: PageableDoc,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::meetups::list,
        crate::routes::meetups::create,
        crate::routes::meetups::get,
        crate::routes::meetups::update,
        crate::routes::meetups::delete,
        crate::routes::registrations::create,
        crate::routes::registrations::get,
        crate::routes::registrations::meetups,
    ),
    components(
        schemas(
            HealthResponse,
            RegistrationDoc,
            MeetupDoc,
            PageableDoc,
            MeetupPageDoc,
            CreateMeetupInput,
            UpdateMeetupInput,
            CreateRegistrationInput,
        )
    ),
    tags(
        (name = "health"),
        (name = "meetups"),
        (name = "registrations")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::ApiDoc;
    use utoipa::OpenApi;

    #[test]
    fn documents_meetup_paths() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;
        assert!(paths.contains_key("/api/meetups"));
        assert!(paths.contains_key("/api/meetups/{id}"));
        assert!(paths.contains_key("/api/registrations/{id}/meetups"));
    }
}
