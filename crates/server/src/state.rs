use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::meetup::repo::seaorm::SeaOrmMeetupRepository;
use service::meetup::repository::MeetupRepository;
use service::meetup::{MeetupService, MeetupServiceImpl};
use service::registration::repo::seaorm::SeaOrmRegistrationRepository;
use service::registration::repository::RegistrationRepository;
use service::registration::{RegistrationService, RegistrationServiceImpl};

/// Shared handler state. Services sit behind trait objects so tests can swap them.
#[derive(Clone)]
pub struct AppState {
    pub meetups: Arc<dyn MeetupService>,
    pub registrations: Arc<dyn RegistrationService>,
}

impl AppState {
    pub fn new(meetups: Arc<dyn MeetupService>, registrations: Arc<dyn RegistrationService>) -> Self {
        Self { meetups, registrations }
    }

    /// Wire services onto repositories.
    pub fn from_repositories(
        meetups: Arc<dyn MeetupRepository>,
        registrations: Arc<dyn RegistrationRepository>,
    ) -> Self {
        Self::new(
            Arc::new(MeetupServiceImpl::new(meetups)),
            Arc::new(RegistrationServiceImpl::new(registrations)),
        )
    }

    /// Wire services onto the SeaORM repositories.
    pub fn from_db(db: DatabaseConnection) -> Self {
        Self::from_repositories(
            Arc::new(SeaOrmMeetupRepository { db: db.clone() }),
            Arc::new(SeaOrmRegistrationRepository { db }),
        )
    }
}
