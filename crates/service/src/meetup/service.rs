use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, instrument, warn};

use super::domain::{Meetup, MeetupFilter};
use super::repository::MeetupRepository;
use crate::errors::ServiceError;
use crate::registration::Registration;
use common::pagination::{Page, PageRequest};

/// Meetup operations consumed by the HTTP layer.
#[async_trait]
pub trait MeetupService: Send + Sync {
    async fn save(&self, meetup: Meetup) -> Result<Meetup, ServiceError>;
    async fn get_by_id(&self, id: i32) -> Result<Option<Meetup>, ServiceError>;
    async fn update(&self, meetup: Option<Meetup>) -> Result<Meetup, ServiceError>;
    async fn delete(&self, meetup: Option<Meetup>) -> Result<(), ServiceError>;
    async fn find(&self, filter: &MeetupFilter, page: PageRequest) -> Result<Page<Meetup>, ServiceError>;
    async fn get_registrations_by_meetup(&self, registration: &Registration, page: PageRequest) -> Result<Page<Meetup>, ServiceError>;
}

/// Repository-backed implementation independent of the web framework.
pub struct MeetupServiceImpl<R: MeetupRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: MeetupRepository + ?Sized> MeetupServiceImpl<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }
}

fn require_id(meetup: Option<Meetup>) -> Result<Meetup, ServiceError> {
    match meetup {
        Some(m) if m.id.is_some() => Ok(m),
        _ => Err(ServiceError::Validation("Meetup cannot be null".into())),
    }
}

#[async_trait]
impl<R: MeetupRepository + ?Sized> MeetupService for MeetupServiceImpl<R> {
    /// Persist a new meetup. Already registered meetups never reach the repository.
    ///
    /// # Examples
    /// ```
    /// use service::meetup::{Meetup, MeetupService, MeetupServiceImpl};
    /// use service::meetup::repository::mock::MockMeetupRepository;
    /// use std::sync::Arc;
    /// let svc = MeetupServiceImpl::new(Arc::new(MockMeetupRepository::default()));
    /// let saved = tokio_test::block_on(svc.save(Meetup { event: "Rust Night".into(), ..Default::default() })).unwrap();
    /// assert_eq!(saved.id, Some(1));
    ///
    /// let done = Meetup { event: "Rust Night".into(), registered: true, ..Default::default() };
    /// assert!(tokio_test::block_on(svc.save(done)).is_err());
    /// ```
    #[instrument(skip(self, meetup), fields(event = %meetup.event, registered = meetup.registered))]
    async fn save(&self, meetup: Meetup) -> Result<Meetup, ServiceError> {
        if meetup.registered {
            warn!("meetup_save_rejected");
            return Err(ServiceError::Business("Meetup already created".into()));
        }
        let saved = self.repo.save(meetup).await?;
        info!(meetup_id = ?saved.id, registration_id = ?saved.registration_id(), "meetup_created");
        Ok(saved)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Meetup>, ServiceError> {
        self.repo.find_by_id(id).await
    }

    #[instrument(skip(self, meetup))]
    async fn update(&self, meetup: Option<Meetup>) -> Result<Meetup, ServiceError> {
        let meetup = require_id(meetup)?;
        let updated = self.repo.save(meetup).await?;
        info!(meetup_id = ?updated.id, "meetup_updated");
        Ok(updated)
    }

    #[instrument(skip(self, meetup))]
    async fn delete(&self, meetup: Option<Meetup>) -> Result<(), ServiceError> {
        let meetup = require_id(meetup)?;
        self.repo.delete(&meetup).await?;
        info!(meetup_id = ?meetup.id, "meetup_deleted");
        Ok(())
    }

    async fn find(&self, filter: &MeetupFilter, page: PageRequest) -> Result<Page<Meetup>, ServiceError> {
        self.repo
            .find_by_registration_on_meetup(filter.registration.as_deref(), filter.event.as_deref(), page)
            .await
    }

    async fn get_registrations_by_meetup(&self, registration: &Registration, page: PageRequest) -> Result<Page<Meetup>, ServiceError> {
        self.repo.find_by_registration(registration, page).await
    }
}
