use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, instrument};

use super::domain::Registration;
use super::repository::RegistrationRepository;
use crate::errors::ServiceError;

/// Registrant lookup and creation, as consumed by the meetup handlers.
#[async_trait]
pub trait RegistrationService: Send + Sync {
    async fn save(&self, registration: Registration) -> Result<Registration, ServiceError>;
    async fn get_by_id(&self, id: i32) -> Result<Option<Registration>, ServiceError>;
    async fn get_registration_by_attribute(&self, attribute: &str) -> Result<Option<Registration>, ServiceError>;
}

pub struct RegistrationServiceImpl<R: RegistrationRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: RegistrationRepository + ?Sized> RegistrationServiceImpl<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }
}

#[async_trait]
impl<R: RegistrationRepository + ?Sized> RegistrationService for RegistrationServiceImpl<R> {
    /// Create a registrant; the external attribute must be unused.
    ///
    /// # Examples
    /// ```
    /// use service::registration::{Registration, RegistrationService, RegistrationServiceImpl};
    /// use service::registration::repository::mock::MockRegistrationRepository;
    /// use std::sync::Arc;
    /// let svc = RegistrationServiceImpl::new(Arc::new(MockRegistrationRepository::default()));
    /// let input = Registration { name: "Ana Neri".into(), registration: "001".into(), ..Default::default() };
    /// let saved = tokio_test::block_on(svc.save(input)).unwrap();
    /// assert_eq!(saved.id, Some(1));
    /// ```
    #[instrument(skip(self, registration), fields(attribute = %registration.registration))]
    async fn save(&self, registration: Registration) -> Result<Registration, ServiceError> {
        models::registration::validate_name(&registration.name)?;
        models::registration::validate_attribute(&registration.registration)?;
        if self.repo.find_by_attribute(&registration.registration).await?.is_some() {
            return Err(ServiceError::Business("Registration already created".into()));
        }
        let saved = self.repo.save(registration).await?;
        info!(registration_id = ?saved.id, "registration_created");
        Ok(saved)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Registration>, ServiceError> {
        self.repo.find_by_id(id).await
    }

    async fn get_registration_by_attribute(&self, attribute: &str) -> Result<Option<Registration>, ServiceError> {
        self.repo.find_by_attribute(attribute).await
    }
}
