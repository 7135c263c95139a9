use async_trait::async_trait;

use super::domain::Registration;
use crate::errors::ServiceError;

/// Persistence abstraction for registrants.
#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    /// Insert when `id` is absent, otherwise update by id.
    async fn save(&self, registration: Registration) -> Result<Registration, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Registration>, ServiceError>;
    async fn find_by_attribute(&self, attribute: &str) -> Result<Option<Registration>, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockRegistrationRepository {
        rows: Mutex<BTreeMap<i32, Registration>>,
    }

    impl MockRegistrationRepository {
        /// Seed a registrant with a fixed id.
        pub fn with(self, registration: Registration) -> Self {
            if let Some(id) = registration.id {
                self.rows.lock().unwrap().insert(id, registration);
            }
            self
        }
    }

    #[async_trait]
    impl RegistrationRepository for MockRegistrationRepository {
        async fn save(&self, mut registration: Registration) -> Result<Registration, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            let id = match registration.id {
                Some(id) if !rows.contains_key(&id) => {
                    return Err(ServiceError::Db(format!("registration {id} not updated: no such row")));
                }
                Some(id) => id,
                None => rows.keys().next_back().copied().unwrap_or(0) + 1,
            };
            if rows.iter().any(|(k, r)| *k != id && r.registration == registration.registration) {
                return Err(ServiceError::Business("Registration already created".into()));
            }
            registration.id = Some(id);
            rows.insert(id, registration.clone());
            Ok(registration)
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<Registration>, ServiceError> {
            Ok(self.rows.lock().unwrap().get(&id).cloned())
        }

        async fn find_by_attribute(&self, attribute: &str) -> Result<Option<Registration>, ServiceError> {
            let rows = self.rows.lock().unwrap();
            Ok(rows.values().find(|r| r.registration == attribute).cloned())
        }
    }
}
