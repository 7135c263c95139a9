use async_trait::async_trait;

use super::domain::Meetup;
use crate::errors::ServiceError;
use crate::registration::Registration;
use common::pagination::{Page, PageRequest};

/// Persistence gateway for meetups. One named method per query shape.
#[async_trait]
pub trait MeetupRepository: Send + Sync {
    /// Insert when `id` is absent, otherwise update by id. Returns the stored entity.
    async fn save(&self, meetup: Meetup) -> Result<Meetup, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Meetup>, ServiceError>;
    /// Remove by id; unknown ids are a no-op.
    async fn delete(&self, meetup: &Meetup) -> Result<(), ServiceError>;
    /// Meetups whose registrant attribute equals `registration` and whose event equals `event`.
    /// An absent or empty filter matches everything.
    async fn find_by_registration_on_meetup(
        &self,
        registration: Option<&str>,
        event: Option<&str>,
        page: PageRequest,
    ) -> Result<Page<Meetup>, ServiceError>;
    /// Meetups linked to the given registrant.
    async fn find_by_registration(&self, registration: &Registration, page: PageRequest) -> Result<Page<Meetup>, ServiceError>;
}

pub(crate) fn matches_filter(value: &str, filter: Option<&str>) -> bool {
    match filter {
        Some(f) if !f.is_empty() => value == f,
        _ => true,
    }
}

/// In-memory mock repository; records every call for delegation checks.
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    pub enum RepoCall {
        Save(Meetup),
        FindById(i32),
        Delete(Meetup),
        FindByRegistrationOnMeetup { registration: Option<String>, event: Option<String>, page: PageRequest },
        FindByRegistration { registration: Registration, page: PageRequest },
    }

    #[derive(Default)]
    pub struct MockMeetupRepository {
        rows: Mutex<BTreeMap<i32, Meetup>>,
        calls: Mutex<Vec<RepoCall>>,
    }

    impl MockMeetupRepository {
        /// Seed a stored meetup; it must carry an id.
        pub fn with(self, meetup: Meetup) -> Self {
            if let Some(id) = meetup.id {
                self.rows.lock().unwrap().insert(id, meetup);
            }
            self
        }

        pub fn calls(&self) -> Vec<RepoCall> {
            self.calls.lock().unwrap().clone()
        }

        pub fn count(&self, pred: impl Fn(&RepoCall) -> bool) -> usize {
            self.calls.lock().unwrap().iter().filter(|c| pred(c)).count()
        }

        fn record(&self, call: RepoCall) {
            self.calls.lock().unwrap().push(call);
        }

        fn paged(items: Vec<Meetup>, page: PageRequest) -> Page<Meetup> {
            let total = items.len() as u64;
            let content = items
                .into_iter()
                .skip(page.offset() as usize)
                .take(page.size as usize)
                .collect();
            Page::new(content, page, total)
        }
    }

    #[async_trait]
    impl MeetupRepository for MockMeetupRepository {
        async fn save(&self, mut meetup: Meetup) -> Result<Meetup, ServiceError> {
            self.record(RepoCall::Save(meetup.clone()));
            let mut rows = self.rows.lock().unwrap();
            let id = match meetup.id {
                Some(id) if !rows.contains_key(&id) => {
                    return Err(ServiceError::Db(format!("meetup {id} not updated: no such row")));
                }
                Some(id) => id,
                None => rows.keys().next_back().copied().unwrap_or(0) + 1,
            };
            meetup.id = Some(id);
            rows.insert(id, meetup.clone());
            Ok(meetup)
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<Meetup>, ServiceError> {
            self.record(RepoCall::FindById(id));
            Ok(self.rows.lock().unwrap().get(&id).cloned())
        }

        async fn delete(&self, meetup: &Meetup) -> Result<(), ServiceError> {
            self.record(RepoCall::Delete(meetup.clone()));
            if let Some(id) = meetup.id {
                self.rows.lock().unwrap().remove(&id);
            }
            Ok(())
        }

        async fn find_by_registration_on_meetup(
            &self,
            registration: Option<&str>,
            event: Option<&str>,
            page: PageRequest,
        ) -> Result<Page<Meetup>, ServiceError> {
            self.record(RepoCall::FindByRegistrationOnMeetup {
                registration: registration.map(str::to_string),
                event: event.map(str::to_string),
                page,
            });
            let items: Vec<Meetup> = self
                .rows
                .lock()
                .unwrap()
                .values()
                .filter(|m| matches_filter(&m.event, event))
                .filter(|m| match registration {
                    Some(attr) if !attr.is_empty() => {
                        m.registration.as_ref().map(|r| r.registration.as_str()) == Some(attr)
                    }
                    _ => true,
                })
                .cloned()
                .collect();
            Ok(Self::paged(items, page))
        }

        async fn find_by_registration(&self, registration: &Registration, page: PageRequest) -> Result<Page<Meetup>, ServiceError> {
            self.record(RepoCall::FindByRegistration { registration: registration.clone(), page });
            let items: Vec<Meetup> = match registration.id {
                Some(rid) => self
                    .rows
                    .lock()
                    .unwrap()
                    .values()
                    .filter(|m| m.registration_id() == Some(rid))
                    .cloned()
                    .collect(),
                None => Vec::new(),
            };
            Ok(Self::paged(items, page))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::matches_filter;

    #[test]
    fn empty_filter_matches_all() {
        assert!(matches_filter("anything", None));
        assert!(matches_filter("anything", Some("")));
        assert!(matches_filter("Test event", Some("Test event")));
        assert!(!matches_filter("Test event", Some("Other")));
    }
}
