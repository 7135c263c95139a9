use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, PaginatorTrait, QueryFilter, QueryOrder,
    Select, Set,
};

use common::pagination::{Page, PageRequest};
use models::{meetup, registration};

use crate::errors::ServiceError;
use crate::meetup::domain::Meetup;
use crate::meetup::repository::MeetupRepository;
use crate::registration::Registration;

/// SeaORM-backed repository implementation.
pub struct SeaOrmMeetupRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmMeetupRepository {
    /// Run `query` joined with its registrant, ordered by id, one page at a time.
    async fn fetch_page(&self, query: Select<meetup::Entity>, page: PageRequest) -> Result<Page<Meetup>, ServiceError> {
        let page = page.normalize();
        let paginator = query
            .find_also_related(registration::Entity)
            .order_by_asc(meetup::Column::Id)
            .paginate(&self.db, page.size);
        let total = paginator.num_items().await.map_err(|e| ServiceError::Db(e.to_string()))?;
        if page.offset() >= total {
            return Ok(Page::new(Vec::new(), page, total));
        }
        let rows = paginator
            .fetch_page(page.page)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        let content = rows.into_iter().map(|(m, r)| Meetup::from_models(m, r)).collect();
        Ok(Page::new(content, page, total))
    }
}

#[async_trait::async_trait]
impl MeetupRepository for SeaOrmMeetupRepository {
    async fn save(&self, m: Meetup) -> Result<Meetup, ServiceError> {
        let am = meetup::ActiveModel {
            id: m.id.map(Set).unwrap_or(NotSet),
            event: Set(m.event.clone()),
            meetup_date: Set(m.meetup_date.clone()),
            registered: Set(m.registered),
            registration_id: Set(m.registration_id()),
        };
        let saved = match m.id {
            None => am.insert(&self.db).await,
            Some(_) => am.update(&self.db).await,
        }
        .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(Meetup {
            id: Some(saved.id),
            event: saved.event,
            meetup_date: saved.meetup_date,
            registered: saved.registered,
            registration: m.registration,
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Meetup>, ServiceError> {
        let res = meetup::Entity::find_by_id(id)
            .find_also_related(registration::Entity)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(res.map(|(m, r)| Meetup::from_models(m, r)))
    }

    async fn delete(&self, m: &Meetup) -> Result<(), ServiceError> {
        if let Some(id) = m.id {
            meetup::Entity::delete_by_id(id)
                .exec(&self.db)
                .await
                .map_err(|e| ServiceError::Db(e.to_string()))?;
        }
        Ok(())
    }

    async fn find_by_registration_on_meetup(
        &self,
        registration_attr: Option<&str>,
        event: Option<&str>,
        page: PageRequest,
    ) -> Result<Page<Meetup>, ServiceError> {
        let mut query = meetup::Entity::find();
        if let Some(ev) = event.filter(|s| !s.is_empty()) {
            query = query.filter(meetup::Column::Event.eq(ev));
        }
        if let Some(attr) = registration_attr.filter(|s| !s.is_empty()) {
            // resolved against the registrant joined in `fetch_page`
            query = query.filter(registration::Column::Registration.eq(attr));
        }
        self.fetch_page(query, page).await
    }

    async fn find_by_registration(&self, registration: &Registration, page: PageRequest) -> Result<Page<Meetup>, ServiceError> {
        let Some(rid) = registration.id else {
            return Ok(Page::empty(page.normalize()));
        };
        let query = meetup::Entity::find().filter(meetup::Column::RegistrationId.eq(rid));
        self.fetch_page(query, page).await
    }
}
