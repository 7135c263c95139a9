use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryFilter, Set, SqlErr};

use crate::errors::ServiceError;
use crate::registration::domain::Registration;
use crate::registration::repository::RegistrationRepository;
use models::registration;

/// A concurrent insert of the same attribute loses on the unique index; report it as the business rule.
fn map_save_err(e: DbErr) -> ServiceError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => ServiceError::Business("Registration already created".into()),
        _ => ServiceError::Db(e.to_string()),
    }
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmRegistrationRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl RegistrationRepository for SeaOrmRegistrationRepository {
    async fn save(&self, r: Registration) -> Result<Registration, ServiceError> {
        let am = registration::ActiveModel {
            id: r.id.map(Set).unwrap_or(NotSet),
            name: Set(r.name),
            registration: Set(r.registration),
            date_of_registration: Set(r.date_of_registration),
        };
        let saved = match r.id {
            None => am.insert(&self.db).await,
            Some(_) => am.update(&self.db).await,
        }
        .map_err(map_save_err)?;
        Ok(saved.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Registration>, ServiceError> {
        let res = registration::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(res.map(Into::into))
    }

    async fn find_by_attribute(&self, attribute: &str) -> Result<Option<Registration>, ServiceError> {
        let res = registration::Entity::find()
            .filter(registration::Column::Registration.eq(attribute))
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(res.map(Into::into))
    }
}
