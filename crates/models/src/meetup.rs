use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{errors, registration};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "meetup")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub event: String,
    pub meetup_date: Option<String>,
    pub registered: bool,
    pub registration_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Registration }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Registration => Entity::belongs_to(registration::Entity)
                .from(Column::RegistrationId)
                .to(registration::Column::Id)
                .into(),
        }
    }
}

impl Related<registration::Entity> for Entity {
    fn to() -> RelationDef { Relation::Registration.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_event(event: &str) -> Result<(), errors::ModelError> {
    if event.trim().is_empty() {
        return Err(errors::ModelError::Validation("event required".into()));
    }
    if event.chars().count() > 255 {
        return Err(errors::ModelError::Validation("event too long (<=255)".into()));
    }
    Ok(())
}
