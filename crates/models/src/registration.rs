use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{errors, meetup};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "registration")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// External attribute registrants are looked up by.
    #[sea_orm(unique)]
    pub registration: String,
    pub date_of_registration: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Meetup }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Meetup => Entity::has_many(meetup::Entity).into(),
        }
    }
}

impl Related<meetup::Entity> for Entity {
    fn to() -> RelationDef { Relation::Meetup.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() {
        return Err(errors::ModelError::Validation("name required".into()));
    }
    if name.chars().count() > 255 {
        return Err(errors::ModelError::Validation("name too long (<=255)".into()));
    }
    Ok(())
}

pub fn validate_attribute(attr: &str) -> Result<(), errors::ModelError> {
    if attr.trim().is_empty() {
        return Err(errors::ModelError::Validation("registration attribute required".into()));
    }
    if attr.chars().count() > 64 {
        return Err(errors::ModelError::Validation("registration attribute too long (<=64)".into()));
    }
    Ok(())
}
