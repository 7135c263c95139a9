use serde::{Deserialize, Serialize};

/// Registrant record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub name: String,
    /// External identifier used to look the registrant up.
    #[serde(default)]
    pub registration: String,
    #[serde(default)]
    pub date_of_registration: Option<String>,
}

impl From<models::registration::Model> for Registration {
    fn from(m: models::registration::Model) -> Self {
        Self {
            id: Some(m.id),
            name: m.name,
            registration: m.registration,
            date_of_registration: m.date_of_registration,
        }
    }
}
