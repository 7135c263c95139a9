use serde::{Deserialize, Serialize};

use crate::registration::Registration;

/// An event occurrence a registrant can be enrolled in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meetup {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub event: String,
    #[serde(default)]
    pub meetup_date: Option<String>,
    /// Marks the meetup as finalized; creation is refused once set.
    #[serde(default)]
    pub registered: bool,
    #[serde(default)]
    pub registration: Option<Registration>,
}

impl Meetup {
    pub fn registration_id(&self) -> Option<i32> {
        self.registration.as_ref().and_then(|r| r.id)
    }

    pub(crate) fn from_models(m: models::meetup::Model, r: Option<models::registration::Model>) -> Self {
        Self {
            id: Some(m.id),
            event: m.event,
            meetup_date: m.meetup_date,
            registered: m.registered,
            registration: r.map(Registration::from),
        }
    }
}

/// Query filter for meetup search. `None` or empty fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetupFilter {
    /// Registration attribute of the linked registrant.
    #[serde(default)]
    pub registration: Option<String>,
    #[serde(default)]
    pub event: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_camel_case() {
        let m = Meetup {
            id: Some(11),
            event: "test event".into(),
            meetup_date: Some("06/06/2022".into()),
            registered: true,
            registration: None,
        };
        let v = serde_json::to_value(&m).unwrap();
        assert_eq!(v["id"], 11);
        assert_eq!(v["meetupDate"], "06/06/2022");
        assert_eq!(v["registered"], true);
    }

    #[test]
    fn registered_defaults_to_false() {
        let m: Meetup = serde_json::from_str(r#"{"event":"x"}"#).unwrap();
        assert!(!m.registered);
        assert!(m.id.is_none());
        assert!(m.registration_id().is_none());
    }
}
