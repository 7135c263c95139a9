//! Registration module: registrants looked up by their external attribute.
//!
//! Same three-layer split as `meetup` (domain, repository, service).

pub mod domain;
pub mod repository;
pub mod service;
pub mod repo;

pub use domain::Registration;
pub use service::{RegistrationService, RegistrationServiceImpl};
