//! Meetup module: three-layer architecture (domain, repository, service).
//!
//! The service enforces the single creation invariant and otherwise delegates
//! to the repository.

pub mod domain;
pub mod repository;
pub mod service;
pub mod repo;

pub use domain::{Meetup, MeetupFilter};
pub use service::{MeetupService, MeetupServiceImpl};
