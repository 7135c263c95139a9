//! Service layer providing the meetup business rules on top of models.
//! - Separates business logic from data access through repository traits.
//! - Reuses validation and entity definitions in `models` crate.
//! - Errors are returned as `ServiceError` values for the HTTP layer to map.

pub mod errors;
pub mod registration;
pub mod meetup;
#[cfg(test)]
pub mod test_support;

pub use common::pagination::{Page, PageRequest};
