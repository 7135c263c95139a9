pub mod errors;
pub mod db;
pub mod registration;
pub mod meetup;

#[cfg(test)]
mod tests;
