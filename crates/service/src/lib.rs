//! Service layer providing the transactional operations behind each endpoint.
//! - Every write runs inside its own transaction: committed on success,
//!   rolled back on any error path.
//! - Reuses validation and entity definitions in `models` crate.

pub mod errors;
pub mod activity_service;
pub mod camper_service;
pub mod signup_service;
#[cfg(test)]
pub mod test_support;
