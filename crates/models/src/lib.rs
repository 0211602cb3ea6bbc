//! Entities, field validators and response views for campers, activities and
//! the signups joining them.
pub mod errors;
pub mod db;
pub mod activity;
pub mod camper;
pub mod signup;
pub mod views;

#[cfg(test)]
mod tests;
