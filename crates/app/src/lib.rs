//! Shared application domain and persistence modules.

pub mod auth;
pub mod context;
pub mod database;
pub mod documents;
pub mod domain;

#[cfg(test)]
mod test;

pub use mongodb::bson;
