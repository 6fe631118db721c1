//! Procedure handlers, one module per entity.
//!
//! Handlers validate their input, call a repository with the shared pool,
//! and wrap the result in a [`DataResponse`](crate::response::DataResponse).

pub mod client;
pub mod client_interest;
pub mod property;
