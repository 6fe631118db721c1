//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod client_interest_repo;
pub mod client_repo;
pub mod property_repo;

pub use client_interest_repo::ClientInterestRepo;
pub use client_repo::ClientRepo;
pub use property_repo::PropertyRepo;
