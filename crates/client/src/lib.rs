//! Client layer for the realty back office.
//!
//! [`RealtyClient`] speaks the `/rpc` procedure catalog over HTTP.
//! [`BackOffice`] keeps local copies of every list the way the form-driven
//! UI does, applying the result of each mutation without refetching.

pub mod api;
pub mod back_office;
pub mod error;
pub mod workspace;

pub use api::RealtyClient;
pub use back_office::BackOffice;
pub use error::ClientError;
pub use workspace::Workspace;
