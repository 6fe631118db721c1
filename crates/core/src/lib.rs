//! Domain rules for the realty back office.
//!
//! Pure logic only: identifiers, the error taxonomy, the decimal codec used
//! at the NUMERIC column boundary, field validation, the enumerated value
//! sets, and the wire records and DTOs shared by the server and the typed
//! client. Nothing here performs I/O.

#[macro_use]
mod literal_enum;

pub mod contact;
pub mod decimal;
pub mod error;
pub mod interest;
pub mod listing;
pub mod patch;
pub mod rules;
pub mod types;
