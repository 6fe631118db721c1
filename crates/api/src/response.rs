//! The `{ "data": ... }` body every successful procedure returns.
//!
//! Failures never use it; they render through `AppError` as
//! `{ "error", "code" }`.

use serde::Serialize;

/// Success body for procedure output `T`: a record, a list of records, a
/// `DeleteOutcome`, or the healthcheck payload.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
