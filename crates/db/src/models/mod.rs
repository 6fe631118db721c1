//! Row models.
//!
//! Each submodule contains a `FromRow` struct matching the columns the
//! repositories select. Decimal and enum columns are selected as text and
//! converted to the wire records from `realty_core` in one place, so a bad
//! stored value surfaces as a column decode error instead of a panic.

pub mod client;
pub mod client_interest;
pub mod property;

/// Wrap a conversion failure as a decode error for `column`.
pub(crate) fn column_decode_error<E>(column: &str, err: E) -> sqlx::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(err),
    }
}

/// Wrap a conversion failure on the write path as an encode error.
pub(crate) fn encode_error<E>(err: E) -> sqlx::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    sqlx::Error::Encode(Box::new(err))
}
