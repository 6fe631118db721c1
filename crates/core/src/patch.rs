//! Presence-aware deserialization for partial updates.
//!
//! A nullable column in an update DTO is typed `Option<Option<T>>`:
//!
//! | JSON            | Value          | Effect                 |
//! |-----------------|----------------|------------------------|
//! | field omitted   | `None`         | leave column unchanged |
//! | `"field": null` | `Some(None)`   | clear the column       |
//! | `"field": v`    | `Some(Some(v))`| write `v`              |
//!
//! Plain serde collapses the first two cases, so such fields must be
//! annotated with `#[serde(default, deserialize_with = "nullable")]`.

use serde::{Deserialize, Deserializer};

/// Deserialize a present field (possibly `null`) as `Some(..)`.
///
/// Absent fields never reach this function; `#[serde(default)]` makes them `None`.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
