//! Row model for the `clients` table.

use realty_core::contact::Client;
use realty_core::decimal::BUDGET;
use realty_core::types::{DbId, Timestamp};
use sqlx::FromRow;

use crate::models::column_decode_error;

/// A `clients` row with `budget` cast to text.
#[derive(Debug, Clone, FromRow)]
pub struct ClientRow {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub budget: Option<String>,
    pub desired_property_type: Option<String>,
    pub created_at: Timestamp,
}

impl ClientRow {
    /// Convert into the wire record, decoding `budget` when present.
    pub fn into_client(self) -> Result<Client, sqlx::Error> {
        let budget = self
            .budget
            .as_deref()
            .map(|text| BUDGET.decode(text))
            .transpose()
            .map_err(|e| column_decode_error("budget", e))?;

        Ok(Client {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            budget,
            desired_property_type: self.desired_property_type,
            created_at: self.created_at,
        })
    }
}
