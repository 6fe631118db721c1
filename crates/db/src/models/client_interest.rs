//! Row model for the `client_interests` table.

use realty_core::interest::ClientInterest;
use realty_core::types::{DbId, Timestamp};
use sqlx::FromRow;

use crate::models::column_decode_error;

/// A `client_interests` row with `interest_level` cast to text.
#[derive(Debug, Clone, FromRow)]
pub struct ClientInterestRow {
    pub id: DbId,
    pub client_id: DbId,
    pub property_id: DbId,
    pub interest_level: String,
    pub created_at: Timestamp,
}

impl ClientInterestRow {
    pub fn into_client_interest(self) -> Result<ClientInterest, sqlx::Error> {
        Ok(ClientInterest {
            id: self.id,
            client_id: self.client_id,
            property_id: self.property_id,
            interest_level: self
                .interest_level
                .parse()
                .map_err(|e| column_decode_error("interest_level", e))?,
            created_at: self.created_at,
        })
    }
}
