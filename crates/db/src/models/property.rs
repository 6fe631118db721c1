//! Row model for the `properties` table.

use realty_core::decimal::{PRICE, SQUARE_FOOTAGE};
use realty_core::listing::Property;
use realty_core::types::{DbId, Timestamp};
use sqlx::FromRow;

use crate::models::column_decode_error;

/// A `properties` row with `price`, `square_footage`, `property_type` and
/// `status` cast to text.
#[derive(Debug, Clone, FromRow)]
pub struct PropertyRow {
    pub id: DbId,
    pub address: String,
    pub price: String,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub square_footage: String,
    pub property_type: String,
    pub status: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
}

impl PropertyRow {
    /// Convert into the wire record, decoding decimal and enum text.
    pub fn into_property(self) -> Result<Property, sqlx::Error> {
        Ok(Property {
            id: self.id,
            price: PRICE
                .decode(&self.price)
                .map_err(|e| column_decode_error("price", e))?,
            square_footage: SQUARE_FOOTAGE
                .decode(&self.square_footage)
                .map_err(|e| column_decode_error("square_footage", e))?,
            property_type: self
                .property_type
                .parse()
                .map_err(|e| column_decode_error("property_type", e))?,
            status: self
                .status
                .parse()
                .map_err(|e| column_decode_error("status", e))?,
            address: self.address,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            description: self.description,
            created_at: self.created_at,
        })
    }
}
