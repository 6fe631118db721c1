//! Property listings: record, DTOs, enumerations, and field rules.

use serde::{Deserialize, Serialize};

use crate::decimal::{PRICE, SQUARE_FOOTAGE};
use crate::error::CoreError;
use crate::patch::nullable;
use crate::rules::{validate_non_negative, validate_positive, validate_required};
use crate::types::{DbId, Timestamp};

define_literal_enum! {
    /// Kind of dwelling a listing describes.
    PropertyType ("property type") {
        House = "House",
        Apartment = "Apartment",
        Condo = "Condo",
    }
}

define_literal_enum! {
    /// Where a listing is in the sales process.
    PropertyStatus ("property status") {
        Available = "Available",
        UnderContract = "Under Contract",
        Sold = "Sold",
    }
}

/// A stored property listing with decimal columns in numeric form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: DbId,
    pub address: String,
    pub price: f64,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub square_footage: f64,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub status: PropertyStatus,
    pub description: Option<String>,
    #[serde(rename = "created_at")]
    pub created_at: Timestamp,
}

/// DTO for creating a property. `description` may be null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProperty {
    pub address: String,
    pub price: f64,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub square_footage: f64,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub status: PropertyStatus,
    pub description: Option<String>,
}

impl CreateProperty {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_property_fields(&PropertyFields {
            address: Some(&self.address),
            price: Some(self.price),
            bedrooms: Some(self.bedrooms),
            bathrooms: Some(self.bathrooms),
            square_footage: Some(self.square_footage),
        })
    }
}

/// DTO for updating a property. Only `id` is required.
///
/// `description` distinguishes omitted (unchanged) from `null` (cleared).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProperty {
    pub id: DbId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub square_footage: Option<f64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub property_type: Option<PropertyType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PropertyStatus>,
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Option<String>>,
}

impl UpdateProperty {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_property_fields(&PropertyFields {
            address: self.address.as_deref(),
            price: self.price,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            square_footage: self.square_footage,
        })
    }
}

/// Property fields subject to validation. `None` means "not supplied".
///
/// Create inputs supply every field; update inputs supply only what changes.
#[derive(Debug, Default, Clone, Copy)]
pub struct PropertyFields<'a> {
    pub address: Option<&'a str>,
    pub price: Option<f64>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub square_footage: Option<f64>,
}

/// Validate every supplied property field.
///
/// Price and square footage must be positive and representable in their
/// NUMERIC columns without rounding.
pub fn validate_property_fields(fields: &PropertyFields<'_>) -> Result<(), CoreError> {
    if let Some(address) = fields.address {
        validate_required("address", address)?;
    }
    if let Some(price) = fields.price {
        validate_positive("price", price)?;
        PRICE.check("price", price)?;
    }
    if let Some(bedrooms) = fields.bedrooms {
        validate_non_negative("bedrooms", bedrooms)?;
    }
    if let Some(bathrooms) = fields.bathrooms {
        validate_non_negative("bathrooms", bathrooms)?;
    }
    if let Some(square_footage) = fields.square_footage {
        validate_positive("squareFootage", square_footage)?;
        SQUARE_FOOTAGE.check("squareFootage", square_footage)?;
    }
    Ok(())
}
