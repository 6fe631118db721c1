//! Clients: record, DTOs, and contact field rules.

use serde::{Deserialize, Serialize};

use crate::decimal::BUDGET;
use crate::error::CoreError;
use crate::patch::nullable;
use crate::rules::{validate_email, validate_positive, validate_required};
use crate::types::{DbId, Timestamp};

/// A stored client with `budget` in numeric form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub budget: Option<f64>,
    /// Free text, not constrained to the listing type set.
    pub desired_property_type: Option<String>,
    #[serde(rename = "created_at")]
    pub created_at: Timestamp,
}

/// DTO for creating a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClient {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub budget: Option<f64>,
    pub desired_property_type: Option<String>,
}

impl CreateClient {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_client_fields(&ClientFields {
            first_name: Some(&self.first_name),
            last_name: Some(&self.last_name),
            email: Some(&self.email),
            phone: Some(&self.phone),
            budget: self.budget,
        })
    }
}

/// DTO for updating a client. Only `id` is required.
///
/// `budget` and `desiredPropertyType` distinguish omitted from `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClient {
    pub id: DbId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub budget: Option<Option<f64>>,
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub desired_property_type: Option<Option<String>>,
}

impl UpdateClient {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_client_fields(&ClientFields {
            first_name: self.first_name.as_deref(),
            last_name: self.last_name.as_deref(),
            email: self.email.as_deref(),
            phone: self.phone.as_deref(),
            budget: self.budget.flatten(),
        })
    }
}

/// Client fields subject to validation. `None` means "not supplied".
///
/// `budget` is the budget value when one is being written; an explicit
/// clear (null) is not validated and should be passed as `None`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClientFields<'a> {
    pub first_name: Option<&'a str>,
    pub last_name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub budget: Option<f64>,
}

/// Validate every supplied client field.
pub fn validate_client_fields(fields: &ClientFields<'_>) -> Result<(), CoreError> {
    if let Some(first_name) = fields.first_name {
        validate_required("firstName", first_name)?;
    }
    if let Some(last_name) = fields.last_name {
        validate_required("lastName", last_name)?;
    }
    if let Some(email) = fields.email {
        validate_email(email)?;
    }
    if let Some(phone) = fields.phone {
        validate_required("phone", phone)?;
    }
    if let Some(budget) = fields.budget {
        validate_positive("budget", budget)?;
        BUDGET.check("budget", budget)?;
    }
    Ok(())
}
