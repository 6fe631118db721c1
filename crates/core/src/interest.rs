//! Client interests: the junction between a client and a property.

use serde::{Deserialize, Serialize};

use crate::types::{DbId, Timestamp};

define_literal_enum! {
    /// How strongly a client is interested in a property.
    InterestLevel ("interest level") {
        High = "High",
        Medium = "Medium",
        Low = "Low",
    }
}

/// A stored client interest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientInterest {
    pub id: DbId,
    pub client_id: DbId,
    pub property_id: DbId,
    pub interest_level: InterestLevel,
    #[serde(rename = "created_at")]
    pub created_at: Timestamp,
}

/// DTO for linking a client to a property.
///
/// Both references are checked for existence before the insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientInterest {
    pub client_id: DbId,
    pub property_id: DbId,
    pub interest_level: InterestLevel,
}

/// DTO for updating a client interest. The links themselves are immutable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClientInterest {
    pub id: DbId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest_level: Option<InterestLevel>,
}
