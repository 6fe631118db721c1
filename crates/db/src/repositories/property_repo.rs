//! Repository for the `properties` table.

use realty_core::decimal::{PRICE, SQUARE_FOOTAGE};
use realty_core::listing::{CreateProperty, Property, UpdateProperty};
use realty_core::types::DbId;
use sqlx::PgPool;

use crate::models::encode_error;
use crate::models::property::PropertyRow;

/// Column list shared across queries. Decimal and enum columns come back as text.
const COLUMNS: &str = "id, address, price::text AS price, bedrooms, bathrooms, \
     square_footage::text AS square_footage, property_type::text AS property_type, \
     status::text AS status, description, created_at";

/// Provides CRUD operations for properties.
pub struct PropertyRepo;

impl PropertyRepo {
    /// Insert a new property, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProperty) -> Result<Property, sqlx::Error> {
        let price = PRICE.encode(input.price).map_err(encode_error)?;
        let square_footage = SQUARE_FOOTAGE
            .encode(input.square_footage)
            .map_err(encode_error)?;

        let query = format!(
            "INSERT INTO properties
                (address, price, bedrooms, bathrooms, square_footage, property_type, status, description)
             VALUES ($1, $2::numeric, $3, $4, $5::numeric, $6::property_type, $7::property_status, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PropertyRow>(&query)
            .bind(&input.address)
            .bind(price)
            .bind(input.bedrooms)
            .bind(input.bathrooms)
            .bind(square_footage)
            .bind(input.property_type.as_str())
            .bind(input.status.as_str())
            .bind(&input.description)
            .fetch_one(pool)
            .await?
            .into_property()
    }

    /// Find a property by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Property>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM properties WHERE id = $1");
        sqlx::query_as::<_, PropertyRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .map(PropertyRow::into_property)
            .transpose()
    }

    /// Whether a property with this ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM properties WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// List every property in creation order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Property>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM properties ORDER BY id ASC");
        sqlx::query_as::<_, PropertyRow>(&query)
            .fetch_all(pool)
            .await?
            .into_iter()
            .map(PropertyRow::into_property)
            .collect()
    }

    /// Update a property. Only fields present in `input` are written.
    ///
    /// `description: Some(None)` clears the column; `None` leaves it alone.
    /// Returns `None` if no row with `input.id` exists.
    pub async fn update(
        pool: &PgPool,
        input: &UpdateProperty,
    ) -> Result<Option<Property>, sqlx::Error> {
        let price = input
            .price
            .map(|v| PRICE.encode(v))
            .transpose()
            .map_err(encode_error)?;
        let square_footage = input
            .square_footage
            .map(|v| SQUARE_FOOTAGE.encode(v))
            .transpose()
            .map_err(encode_error)?;
        let description_provided = input.description.is_some();
        let description = input.description.as_ref().and_then(|v| v.as_deref());

        let query = format!(
            "UPDATE properties SET
                address = COALESCE($2, address),
                price = COALESCE($3::numeric, price),
                bedrooms = COALESCE($4, bedrooms),
                bathrooms = COALESCE($5, bathrooms),
                square_footage = COALESCE($6::numeric, square_footage),
                property_type = COALESCE($7::property_type, property_type),
                status = COALESCE($8::property_status, status),
                description = CASE WHEN $9 THEN $10 ELSE description END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PropertyRow>(&query)
            .bind(input.id)
            .bind(&input.address)
            .bind(price)
            .bind(input.bedrooms)
            .bind(input.bathrooms)
            .bind(square_footage)
            .bind(input.property_type.map(|t| t.as_str()))
            .bind(input.status.map(|s| s.as_str()))
            .bind(description_provided)
            .bind(description)
            .fetch_optional(pool)
            .await?
            .map(PropertyRow::into_property)
            .transpose()
    }

    /// Delete a property by ID. Interests referencing it are removed by the
    /// `ON DELETE CASCADE` foreign key.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM properties WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
