//! Repository for the `clients` table.

use realty_core::contact::{Client, CreateClient, UpdateClient};
use realty_core::decimal::BUDGET;
use realty_core::types::DbId;
use sqlx::PgPool;

use crate::models::client::ClientRow;
use crate::models::encode_error;

/// Column list shared across queries. `budget` comes back as text.
const COLUMNS: &str = "id, first_name, last_name, email, phone, budget::text AS budget, \
     desired_property_type, created_at";

/// Provides CRUD operations for clients.
pub struct ClientRepo;

impl ClientRepo {
    /// Insert a new client, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateClient) -> Result<Client, sqlx::Error> {
        let budget = input
            .budget
            .map(|v| BUDGET.encode(v))
            .transpose()
            .map_err(encode_error)?;

        let query = format!(
            "INSERT INTO clients
                (first_name, last_name, email, phone, budget, desired_property_type)
             VALUES ($1, $2, $3, $4, $5::numeric, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ClientRow>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(budget)
            .bind(&input.desired_property_type)
            .fetch_one(pool)
            .await?
            .into_client()
    }

    /// Find a client by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients WHERE id = $1");
        sqlx::query_as::<_, ClientRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .map(ClientRow::into_client)
            .transpose()
    }

    /// Whether a client with this ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM clients WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// List every client in creation order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients ORDER BY id ASC");
        sqlx::query_as::<_, ClientRow>(&query)
            .fetch_all(pool)
            .await?
            .into_iter()
            .map(ClientRow::into_client)
            .collect()
    }

    /// Update a client. Only fields present in `input` are written.
    ///
    /// `budget` and `desired_property_type` use `Option<Option<_>>` so an
    /// explicit null clears the column. Returns `None` if no row matches.
    pub async fn update(pool: &PgPool, input: &UpdateClient) -> Result<Option<Client>, sqlx::Error> {
        let budget_provided = input.budget.is_some();
        let budget = input
            .budget
            .flatten()
            .map(|v| BUDGET.encode(v))
            .transpose()
            .map_err(encode_error)?;
        let desired_provided = input.desired_property_type.is_some();
        let desired = input
            .desired_property_type
            .as_ref()
            .and_then(|v| v.as_deref());

        let query = format!(
            "UPDATE clients SET
                first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                email = COALESCE($4, email),
                phone = COALESCE($5, phone),
                budget = CASE WHEN $6 THEN $7::numeric ELSE budget END,
                desired_property_type = CASE WHEN $8 THEN $9 ELSE desired_property_type END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ClientRow>(&query)
            .bind(input.id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(budget_provided)
            .bind(budget)
            .bind(desired_provided)
            .bind(desired)
            .fetch_optional(pool)
            .await?
            .map(ClientRow::into_client)
            .transpose()
    }

    /// Delete a client by ID, cascading to its interests.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
