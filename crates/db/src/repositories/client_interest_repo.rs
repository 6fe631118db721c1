//! Repository for the `client_interests` junction table.

use realty_core::interest::{ClientInterest, CreateClientInterest, UpdateClientInterest};
use realty_core::types::DbId;
use sqlx::PgPool;

use crate::models::client_interest::ClientInterestRow;

const COLUMNS: &str =
    "id, client_id, property_id, interest_level::text AS interest_level, created_at";

/// Provides CRUD operations for client interests.
pub struct ClientInterestRepo;

impl ClientInterestRepo {
    /// Insert a new interest link, returning the created row.
    ///
    /// Does not check that the client and property exist; callers that want
    /// a descriptive error check first. A missing parent still fails here
    /// with a foreign key violation.
    pub async fn create(
        pool: &PgPool,
        input: &CreateClientInterest,
    ) -> Result<ClientInterest, sqlx::Error> {
        let query = format!(
            "INSERT INTO client_interests (client_id, property_id, interest_level)
             VALUES ($1, $2, $3::interest_level)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ClientInterestRow>(&query)
            .bind(input.client_id)
            .bind(input.property_id)
            .bind(input.interest_level.as_str())
            .fetch_one(pool)
            .await?
            .into_client_interest()
    }

    /// Find an interest by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ClientInterest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM client_interests WHERE id = $1");
        sqlx::query_as::<_, ClientInterestRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .map(ClientInterestRow::into_client_interest)
            .transpose()
    }

    /// List every interest in creation order.
    pub async fn list(pool: &PgPool) -> Result<Vec<ClientInterest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM client_interests ORDER BY id ASC");
        Self::fetch_all(pool, &query, None).await
    }

    /// List the interests recorded for one client.
    pub async fn list_by_client(
        pool: &PgPool,
        client_id: DbId,
    ) -> Result<Vec<ClientInterest>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM client_interests WHERE client_id = $1 ORDER BY id ASC");
        Self::fetch_all(pool, &query, Some(client_id)).await
    }

    /// List the interests recorded against one property.
    pub async fn list_by_property(
        pool: &PgPool,
        property_id: DbId,
    ) -> Result<Vec<ClientInterest>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM client_interests WHERE property_id = $1 ORDER BY id ASC"
        );
        Self::fetch_all(pool, &query, Some(property_id)).await
    }

    /// Update an interest level. Omitting the level returns the row unchanged.
    ///
    /// Returns `None` if no row with `input.id` exists.
    pub async fn update(
        pool: &PgPool,
        input: &UpdateClientInterest,
    ) -> Result<Option<ClientInterest>, sqlx::Error> {
        let query = format!(
            "UPDATE client_interests SET
                interest_level = COALESCE($2::interest_level, interest_level)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ClientInterestRow>(&query)
            .bind(input.id)
            .bind(input.interest_level.map(|l| l.as_str()))
            .fetch_optional(pool)
            .await?
            .map(ClientInterestRow::into_client_interest)
            .transpose()
    }

    /// Delete an interest by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM client_interests WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn fetch_all(
        pool: &PgPool,
        query: &str,
        filter: Option<DbId>,
    ) -> Result<Vec<ClientInterest>, sqlx::Error> {
        let mut rows = sqlx::query_as::<_, ClientInterestRow>(query);
        if let Some(id) = filter {
            rows = rows.bind(id);
        }
        rows.fetch_all(pool)
            .await?
            .into_iter()
            .map(ClientInterestRow::into_client_interest)
            .collect()
    }
}
