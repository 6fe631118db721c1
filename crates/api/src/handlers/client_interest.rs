//! Handlers for the client interest procedures.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use realty_core::interest::{ClientInterest, CreateClientInterest, UpdateClientInterest};
use realty_core::types::{DbId, DeleteOutcome, IdInput};
use realty_db::repositories::{ClientInterestRepo, ClientRepo, PropertyRepo};
use realty_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::extract::RpcJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// Verify that a client exists, returning 404 if not.
async fn ensure_client_exists(pool: &DbPool, id: DbId) -> AppResult<()> {
    if ClientRepo::exists(pool, id).await? {
        Ok(())
    } else {
        tracing::debug!(client_id = id, "Interest references missing client");
        Err(AppError::not_found("Client", id))
    }
}

/// Verify that a property exists, returning 404 if not.
async fn ensure_property_exists(pool: &DbPool, id: DbId) -> AppResult<()> {
    if PropertyRepo::exists(pool, id).await? {
        Ok(())
    } else {
        tracing::debug!(property_id = id, "Interest references missing property");
        Err(AppError::not_found("Property", id))
    }
}

/// POST /rpc/createClientInterest
///
/// Checks the client, then the property, before inserting. A parent deleted
/// between the check and the insert surfaces as a foreign key conflict.
pub async fn create(
    State(state): State<AppState>,
    RpcJson(input): RpcJson<CreateClientInterest>,
) -> AppResult<(StatusCode, Json<DataResponse<ClientInterest>>)> {
    ensure_client_exists(&state.pool, input.client_id).await?;
    ensure_property_exists(&state.pool, input.property_id).await?;

    let interest = ClientInterestRepo::create(&state.pool, &input).await?;
    tracing::info!(
        id = interest.id,
        client_id = interest.client_id,
        property_id = interest.property_id,
        interest_level = %interest.interest_level,
        "Created client interest"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: interest })))
}

/// GET /rpc/getClientInterests
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ClientInterest>>>> {
    let interests = ClientInterestRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: interests }))
}

/// POST /rpc/updateClientInterest
pub async fn update(
    State(state): State<AppState>,
    RpcJson(input): RpcJson<UpdateClientInterest>,
) -> AppResult<Json<DataResponse<ClientInterest>>> {
    let id = input.id;
    let interest = ClientInterestRepo::update(&state.pool, &input)
        .await?
        .ok_or_else(|| {
            tracing::debug!(id, "Client interest not found for update");
            AppError::not_found("ClientInterest", id)
        })?;
    tracing::info!(id, interest_level = %interest.interest_level, "Updated client interest");
    Ok(Json(DataResponse { data: interest }))
}

/// POST /rpc/deleteClientInterest
pub async fn delete(
    State(state): State<AppState>,
    RpcJson(IdInput { id }): RpcJson<IdInput>,
) -> AppResult<Json<DataResponse<DeleteOutcome>>> {
    let success = ClientInterestRepo::delete(&state.pool, id).await?;
    tracing::info!(id, success, "Deleted client interest");
    Ok(Json(DataResponse {
        data: DeleteOutcome { success },
    }))
}
