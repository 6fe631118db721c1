//! Handlers for the client procedures.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use realty_core::contact::{Client, CreateClient, UpdateClient};
use realty_core::types::{DeleteOutcome, IdInput};
use realty_db::repositories::ClientRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{RpcJson, RpcQuery};
use crate::response::DataResponse;
use crate::state::AppState;

const ENTITY: &str = "Client";

/// POST /rpc/createClient
pub async fn create(
    State(state): State<AppState>,
    RpcJson(input): RpcJson<CreateClient>,
) -> AppResult<(StatusCode, Json<DataResponse<Client>>)> {
    input.validate()?;
    let client = ClientRepo::create(&state.pool, &input).await?;
    tracing::info!(id = client.id, "Created client");
    Ok((StatusCode::CREATED, Json(DataResponse { data: client })))
}

/// GET /rpc/getClients
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Client>>>> {
    let clients = ClientRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: clients }))
}

/// GET /rpc/getClientById?id={id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RpcQuery(IdInput { id }): RpcQuery<IdInput>,
) -> AppResult<Json<DataResponse<Client>>> {
    let client = ClientRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| {
            tracing::debug!(id, "Client not found");
            AppError::not_found(ENTITY, id)
        })?;
    Ok(Json(DataResponse { data: client }))
}

/// POST /rpc/updateClient
pub async fn update(
    State(state): State<AppState>,
    RpcJson(input): RpcJson<UpdateClient>,
) -> AppResult<Json<DataResponse<Client>>> {
    input.validate()?;
    let id = input.id;
    let client = ClientRepo::update(&state.pool, &input)
        .await?
        .ok_or_else(|| {
            tracing::debug!(id, "Client not found for update");
            AppError::not_found(ENTITY, id)
        })?;
    tracing::info!(id, "Updated client");
    Ok(Json(DataResponse { data: client }))
}

/// POST /rpc/deleteClient
///
/// The store removes the client's interests with it.
pub async fn delete(
    State(state): State<AppState>,
    RpcJson(IdInput { id }): RpcJson<IdInput>,
) -> AppResult<Json<DataResponse<DeleteOutcome>>> {
    let success = ClientRepo::delete(&state.pool, id).await?;
    tracing::info!(id, success, "Deleted client");
    Ok(Json(DataResponse {
        data: DeleteOutcome { success },
    }))
}
