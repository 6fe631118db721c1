//! Handlers for the property procedures.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use realty_core::listing::{CreateProperty, Property, UpdateProperty};
use realty_core::types::{DeleteOutcome, IdInput};
use realty_db::repositories::PropertyRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{RpcJson, RpcQuery};
use crate::response::DataResponse;
use crate::state::AppState;

const ENTITY: &str = "Property";

/// POST /rpc/createProperty
pub async fn create(
    State(state): State<AppState>,
    RpcJson(input): RpcJson<CreateProperty>,
) -> AppResult<(StatusCode, Json<DataResponse<Property>>)> {
    input.validate()?;
    let property = PropertyRepo::create(&state.pool, &input).await?;
    tracing::info!(id = property.id, address = %property.address, "Created property");
    Ok((StatusCode::CREATED, Json(DataResponse { data: property })))
}

/// GET /rpc/getProperties
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Property>>>> {
    let properties = PropertyRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: properties }))
}

/// GET /rpc/getPropertyById?id={id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RpcQuery(IdInput { id }): RpcQuery<IdInput>,
) -> AppResult<Json<DataResponse<Property>>> {
    let property = PropertyRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| {
            tracing::debug!(id, "Property not found");
            AppError::not_found(ENTITY, id)
        })?;
    Ok(Json(DataResponse { data: property }))
}

/// POST /rpc/updateProperty
pub async fn update(
    State(state): State<AppState>,
    RpcJson(input): RpcJson<UpdateProperty>,
) -> AppResult<Json<DataResponse<Property>>> {
    input.validate()?;
    let id = input.id;
    let property = PropertyRepo::update(&state.pool, &input)
        .await?
        .ok_or_else(|| {
            tracing::debug!(id, "Property not found for update");
            AppError::not_found(ENTITY, id)
        })?;
    tracing::info!(id, "Updated property");
    Ok(Json(DataResponse { data: property }))
}

/// POST /rpc/deleteProperty
///
/// Reports whether a row was actually removed.
pub async fn delete(
    State(state): State<AppState>,
    RpcJson(IdInput { id }): RpcJson<IdInput>,
) -> AppResult<Json<DataResponse<DeleteOutcome>>> {
    let success = PropertyRepo::delete(&state.pool, id).await?;
    tracing::info!(id, success, "Deleted property");
    Ok(Json(DataResponse {
        data: DeleteOutcome { success },
    }))
}
