//! Procedure routes for properties.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::property;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/createProperty", post(property::create))
        .route("/getProperties", get(property::list))
        .route("/getPropertyById", get(property::get_by_id))
        .route("/updateProperty", post(property::update))
        .route("/deleteProperty", post(property::delete))
}
