//! Procedure routes for client interests.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::client_interest;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/createClientInterest", post(client_interest::create))
        .route("/getClientInterests", get(client_interest::list))
        .route("/updateClientInterest", post(client_interest::update))
        .route("/deleteClientInterest", post(client_interest::delete))
}
