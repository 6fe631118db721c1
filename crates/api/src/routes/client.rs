//! Procedure routes for clients.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::client;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/createClient", post(client::create))
        .route("/getClients", get(client::list))
        .route("/getClientById", get(client::get_by_id))
        .route("/updateClient", post(client::update))
        .route("/deleteClient", post(client::delete))
}
