pub mod client;
pub mod client_interest;
pub mod health;
pub mod property;

use axum::Router;

use crate::state::AppState;

/// Build the `/rpc` procedure tree.
///
/// Queries are mounted as `GET`, mutations as `POST`; calling a procedure
/// with the other method yields 405.
///
/// ```text
/// GET  /healthcheck                 liveness, no store access
///
/// POST /createProperty              create
/// GET  /getProperties               list
/// GET  /getPropertyById?id=         get_by_id
/// POST /updateProperty              update
/// POST /deleteProperty              delete
///
/// POST /createClient                create
/// GET  /getClients                  list
/// GET  /getClientById?id=           get_by_id
/// POST /updateClient                update
/// POST /deleteClient                delete
///
/// POST /createClientInterest        create
/// GET  /getClientInterests          list
/// POST /updateClientInterest        update
/// POST /deleteClientInterest        delete
/// ```
pub fn rpc_routes() -> Router<AppState> {
    Router::new()
        .merge(health::rpc_router())
        .merge(property::router())
        .merge(client::router())
        .merge(client_interest::router())
}
