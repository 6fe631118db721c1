/// Handler state: the Postgres pool every procedure hands to its repository.
///
/// `PgPool` is an `Arc` internally, so cloning per request is cheap.
#[derive(Clone)]
pub struct AppState {
    pub pool: realty_db::DbPool,
}
