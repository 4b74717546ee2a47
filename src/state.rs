//! Shared application state for all routes.

use crate::client::Db;

#[derive(Clone)]
pub struct AppState {
    pub db: Db,
}
