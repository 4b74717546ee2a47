//! Shared database client and User resource services for workspace apps.
//!
//! The process constructs one [`Db`] at startup, puts it in [`AppState`],
//! and every route reaches the database through that handle.

pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use client::Db;
pub use config::AppConfig;
pub use error::{AppError, ConfigError};
pub use response::{success_many, success_one, success_one_ok};
pub use routes::{common_routes, user_routes};
pub use service::{NewUser, User, UserService};
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_schema};
