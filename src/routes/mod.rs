pub mod common;
pub mod users;

pub use common::common_routes;
pub use users::user_routes;
