pub mod users;

pub use users::{NewUser, User, UserService};
