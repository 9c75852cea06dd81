//! API endpoint implementations.
//!
//! Each module pairs an async API handle with the request constructors the
//! blocking client reuses.

pub(crate) mod config;
pub(crate) mod public;
pub(crate) mod runs;
pub(crate) mod sessions;
pub(crate) mod users;

pub use config::ConfigApi;
pub use runs::RunsApi;
pub use sessions::SessionsApi;
pub use users::UsersApi;
