//! Configuration types.
//!
//! Responsibilities:
//! - Define the immutable `Config` value object consumed by the client crate.
//! - Group settings by concern (connection, auth, table location).
//!
//! Does NOT handle:
//! - Reading values from the environment or `.env` files (see `loader`).
//! - Any network I/O (see the client crate).

mod auth;
mod connection;
mod table;

pub use auth::AuthConfig;
pub use connection::ConnectionConfig;
pub use table::TableConfig;

/// Fully resolved configuration for one command invocation.
///
/// Built once by [`crate::ConfigLoader::build`] and treated as read-only
/// afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub connection: ConnectionConfig,
    pub auth: AuthConfig,
    pub table: TableConfig,
}
