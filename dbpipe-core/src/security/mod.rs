//! Credential handling and connection URL parsing.
//!
//! - `credentials`: password container with automatic memory zeroing
//! - `connection`: builds descriptors from connection URLs
//!
//! Passwords only ever leave these types through [`Password::expose`],
//! which the command builders call when rendering the client invocation.

mod connection;
mod credentials;

pub use connection::parse_database_url;
pub use credentials::Password;
