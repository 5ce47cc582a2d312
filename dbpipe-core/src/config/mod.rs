//! Database catalog and configuration.
//!
//! - `catalog`: the read-only lookup the command builders depend on, and
//!   [`DbRef`] for passing either an alias or a descriptor
//! - `file`: [`Config`], the JSON-backed catalog used by the CLI

mod catalog;
mod file;

pub use catalog::{DatabaseCatalog, DbRef};
pub use file::{Config, DEFAULT_TIMEZONE};
