//! Alias resolution seam.

use crate::models::Database;

/// Read-only source of database descriptors and process-wide defaults.
///
/// Implementations must not change while commands are being built; builders
/// may be called from any number of threads against the same catalog.
pub trait DatabaseCatalog: Send + Sync {
    /// Resolves an alias to its descriptor.
    ///
    /// # Errors
    /// Returns `AliasNotFound` if no database is configured under `alias`
    fn database(&self, alias: &str) -> crate::Result<&Database>;

    /// Timezone used by clients when the caller does not pass one.
    fn default_timezone(&self) -> &str;
}

/// A database given either by alias or as a resolved descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbRef<'a> {
    /// Key to look up in a [`DatabaseCatalog`]
    Alias(&'a str),
    /// Descriptor used as-is
    Descriptor(&'a Database),
}

impl<'a> DbRef<'a> {
    /// Resolves the reference against a catalog.
    ///
    /// # Errors
    /// Returns `AliasNotFound` if an alias does not resolve
    pub fn resolve<'c>(self, catalog: &'c dyn DatabaseCatalog) -> crate::Result<&'a Database>
    where
        'c: 'a,
    {
        match self {
            DbRef::Alias(alias) => catalog.database(alias),
            DbRef::Descriptor(db) => Ok(db),
        }
    }
}

impl<'a> From<&'a str> for DbRef<'a> {
    fn from(alias: &'a str) -> Self {
        DbRef::Alias(alias)
    }
}

impl<'a> From<&'a String> for DbRef<'a> {
    fn from(alias: &'a String) -> Self {
        DbRef::Alias(alias)
    }
}

impl<'a> From<&'a Database> for DbRef<'a> {
    fn from(db: &'a Database) -> Self {
        DbRef::Descriptor(db)
    }
}
