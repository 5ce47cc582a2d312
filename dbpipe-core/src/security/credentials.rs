//! Password container with automatic memory zeroing.
//!
//! # Security
//! - The secret is stored in a `Zeroizing<String>` and cleared on drop
//! - `Debug` prints a mask instead of the value

use serde::{Deserialize, Deserializer};
use zeroize::Zeroizing;

/// A database password that is zeroed when dropped.
///
/// # Example
///
/// ```rust
/// use dbpipe_core::security::Password;
///
/// let password = Password::new("secret");
/// assert_eq!(password.expose(), "secret");
/// assert_eq!(format!("{:?}", password), "Password(****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Password(Zeroizing<String>);

impl Password {
    /// Wraps a password in a zeroing container.
    pub fn new(password: impl Into<String>) -> Self {
        Self(Zeroizing::new(password.into()))
    }

    /// Returns the plain password for rendering into a client command.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(****)")
    }
}

impl<'de> Deserialize<'de> for Password {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self::new)
    }
}
