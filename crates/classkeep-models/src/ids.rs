//! Strongly-typed identifier newtypes for catalog entries.
//!
//! Permission and group ids are validated strings. Keeping them apart at the
//! type level prevents passing a `GroupId` where a `PermissionId` is expected,
//! and validation rejects malformed ids when a catalog is built instead of
//! letting them resolve to "unknown, deny" later.
//!
//! # Example
//!
//! ```ignore
//! use classkeep_models::ids::{GroupId, PermissionId};
//!
//! let permission: PermissionId = "students.edit".parse()?;
//! let group = GroupId::new("students")?;
//!
//! // Invalid ids fail to parse
//! assert!("Students Edit".parse::<PermissionId>().is_err());
//! ```

use classkeep_core::CatalogError;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Longest accepted identifier, in bytes.
pub const MAX_ID_LEN: usize = 128;

/// Error type for identifier parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The identifier is empty.
    Empty { kind: &'static str },
    /// The identifier exceeds [`MAX_ID_LEN`].
    TooLong { kind: &'static str, len: usize },
    /// The identifier contains a character outside `[a-z0-9._-]`.
    InvalidCharacter {
        kind: &'static str,
        value: String,
        character: char,
    },
}

impl std::error::Error for IdError {}

impl fmt::Display for IdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { kind } => write!(f, "{} id cannot be empty", kind),
            Self::TooLong { kind, len } => write!(
                f,
                "{} id is {} bytes long, maximum is {}",
                kind, len, MAX_ID_LEN
            ),
            Self::InvalidCharacter {
                kind,
                value,
                character,
            } => write!(
                f,
                "{} id '{}' contains invalid character {:?}",
                kind, value, character
            ),
        }
    }
}

impl From<IdError> for CatalogError {
    fn from(err: IdError) -> Self {
        let (kind, value) = match &err {
            IdError::Empty { kind } => (*kind, String::new()),
            IdError::TooLong { kind, .. } => (*kind, String::new()),
            IdError::InvalidCharacter { kind, value, .. } => (*kind, value.clone()),
        };
        CatalogError::InvalidId {
            kind,
            value,
            reason: err.to_string(),
        }
    }
}

fn validate_id(kind: &'static str, value: &str) -> Result<(), IdError> {
    if value.is_empty() {
        return Err(IdError::Empty { kind });
    }
    if value.len() > MAX_ID_LEN {
        return Err(IdError::TooLong {
            kind,
            len: value.len(),
        });
    }
    if let Some(character) = value
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '.' | '-' | '_')))
    {
        return Err(IdError::InvalidCharacter {
            kind,
            value: value.to_string(),
            character,
        });
    }
    Ok(())
}

/// Macro to define a validated string identifier newtype.
///
/// Generates parsing, display, serde and borrowing impls so the ids can be
/// used as map keys and looked up with a plain `&str`.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Human-readable kind used in error messages.
            pub const KIND: &'static str = $kind;

            /// Create an id from a string, validating it.
            pub fn new(value: impl Into<String>) -> Result<Self, IdError> {
                let value = value.into();
                validate_id($kind, &value)?;
                Ok(Self(value))
            }

            /// Create an id without validation.
            ///
            /// Intended for compile-time constants that are known to be valid.
            /// Anything read from outside the process goes through [`Self::new`].
            #[inline]
            pub fn new_unchecked(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Check whether a raw string would be accepted by [`Self::new`].
            pub fn is_valid(value: &str) -> bool {
                validate_id($kind, value).is_ok()
            }

            /// Get the id as a string slice.
            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume self and return the inner String.
            #[inline]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = IdError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = IdError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> String {
                id.0
            }
        }

        impl AsRef<str> for $name {
            #[inline]
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl Borrow<str> for $name {
            #[inline]
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

define_id!(
    /// Identifier of a single permission, conventionally `"<group>.<action>"`.
    PermissionId,
    "permission"
);

define_id!(
    /// Identifier of a permission group (functional area).
    GroupId,
    "group"
);
