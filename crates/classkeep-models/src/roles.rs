//! Role tags recognized by the access-control engine.
//!
//! Roles are a closed set. Anything outside it stays a raw string at the
//! boundary and is never mapped onto one of these variants.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role tags as stored by the user directory.
pub mod tags {
    pub const ADMIN: &str = "admin";
    pub const MANAGER: &str = "manager";
    pub const TEACHER: &str = "teacher";
    pub const VOLUNTEER: &str = "volunteer";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full access, bypasses the grant list.
    Admin,
    /// Allowed by default except for restricted groups.
    Manager,
    /// Explicit grants, with curated defaults when none are stored.
    Teacher,
    /// Explicit grants only.
    Volunteer,
}

impl Role {
    /// Every recognized role.
    pub const ALL: [Role; 4] = [Role::Admin, Role::Manager, Role::Teacher, Role::Volunteer];

    /// Parse a stored role tag. Matching is exact; `"Admin"` is not `admin`.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            tags::ADMIN => Some(Role::Admin),
            tags::MANAGER => Some(Role::Manager),
            tags::TEACHER => Some(Role::Teacher),
            tags::VOLUNTEER => Some(Role::Volunteer),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => tags::ADMIN,
            Role::Manager => tags::MANAGER,
            Role::Teacher => tags::TEACHER,
            Role::Volunteer => tags::VOLUNTEER,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Manager => "Manager",
            Role::Teacher => "Teacher",
            Role::Volunteer => "Volunteer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a role tag is not one of the four recognized values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl std::error::Error for UnknownRole {}

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown role '{}', expected one of: admin, manager, teacher, volunteer",
            self.0
        )
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::parse(s).ok_or_else(|| UnknownRole(s.to_string()))
    }
}
