//! Identity roles
//!
//! Every identity holds exactly one role. The role is fixed at first
//! registration; only organization deletion resets it back to [`Role::None`].

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The role a registered identity holds.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum Role {
    /// Not registered, or torn down by organization deletion.
    #[default]
    None,
    /// An individual identity; may join one organization as a member.
    Regular,
    /// An organization; recruits regular identities as members.
    Organization,
}

/// A role code that does not name a known role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown role code {0}")]
pub struct RoleCodeError(pub u8);

impl Role {
    /// Wire code for [`Role::None`].
    pub const NONE_CODE: u8 = 0;
    /// Wire code for [`Role::Regular`].
    pub const REGULAR_CODE: u8 = 1;
    /// Wire code for [`Role::Organization`].
    pub const ORGANIZATION_CODE: u8 = 2;

    /// Stable numeric code for this role.
    pub fn code(&self) -> u8 {
        match self {
            Role::None => Self::NONE_CODE,
            Role::Regular => Self::REGULAR_CODE,
            Role::Organization => Self::ORGANIZATION_CODE,
        }
    }

    /// Whether this role is assigned (anything but `None`).
    pub fn is_assigned(&self) -> bool {
        !matches!(self, Role::None)
    }

    /// Whether this is the regular (individual) role.
    pub fn is_regular(&self) -> bool {
        matches!(self, Role::Regular)
    }

    /// Whether this is the organization role.
    pub fn is_organization(&self) -> bool {
        matches!(self, Role::Organization)
    }
}

impl TryFrom<u8> for Role {
    type Error = RoleCodeError;

    fn try_from(code: u8) -> Result<Self, RoleCodeError> {
        match code {
            Self::NONE_CODE => Ok(Role::None),
            Self::REGULAR_CODE => Ok(Role::Regular),
            Self::ORGANIZATION_CODE => Ok(Role::Organization),
            other => Err(RoleCodeError(other)),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::None => write!(f, "none"),
            Role::Regular => write!(f, "regular"),
            Role::Organization => write!(f, "organization"),
        }
    }
}
