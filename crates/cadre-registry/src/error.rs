//! Registry error types

use cadre_core::{IdentityId, Role};
use thiserror::Error;

/// Errors from identity registry operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The requested role cannot be registered directly.
    #[error("role {role} cannot be registered")]
    UnassignableRole {
        /// The rejected role
        role: Role,
    },

    /// The identity already holds a different role.
    #[error("identity {identity} already holds role {current}, cannot re-register as {requested}")]
    RoleImmutable {
        /// The identity attempting to re-register
        identity: IdentityId,
        /// The role fixed at first registration
        current: Role,
        /// The role the re-registration asked for
        requested: Role,
    },

    /// The identity has no record in the registry.
    #[error("identity {identity} is not registered")]
    NotRegistered {
        /// The unknown identity
        identity: IdentityId,
    },
}

impl RegistryError {
    /// Create a not registered error.
    pub fn not_registered(identity: IdentityId) -> Self {
        Self::NotRegistered { identity }
    }

    /// Create a role immutable error.
    pub fn role_immutable(identity: IdentityId, current: Role, requested: Role) -> Self {
        Self::RoleImmutable {
            identity,
            current,
            requested,
        }
    }
}
