//! Identity registry
//!
//! In-memory store mapping identities to user records. The registry is an
//! explicit owned object rather than ambient state so the membership layer
//! can be tested against it in isolation.

use crate::error::RegistryError;
use cadre_core::{IdentityId, ProfileRef, Role};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One record per registered identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Role fixed at first registration
    pub role: Role,
    /// Opaque reference to externally stored profile content
    pub profile: ProfileRef,
}

/// The identity registry: identity -> user record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityRegistry {
    records: HashMap<IdentityId, UserRecord>,
}

impl IdentityRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an identity, or update its profile reference.
    ///
    /// The role is fixed at first registration: re-registering with the
    /// same role updates only the profile reference, re-registering with a
    /// different role fails with [`RegistryError::RoleImmutable`] and
    /// changes nothing. `Role::None` is not registrable; it is reachable
    /// only through organization deletion.
    pub fn register(
        &mut self,
        identity: IdentityId,
        role: Role,
        profile: ProfileRef,
    ) -> Result<(), RegistryError> {
        if !role.is_assigned() {
            return Err(RegistryError::UnassignableRole { role });
        }

        if let Some(record) = self.records.get_mut(&identity) {
            if record.role != role {
                return Err(RegistryError::role_immutable(identity, record.role, role));
            }
            record.profile = profile;
            tracing::debug!(identity = %identity, "profile reference updated");
            return Ok(());
        }

        self.records.insert(identity, UserRecord { role, profile });
        tracing::debug!(identity = %identity, role = %role, "identity registered");
        Ok(())
    }

    /// Look up an identity's record.
    pub fn get(&self, identity: &IdentityId) -> Option<&UserRecord> {
        self.records.get(identity)
    }

    /// The role an identity holds; `Role::None` when unregistered.
    pub fn role_of(&self, identity: &IdentityId) -> Role {
        self.records
            .get(identity)
            .map(|record| record.role)
            .unwrap_or_default()
    }

    /// The profile reference an identity registered, if any.
    pub fn profile_of(&self, identity: &IdentityId) -> Option<&ProfileRef> {
        self.records.get(identity).map(|record| &record.profile)
    }

    /// Replace an identity's profile reference.
    pub fn set_profile(
        &mut self,
        identity: IdentityId,
        profile: ProfileRef,
    ) -> Result<(), RegistryError> {
        let record = self
            .records
            .get_mut(&identity)
            .ok_or(RegistryError::NotRegistered { identity })?;
        record.profile = profile;
        Ok(())
    }

    /// Whether an identity has a record.
    pub fn is_registered(&self, identity: &IdentityId) -> bool {
        self.records.contains_key(identity)
    }

    /// Remove an identity's record entirely.
    ///
    /// Used by the organization deletion cascade; afterwards `role_of`
    /// reports `Role::None` and `profile_of` reports nothing.
    pub fn clear(&mut self, identity: &IdentityId) {
        self.records.remove(identity);
    }
}
