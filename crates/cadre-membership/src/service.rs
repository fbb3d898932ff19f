//! Membership service
//!
//! The orchestrator owning the identity registry and the membership index.
//! Every mutating operation runs all of its authorization and precondition
//! checks through [`AuthorizationGuard`] before touching either store, so a
//! failed call observably changes nothing even though batches iterate over
//! many targets.

use crate::error::MembershipError;
use crate::guard::AuthorizationGuard;
use crate::index::MembershipIndex;
use cadre_core::{IdentityId, ProfileRef, Role};
use cadre_registry::{IdentityRegistry, RegistryError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Read-only view of an identity: registry record plus member list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// The identity's role; `Role::None` when unregistered or deleted
    pub role: Role,
    /// The identity's profile reference; empty when none is stored
    pub profile: ProfileRef,
    /// The identity's member list; empty unless it is an organization
    pub members: Vec<IdentityId>,
}

/// The membership state machine: registry plus index behind one validated
/// mutation surface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipService {
    registry: IdentityRegistry,
    index: MembershipIndex,
}

impl MembershipService {
    /// Create a service with empty registry and index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a service over an existing registry.
    pub fn with_registry(registry: IdentityRegistry) -> Self {
        Self {
            registry,
            index: MembershipIndex::new(),
        }
    }

    /// Register the caller, or update its profile reference.
    pub fn register(
        &mut self,
        caller: IdentityId,
        role: Role,
        profile: ProfileRef,
    ) -> Result<(), RegistryError> {
        self.registry.register(caller, role, profile)
    }

    /// Replace the caller's profile reference.
    pub fn set_profile(
        &mut self,
        caller: IdentityId,
        profile: ProfileRef,
    ) -> Result<(), RegistryError> {
        self.registry.set_profile(caller, profile)
    }

    /// Full view of an identity: role, profile reference, member list.
    pub fn get_user(&self, identity: &IdentityId) -> UserProfile {
        UserProfile {
            role: self.registry.role_of(identity),
            profile: self
                .registry
                .profile_of(identity)
                .cloned()
                .unwrap_or_default(),
            members: self.index.members(identity).to_vec(),
        }
    }

    /// The organization an identity is a member of, if any.
    pub fn member_of(&self, identity: &IdentityId) -> Option<IdentityId> {
        self.index.member_of(identity)
    }

    /// The organization an identity is a manager of, if any.
    pub fn manager_of(&self, identity: &IdentityId) -> Option<IdentityId> {
        self.index.manager_of(identity)
    }

    /// The identity's position in its organization's member list; 0 when
    /// unaffiliated.
    pub fn member_index(&self, identity: &IdentityId) -> usize {
        self.index.index_of(identity)
    }

    /// Read access to the underlying registry.
    pub fn registry(&self) -> &IdentityRegistry {
        &self.registry
    }

    /// Read access to the underlying index.
    pub fn index(&self) -> &MembershipIndex {
        &self.index
    }

    /// Recruit a batch of regular identities into the caller's
    /// organization.
    ///
    /// The caller may be the organization itself or one of its managers.
    /// Every candidate must hold the regular role and belong to no
    /// organization; if any candidate fails, nothing is applied.
    pub fn organization_add_members(
        &mut self,
        caller: &IdentityId,
        to_add: &[IdentityId],
    ) -> Result<(), MembershipError> {
        let organization =
            AuthorizationGuard::effective_organization(&self.registry, &self.index, caller)?;

        let mut seen = HashSet::new();
        for candidate in to_add {
            AuthorizationGuard::validate_recruit(&self.registry, &self.index, candidate)?;
            if !seen.insert(*candidate) {
                // Same candidate twice in one batch
                return Err(MembershipError::conflicting(
                    *candidate,
                    crate::error::Affiliation::Member,
                    organization,
                ));
            }
        }

        for candidate in to_add {
            self.index.append_member(organization, *candidate);
        }
        tracing::debug!(organization = %organization, added = to_add.len(), "members added");
        Ok(())
    }

    /// Remove a batch of members from the caller's organization.
    ///
    /// The caller may be the organization itself or one of its managers.
    /// Every target must currently be a member of that organization; a
    /// target holding a manager post is demoted as part of removal.
    pub fn organization_remove_members(
        &mut self,
        caller: &IdentityId,
        to_remove: &[IdentityId],
    ) -> Result<(), MembershipError> {
        let organization =
            AuthorizationGuard::effective_organization(&self.registry, &self.index, caller)?;

        let mut seen = HashSet::new();
        for target in to_remove {
            AuthorizationGuard::validate_removal(&self.index, &organization, target)?;
            if !seen.insert(*target) {
                return Err(MembershipError::not_member(*target, organization));
            }
        }

        for target in to_remove {
            if self.index.manager_of(target).is_some() {
                self.index.clear_manager(target);
            }
            self.index.remove_member(&organization, target);
        }
        tracing::debug!(organization = %organization, removed = to_remove.len(), "members removed");
        Ok(())
    }

    /// Promote a batch of the caller's members to managers.
    ///
    /// Reserved to the organization identity itself. Every candidate must
    /// already be a member of the caller and must not hold a manager post
    /// anywhere.
    pub fn organization_add_managers(
        &mut self,
        caller: &IdentityId,
        to_add: &[IdentityId],
    ) -> Result<(), MembershipError> {
        AuthorizationGuard::require_organization(&self.registry, caller)?;

        let mut seen = HashSet::new();
        for candidate in to_add {
            AuthorizationGuard::validate_promotion(&self.registry, &self.index, caller, candidate)?;
            if !seen.insert(*candidate) {
                return Err(MembershipError::conflicting(
                    *candidate,
                    crate::error::Affiliation::Manager,
                    *caller,
                ));
            }
        }

        for candidate in to_add {
            self.index.set_manager(*caller, *candidate);
        }
        tracing::debug!(organization = %caller, promoted = to_add.len(), "managers added");
        Ok(())
    }

    /// Demote a batch of the caller's managers.
    ///
    /// Reserved to the organization identity itself. Every target must
    /// currently be a manager of the caller; demotion leaves membership
    /// intact.
    pub fn organization_remove_managers(
        &mut self,
        caller: &IdentityId,
        to_remove: &[IdentityId],
    ) -> Result<(), MembershipError> {
        AuthorizationGuard::require_organization(&self.registry, caller)?;

        let mut seen = HashSet::new();
        for target in to_remove {
            AuthorizationGuard::validate_demotion(&self.index, caller, target)?;
            if !seen.insert(*target) {
                return Err(MembershipError::not_manager(*target, *caller));
            }
        }

        for target in to_remove {
            self.index.clear_manager(target);
        }
        tracing::debug!(organization = %caller, demoted = to_remove.len(), "managers removed");
        Ok(())
    }

    /// Delete the caller's organization.
    ///
    /// Reserved to the organization identity itself; managers cannot
    /// delete. Clears every current member's membership, position, and
    /// manager post, then clears the caller's own record, leaving its role
    /// at `Role::None`.
    pub fn delete_organization(&mut self, caller: &IdentityId) -> Result<(), MembershipError> {
        AuthorizationGuard::require_organization(&self.registry, caller)?;

        let member_count = self.index.members(caller).len();
        self.index.remove_organization(caller);
        self.registry.clear(caller);
        tracing::info!(organization = %caller, members = member_count, "organization deleted");
        Ok(())
    }
}
