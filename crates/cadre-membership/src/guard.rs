//! Authorization guard
//!
//! The predicate layer consulted before every mutation. Each check reads
//! registry and index state and returns the error that names the violated
//! precondition; none of them mutate anything.

use crate::error::{Affiliation, MembershipError};
use crate::index::MembershipIndex;
use cadre_core::{IdentityId, Role};
use cadre_registry::IdentityRegistry;

/// Authorization checks for membership operations.
pub struct AuthorizationGuard;

impl AuthorizationGuard {
    /// Require that the caller is itself an organization.
    pub fn require_organization(
        registry: &IdentityRegistry,
        caller: &IdentityId,
    ) -> Result<(), MembershipError> {
        if registry.role_of(caller).is_organization() {
            Ok(())
        } else {
            Err(MembershipError::unauthorized(*caller))
        }
    }

    /// Resolve the organization a caller acts for: the caller itself when
    /// it holds the organization role, otherwise the organization the
    /// caller manages.
    pub fn effective_organization(
        registry: &IdentityRegistry,
        index: &MembershipIndex,
        caller: &IdentityId,
    ) -> Result<IdentityId, MembershipError> {
        if registry.role_of(caller).is_organization() {
            return Ok(*caller);
        }
        if let Some(organization) = index.manager_of(caller) {
            return Ok(organization);
        }
        Err(MembershipError::unauthorized(*caller))
    }

    /// Validate that a candidate can be recruited: regular role and not a
    /// member of any organization.
    pub fn validate_recruit(
        registry: &IdentityRegistry,
        index: &MembershipIndex,
        candidate: &IdentityId,
    ) -> Result<(), MembershipError> {
        let role = registry.role_of(candidate);
        if role != Role::Regular {
            return Err(MembershipError::invalid_role(
                *candidate,
                role,
                "cannot join an organization as a member",
            ));
        }
        if let Some(existing) = index.member_of(candidate) {
            return Err(MembershipError::conflicting(
                *candidate,
                Affiliation::Member,
                existing,
            ));
        }
        Ok(())
    }

    /// Validate that a target can be removed: currently a member of the
    /// organization the caller acts for.
    pub fn validate_removal(
        index: &MembershipIndex,
        organization: &IdentityId,
        target: &IdentityId,
    ) -> Result<(), MembershipError> {
        if index.is_member_of(target, organization) {
            Ok(())
        } else {
            Err(MembershipError::not_member(*target, *organization))
        }
    }

    /// Validate that a candidate can be promoted to manager: a current
    /// member of the organization, and not already a manager anywhere.
    pub fn validate_promotion(
        registry: &IdentityRegistry,
        index: &MembershipIndex,
        organization: &IdentityId,
        candidate: &IdentityId,
    ) -> Result<(), MembershipError> {
        if !index.is_member_of(candidate, organization) {
            return Err(MembershipError::invalid_role(
                *candidate,
                registry.role_of(candidate),
                format!("is not a member of organization {organization}"),
            ));
        }
        if let Some(existing) = index.manager_of(candidate) {
            return Err(MembershipError::conflicting(
                *candidate,
                Affiliation::Manager,
                existing,
            ));
        }
        Ok(())
    }

    /// Validate that a target can be demoted: currently a manager of the
    /// organization.
    pub fn validate_demotion(
        index: &MembershipIndex,
        organization: &IdentityId,
        target: &IdentityId,
    ) -> Result<(), MembershipError> {
        if index.is_manager_of(target, organization) {
            Ok(())
        } else {
            Err(MembershipError::not_manager(*target, *organization))
        }
    }
}
