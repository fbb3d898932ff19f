//! Membership error types
//!
//! Every error rejects the whole requested operation; no partial batch
//! state is ever observable.

use cadre_core::{IdentityId, Role};
use std::fmt;
use thiserror::Error;

/// The kind of affiliation an identity already holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affiliation {
    /// Member of an organization
    Member,
    /// Manager of an organization
    Manager,
}

impl fmt::Display for Affiliation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Affiliation::Member => write!(f, "member"),
            Affiliation::Manager => write!(f, "manager"),
        }
    }
}

/// Errors from membership operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MembershipError {
    /// Caller lacks the role or relationship the operation requires.
    #[error("caller {caller} is not authorized to act for an organization")]
    Unauthorized {
        /// The rejected caller
        caller: IdentityId,
    },

    /// Target identity has the wrong role or standing for the requested
    /// relationship.
    #[error("identity {identity} (role {role}) {reason}")]
    InvalidRole {
        /// The target identity
        identity: IdentityId,
        /// The role the target currently holds
        role: Role,
        /// What the target cannot do
        reason: String,
    },

    /// Target is already affiliated elsewhere in a way incompatible with
    /// the request.
    #[error("identity {identity} is already a {affiliation} of organization {organization}")]
    ConflictingAffiliation {
        /// The target identity
        identity: IdentityId,
        /// The affiliation the target already holds
        affiliation: Affiliation,
        /// The organization the target is already affiliated with
        organization: IdentityId,
    },

    /// Target is not a member of the organization the caller acts for.
    #[error("identity {identity} is not a member of organization {organization}")]
    NotMember {
        /// The target identity
        identity: IdentityId,
        /// The organization the caller acts for
        organization: IdentityId,
    },

    /// Target is not a manager of the organization the caller acts for.
    #[error("identity {identity} is not a manager of organization {organization}")]
    NotManager {
        /// The target identity
        identity: IdentityId,
        /// The organization the caller acts for
        organization: IdentityId,
    },
}

impl MembershipError {
    /// Create an unauthorized error.
    pub fn unauthorized(caller: IdentityId) -> Self {
        Self::Unauthorized { caller }
    }

    /// Create an invalid role error.
    pub fn invalid_role(identity: IdentityId, role: Role, reason: impl Into<String>) -> Self {
        Self::InvalidRole {
            identity,
            role,
            reason: reason.into(),
        }
    }

    /// Create a conflicting affiliation error.
    pub fn conflicting(
        identity: IdentityId,
        affiliation: Affiliation,
        organization: IdentityId,
    ) -> Self {
        Self::ConflictingAffiliation {
            identity,
            affiliation,
            organization,
        }
    }

    /// Create a not member error.
    pub fn not_member(identity: IdentityId, organization: IdentityId) -> Self {
        Self::NotMember {
            identity,
            organization,
        }
    }

    /// Create a not manager error.
    pub fn not_manager(identity: IdentityId, organization: IdentityId) -> Self {
        Self::NotManager {
            identity,
            organization,
        }
    }
}
