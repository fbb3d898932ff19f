//! Membership index
//!
//! Owns the derived membership relations: `member_of`, `manager_of`,
//! `member_index`, and each organization's ordered member list. The list
//! and the position map are the two halves of the swap-remove pattern and
//! are only ever mutated together.
//!
//! The mutating primitives are crate-private: every external mutation goes
//! through [`crate::MembershipService`], which authorizes it first.

use cadre_core::IdentityId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Derived membership relations for all organizations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipIndex {
    /// identity -> the organization it is a member of
    member_of: HashMap<IdentityId, IdentityId>,
    /// identity -> the organization it is a manager of
    manager_of: HashMap<IdentityId, IdentityId>,
    /// identity -> position in its organization's member list
    member_index: HashMap<IdentityId, usize>,
    /// organization -> ordered member list
    members: HashMap<IdentityId, Vec<IdentityId>>,
}

impl MembershipIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// The organization an identity is a member of, if any.
    pub fn member_of(&self, identity: &IdentityId) -> Option<IdentityId> {
        self.member_of.get(identity).copied()
    }

    /// The organization an identity is a manager of, if any.
    pub fn manager_of(&self, identity: &IdentityId) -> Option<IdentityId> {
        self.manager_of.get(identity).copied()
    }

    /// The identity's position in its organization's member list; 0 when
    /// the identity belongs to no organization.
    pub fn index_of(&self, identity: &IdentityId) -> usize {
        self.member_index.get(identity).copied().unwrap_or(0)
    }

    /// The ordered member list of an organization.
    ///
    /// Removal does not preserve relative order; the list is meaningful
    /// only as "contains exactly the current members", plus the positions
    /// reported by [`Self::index_of`].
    pub fn members(&self, organization: &IdentityId) -> &[IdentityId] {
        self.members
            .get(organization)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether an identity is a member of the given organization.
    pub fn is_member_of(&self, identity: &IdentityId, organization: &IdentityId) -> bool {
        self.member_of.get(identity) == Some(organization)
    }

    /// Whether an identity is a manager of the given organization.
    pub fn is_manager_of(&self, identity: &IdentityId, organization: &IdentityId) -> bool {
        self.manager_of.get(identity) == Some(organization)
    }

    /// Append an identity to an organization's member list.
    ///
    /// Caller must have validated that the identity belongs to no
    /// organization.
    pub(crate) fn append_member(&mut self, organization: IdentityId, identity: IdentityId) {
        let list = self.members.entry(organization).or_default();
        list.push(identity);
        self.member_index.insert(identity, list.len() - 1);
        self.member_of.insert(identity, organization);
    }

    /// Remove an identity from an organization's member list by swap-remove:
    /// the last member takes the removed member's position, then the list
    /// shrinks by one.
    ///
    /// Caller must have validated that the identity is a member of the
    /// organization; an unknown identity is a no-op.
    pub(crate) fn remove_member(&mut self, organization: &IdentityId, identity: &IdentityId) {
        let Some(position) = self.member_index.remove(identity) else {
            return;
        };
        self.member_of.remove(identity);

        if let Some(list) = self.members.get_mut(organization) {
            if position < list.len() {
                list.swap_remove(position);
                if let Some(moved) = list.get(position) {
                    self.member_index.insert(*moved, position);
                }
            }
        }
    }

    /// Record an identity as a manager of an organization.
    pub(crate) fn set_manager(&mut self, organization: IdentityId, identity: IdentityId) {
        self.manager_of.insert(identity, organization);
    }

    /// Clear an identity's manager post, if any.
    pub(crate) fn clear_manager(&mut self, identity: &IdentityId) {
        self.manager_of.remove(identity);
    }

    /// Remove an organization and every relation its members hold to it.
    pub(crate) fn remove_organization(&mut self, organization: &IdentityId) {
        if let Some(list) = self.members.remove(organization) {
            for member in list {
                self.member_of.remove(&member);
                self.member_index.remove(&member);
                if self.manager_of.get(&member) == Some(organization) {
                    self.manager_of.remove(&member);
                }
            }
        }
    }
}
