//! Cadre Membership - Membership State Machine
//!
//! This crate implements the membership relationship between organizations
//! and the regular identities they recruit:
//!
//! - [`MembershipIndex`] - the derived relations: which organization an
//!   identity belongs to, which it manages, and at what position it sits in
//!   the organization's member list
//! - [`AuthorizationGuard`] - the predicate layer every mutation consults
//!   before touching state
//! - [`MembershipService`] - the orchestrator owning the identity registry
//!   and the index, exposing the mutating operations
//!
//! # Atomicity
//!
//! Every batch operation validates all of its targets before applying any
//! mutation. A failed call returns a [`MembershipError`] naming the first
//! violated precondition and leaves both the registry and the index exactly
//! as they were. Callers are serialized externally; `&mut self` on every
//! mutating operation is the whole concurrency story.
//!
//! # Example
//!
//! ```
//! use cadre_core::{IdentityId, ProfileRef, Role};
//! use cadre_membership::MembershipService;
//!
//! let mut service = MembershipService::new();
//! let org = IdentityId::new();
//! let member = IdentityId::new();
//!
//! service.register(org, Role::Organization, ProfileRef::new("QmOrg")).unwrap();
//! service.register(member, Role::Regular, ProfileRef::new("QmMember")).unwrap();
//!
//! service.organization_add_members(&org, &[member]).unwrap();
//! assert_eq!(service.member_of(&member), Some(org));
//! ```

pub mod error;
pub mod guard;
pub mod index;
pub mod service;

pub use error::{Affiliation, MembershipError};
pub use guard::AuthorizationGuard;
pub use index::MembershipIndex;
pub use service::{MembershipService, UserProfile};
