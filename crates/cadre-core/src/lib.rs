//! Cadre Core - Shared Data Model
//!
//! Fundamental types used across the Cadre membership registry:
//!
//! - [`IdentityId`] - opaque identifier for a registered identity
//! - [`Role`] - the role an identity holds (none, regular, organization)
//! - [`ProfileRef`] - opaque reference to externally stored profile content
//!
//! This crate is a leaf: it defines data, not behavior. Registry and
//! membership logic live in `cadre-registry` and `cadre-membership`.

pub mod identifiers;
pub mod profile;
pub mod role;

pub use identifiers::IdentityId;
pub use profile::ProfileRef;
pub use role::{Role, RoleCodeError};
