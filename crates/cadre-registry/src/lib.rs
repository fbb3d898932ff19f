//! Cadre Registry - Identity Records
//!
//! The identity registry owns the mapping from [`IdentityId`] to
//! [`UserRecord`] (role plus profile reference). It is a leaf component:
//! membership relations are layered on top by `cadre-membership`, which
//! consults this crate only for role preconditions.
//!
//! Caller authentication is a boundary concern; the registry assumes the
//! identity passed to each operation is the authenticated caller where the
//! operation is self-service (`register`, `set_profile`).

pub mod error;
pub mod registry;

pub use cadre_core::{IdentityId, ProfileRef, Role};
pub use error::RegistryError;
pub use registry::{IdentityRegistry, UserRecord};
