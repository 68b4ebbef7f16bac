//! Storage port for member records.

use async_trait::async_trait;

use buildup_core::DomainResult;

use crate::member::{Member, NewMember};

/// Persistence capability the registration service is constructed with.
///
/// `insert` assigns the identifier and creation timestamp and returns the
/// persisted record. An email uniqueness violation must surface as
/// `DomainError::Conflict`: the backing store's unique constraint is the
/// authoritative duplicate guard, the service-level lookup only a fast path.
#[async_trait]
pub trait MemberStore: Send + Sync {
    async fn insert(&self, new: NewMember) -> DomainResult<Member>;

    /// Exact-match lookup. `Ok(None)` when no member has this email.
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Member>>;
}
