//! In-memory member store for tests/dev.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;

use buildup_core::{DomainError, DomainResult, MemberId};
use buildup_members::{Member, MemberStore, NewMember};

/// In-memory store keyed by email; enforces the same uniqueness rule the
/// persistent schema does.
#[derive(Debug, Default)]
pub struct InMemoryMemberStore {
    inner: RwLock<HashMap<String, Member>>,
}

impl InMemoryMemberStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MemberStore for InMemoryMemberStore {
    async fn insert(&self, new: NewMember) -> DomainResult<Member> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| DomainError::storage("member store lock poisoned"))?;

        if map.contains_key(&new.email) {
            return Err(DomainError::conflict("Email already registered"));
        }

        let member = Member {
            id: MemberId::new(),
            email: new.email.clone(),
            password_hash: new.password_hash,
            name: new.name,
            created_at: Utc::now(),
        };
        map.insert(new.email, member.clone());
        Ok(member)
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Member>> {
        let map = self
            .inner
            .read()
            .map_err(|_| DomainError::storage("member store lock poisoned"))?;
        Ok(map.get(email).cloned())
    }
}
