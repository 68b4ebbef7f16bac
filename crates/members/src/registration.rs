//! Member registration: validate, enforce uniqueness, hash, persist.

use std::sync::Arc;

use buildup_core::{DomainError, DomainResult};

use crate::member::{Member, NewMember, SignupRequest};
use crate::password::PasswordHasher;
use crate::store::MemberStore;

/// Minimum accepted password length, in characters.
const MIN_PASSWORD_CHARS: usize = 6;

/// The registration use case.
///
/// Collaborators are passed in at construction; the wiring layer decides
/// which store backs it.
pub struct RegistrationService {
    store: Arc<dyn MemberStore>,
    hasher: PasswordHasher,
}

impl RegistrationService {
    pub fn new(store: Arc<dyn MemberStore>) -> Self {
        Self::with_hasher(store, PasswordHasher::default())
    }

    pub fn with_hasher(store: Arc<dyn MemberStore>, hasher: PasswordHasher) -> Self {
        Self { store, hasher }
    }

    /// Register a new member.
    ///
    /// Validation order is fixed: email presence, password length, duplicate
    /// email. One lookup and one insert per successful call; a racing insert
    /// with the same email loses at the store's unique constraint and
    /// surfaces as the same `Conflict`.
    pub async fn register(&self, req: SignupRequest) -> DomainResult<Member> {
        if req.email.trim().is_empty() {
            return Err(DomainError::invalid_input("Email is required"));
        }
        if req.password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(DomainError::invalid_input(
                "Password must be at least 6 characters",
            ));
        }

        if self.store.find_by_email(&req.email).await?.is_some() {
            return Err(DomainError::conflict("Email already registered"));
        }

        let password_hash = self.hasher.hash(&req.password)?;
        let member = self
            .store
            .insert(NewMember {
                email: req.email,
                password_hash,
                name: req.name,
            })
            .await?;

        tracing::info!(member_id = %member.id, "member registered");
        Ok(member)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;

    use argon2::password_hash::{PasswordHash, PasswordVerifier};
    use argon2::Argon2;
    use chrono::Utc;

    use buildup_core::MemberId;

    /// Store double: uniqueness-enforcing row list behind a mutex.
    #[derive(Default)]
    struct StubStore {
        rows: Mutex<Vec<Member>>,
    }

    impl StubStore {
        fn row_count(&self, email: &str) -> usize {
            self.rows
                .lock()
                .unwrap()
                .iter()
                .filter(|m| m.email == email)
                .count()
        }
    }

    #[async_trait::async_trait]
    impl MemberStore for StubStore {
        async fn insert(&self, new: NewMember) -> DomainResult<Member> {
            let mut rows = self.rows.lock().unwrap();
            if rows.iter().any(|m| m.email == new.email) {
                return Err(DomainError::conflict("Email already registered"));
            }

            let member = Member {
                id: MemberId::new(),
                email: new.email,
                password_hash: new.password_hash,
                name: new.name,
                created_at: Utc::now(),
            };
            rows.push(member.clone());
            Ok(member)
        }

        async fn find_by_email(&self, email: &str) -> DomainResult<Option<Member>> {
            let rows = self.rows.lock().unwrap();
            Ok(rows.iter().find(|m| m.email == email).cloned())
        }
    }

    fn service() -> (Arc<StubStore>, RegistrationService) {
        let store = Arc::new(StubStore::default());
        (store.clone(), RegistrationService::new(store))
    }

    fn request(email: &str, password: &str, name: Option<&str>) -> SignupRequest {
        SignupRequest {
            email: email.to_string(),
            password: password.to_string(),
            name: name.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn register_returns_member_with_hashed_password() {
        let (_store, svc) = service();

        let member = svc
            .register(request("a@x.com", "secret1", Some("Alice")))
            .await
            .unwrap();

        assert_eq!(member.email, "a@x.com");
        assert_eq!(member.name.as_deref(), Some("Alice"));
        assert_ne!(member.password_hash, "secret1");

        let parsed = PasswordHash::new(&member.password_hash).unwrap();
        Argon2::default()
            .verify_password(b"secret1", &parsed)
            .unwrap();
    }

    #[tokio::test]
    async fn register_without_name_keeps_name_absent() {
        let (_store, svc) = service();

        let member = svc
            .register(request("a@x.com", "secret1", None))
            .await
            .unwrap();

        assert_eq!(member.name, None);
    }

    #[tokio::test]
    async fn blank_email_is_rejected() {
        let (store, svc) = service();

        for email in ["", "   "] {
            let err = svc
                .register(request(email, "secret1", Some("Bob")))
                .await
                .unwrap_err();
            assert_eq!(err, DomainError::invalid_input("Email is required"));
        }
        assert_eq!(store.rows.lock().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn short_password_is_rejected() {
        let (store, svc) = service();

        let err = svc
            .register(request("b@x.com", "12345", Some("Carl")))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            DomainError::invalid_input("Password must be at least 6 characters")
        );
        assert_eq!(store.rows.lock().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn email_check_runs_before_password_check() {
        let (_store, svc) = service();

        // Both fields invalid: the email failure wins.
        let err = svc.register(request("", "123", None)).await.unwrap_err();
        assert_eq!(err, DomainError::invalid_input("Email is required"));
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected_and_not_inserted_twice() {
        let (store, svc) = service();

        svc.register(request("a@x.com", "secret1", Some("Alice")))
            .await
            .unwrap();

        let err = svc
            .register(request("a@x.com", "other12", Some("Bob")))
            .await
            .unwrap_err();

        assert_eq!(err, DomainError::conflict("Email already registered"));
        assert_eq!(store.row_count("a@x.com"), 1);
    }

    #[tokio::test]
    async fn lookup_after_register_returns_the_persisted_member() {
        let (store, svc) = service();

        let registered = svc
            .register(request("a@x.com", "secret1", Some("Alice")))
            .await
            .unwrap();

        let found = store.find_by_email("a@x.com").await.unwrap().unwrap();
        assert_eq!(found, registered);
    }

    #[tokio::test]
    async fn repeated_passwords_get_distinct_hashes() {
        let (store, svc) = service();

        svc.register(request("a@x.com", "secret1", None))
            .await
            .unwrap();
        svc.register(request("b@x.com", "secret1", None))
            .await
            .unwrap();

        let first = store.find_by_email("a@x.com").await.unwrap().unwrap();
        let second = store.find_by_email("b@x.com").await.unwrap().unwrap();
        assert_ne!(first.password_hash, second.password_hash);
    }
}
