use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use buildup_core::MemberId;

/// A registered member.
///
/// Created only through [`crate::RegistrationService::register`]; never
/// updated or deleted afterwards. No two members share an email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub email: String,
    /// PHC-format hash. The raw password is never stored.
    pub password_hash: String,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Insert carrier: a member minus the server-assigned fields.
///
/// The store assigns `id` and `created_at` when persisting it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    pub email: String,
    pub password_hash: String,
    pub name: Option<String>,
}

/// Raw signup form input. Transient; discarded after the register call.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: Option<String>,
}
