//! `buildup-members` — the member entity, registration service, and the
//! storage port the service depends on.

pub mod member;
pub mod password;
pub mod registration;
pub mod store;

pub use member::{Member, NewMember, SignupRequest};
pub use password::{HashingParams, PasswordHasher};
pub use registration::RegistrationService;
pub use store::MemberStore;
