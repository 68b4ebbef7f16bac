//! `buildup-infra` — storage implementations behind the domain's ports.

pub mod member_store;

pub use member_store::{run_migrations, InMemoryMemberStore, PostgresMemberStore};
