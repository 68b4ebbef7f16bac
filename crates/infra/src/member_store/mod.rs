//! Member store implementations.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryMemberStore;
pub use postgres::{run_migrations, PostgresMemberStore};
