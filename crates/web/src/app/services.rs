//! Service wiring: store selection + registration service construction.

use std::sync::Arc;

use sqlx::PgPool;

use buildup_infra::{run_migrations, InMemoryMemberStore, PostgresMemberStore};
use buildup_members::{MemberStore, RegistrationService};

/// Services shared by all request handlers.
pub struct AppServices {
    pub registration: RegistrationService,
}

/// Build services from the environment.
///
/// `USE_PERSISTENT_STORES=true` selects Postgres (connecting and migrating
/// before serving); anything else falls back to the in-memory store.
pub async fn build_services() -> AppServices {
    let use_persistent = std::env::var("USE_PERSISTENT_STORES")
        .map(|v| v == "true")
        .unwrap_or(false);

    let store: Arc<dyn MemberStore> = if use_persistent {
        Arc::new(build_postgres_store().await)
    } else {
        tracing::warn!("USE_PERSISTENT_STORES not set; using in-memory member store");
        Arc::new(InMemoryMemberStore::new())
    };

    AppServices {
        registration: RegistrationService::new(store),
    }
}

async fn build_postgres_store() -> PostgresMemberStore {
    let database_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set when USE_PERSISTENT_STORES=true");

    let pool = PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to Postgres");

    run_migrations(&pool)
        .await
        .expect("Failed to run member schema migrations");

    tracing::info!("using postgres member store");
    PostgresMemberStore::new(pool)
}
