//! Postgres-backed member store.
//!
//! Each call is a scoped unit of work: a connection is acquired from the
//! pool, the statement runs, and the connection is released on return. The
//! `members.email` unique constraint is the authoritative duplicate guard.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use buildup_core::{DomainError, DomainResult, MemberId};
use buildup_members::{Member, MemberStore, NewMember};

pub struct PostgresMemberStore {
    pool: PgPool,
}

impl PostgresMemberStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Run the embedded schema migrations.
pub async fn run_migrations(pool: &PgPool) -> DomainResult<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| DomainError::storage(format!("migration failed: {e}")))
}

#[async_trait]
impl MemberStore for PostgresMemberStore {
    async fn insert(&self, new: NewMember) -> DomainResult<Member> {
        let id = MemberId::new();

        let row = sqlx::query(
            r#"
            INSERT INTO members (id, email, password_hash, name)
            VALUES ($1, $2, $3, $4)
            RETURNING id, email, password_hash, name, created_at
            "#,
        )
        .bind(id.as_uuid())
        .bind(&new.email)
        .bind(&new.password_hash)
        .bind(&new.name)
        .fetch_one(&self.pool)
        .await
        .map_err(insert_error)?;

        member_from_row(&row)
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Member>> {
        let row = sqlx::query(
            r#"
            SELECT id, email, password_hash, name, created_at
            FROM members
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("member lookup failed: {e}")))?;

        match row {
            Some(row) => Ok(Some(member_from_row(&row)?)),
            None => Ok(None),
        }
    }
}

/// Map a `members` row to the domain entity.
fn member_from_row(row: &PgRow) -> DomainResult<Member> {
    Ok(Member {
        id: MemberId::from_uuid(column(row, "id")?),
        email: column(row, "email")?,
        password_hash: column(row, "password_hash")?,
        name: column(row, "name")?,
        created_at: column(row, "created_at")?,
    })
}

fn column<'r, T>(row: &'r PgRow, name: &str) -> DomainResult<T>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name)
        .map_err(|e| DomainError::storage(format!("bad members row ({name}): {e}")))
}

/// A racing insert loses at the unique constraint; report it the same way
/// the service-level duplicate check does.
fn insert_error(err: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db) = &err {
        if db.is_unique_violation() {
            return DomainError::conflict("Email already registered");
        }
    }
    DomainError::storage(format!("member insert failed: {err}"))
}
