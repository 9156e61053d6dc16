//! User repository contract and SQLite implementation.
//!
//! SQL stays inside this boundary; callers see only `User` values and
//! `UserError` outcomes. Identifiers are stored in canonical text form.

use crate::core::error::UserError;
use crate::models::user::User;
use async_trait::async_trait;
use sqlx::SqlitePool;
use uuid::Uuid;

const USER_SELECT_SQL: &str = "SELECT id, name, email FROM users";

/// Storage abstraction over the `users` table.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Every persisted record, order unspecified.
    async fn find_all(&self) -> Result<Vec<User>, UserError>;

    /// `Ok(None)` for a well-formed but absent id, never an error.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, UserError>;

    async fn exists_by_id(&self, id: Uuid) -> Result<bool, UserError>;

    /// Insert-or-update. An unset id is assigned here, exactly once;
    /// a set id overwrites that record's fields. Returns the stored
    /// representation with the id populated.
    async fn save(&self, user: &User) -> Result<User, UserError>;

    /// Removes the record if present; no-op if absent.
    async fn delete_by_id(&self, id: Uuid) -> Result<(), UserError>;
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: String,
    name: String,
    email: String,
}

impl TryFrom<UserRow> for User {
    type Error = UserError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&row.id).map_err(|_| {
            UserError::InvalidRow(format!("invalid uuid `{}` in users.id", row.id))
        })?;

        Ok(User {
            id: Some(id),
            name: row.name,
            email: row.email,
        })
    }
}

/// SQLite-backed user repository.
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, UserError> {
        let rows = sqlx::query_as::<_, UserRow>(USER_SELECT_SQL)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(User::try_from).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, UserError> {
        let row = sqlx::query_as::<_, UserRow>(&format!("{USER_SELECT_SQL} WHERE id = ?1"))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(User::try_from).transpose()
    }

    async fn exists_by_id(&self, id: Uuid) -> Result<bool, UserError> {
        let exists = sqlx::query_scalar::<_, i64>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE id = ?1)",
        )
        .bind(id.to_string())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists != 0)
    }

    async fn save(&self, user: &User) -> Result<User, UserError> {
        let id = user.id.unwrap_or_else(Uuid::new_v4);

        sqlx::query(
            "INSERT INTO users (id, name, email) VALUES (?1, ?2, ?3)
             ON CONFLICT(id) DO UPDATE SET name = excluded.name, email = excluded.email",
        )
        .bind(id.to_string())
        .bind(user.name.as_str())
        .bind(user.email.as_str())
        .execute(&self.pool)
        .await?;

        Ok(User {
            id: Some(id),
            name: user.name.clone(),
            email: user.email.clone(),
        })
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), UserError> {
        sqlx::query("DELETE FROM users WHERE id = ?1")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn memory_repo() -> SqliteUserRepository {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory pool");
        db::init_schema(&pool).await.expect("schema");
        SqliteUserRepository::new(pool)
    }

    #[tokio::test]
    async fn test_save_assigns_id_on_first_persist() {
        let repo = memory_repo().await;

        let stored = repo.save(&User::new("John Doe", "john@example.com")).await.unwrap();

        assert!(stored.id.is_some());
        assert_eq!(stored.name, "John Doe");
        assert_eq!(stored.email, "john@example.com");
    }

    #[tokio::test]
    async fn test_save_with_set_id_overwrites_fields() {
        let repo = memory_repo().await;

        let stored = repo.save(&User::new("John Doe", "john@example.com")).await.unwrap();

        let mut changed = stored.clone();
        changed.name = "John D.".to_string();
        changed.email = "jd@example.com".to_string();
        let updated = repo.save(&changed).await.unwrap();

        assert_eq!(updated.id, stored.id);
        assert_eq!(repo.find_all().await.unwrap().len(), 1);

        let loaded = repo.find_by_id(stored.id.unwrap()).await.unwrap().unwrap();
        assert_eq!(loaded.name, "John D.");
        assert_eq!(loaded.email, "jd@example.com");
    }

    #[tokio::test]
    async fn test_find_by_id_absent_returns_none() {
        let repo = memory_repo().await;

        let found = repo.find_by_id(Uuid::new_v4()).await.unwrap();

        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_exists_by_id() {
        let repo = memory_repo().await;

        let stored = repo.save(&User::new("Jane Smith", "jane@example.com")).await.unwrap();

        assert!(repo.exists_by_id(stored.id.unwrap()).await.unwrap());
        assert!(!repo.exists_by_id(Uuid::new_v4()).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_by_id_absent_is_noop() {
        let repo = memory_repo().await;

        repo.delete_by_id(Uuid::new_v4()).await.unwrap();

        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_by_id_removes_record() {
        let repo = memory_repo().await;

        let stored = repo.save(&User::new("Bob Johnson", "bob@example.com")).await.unwrap();
        repo.delete_by_id(stored.id.unwrap()).await.unwrap();

        assert!(repo.find_by_id(stored.id.unwrap()).await.unwrap().is_none());
    }
}
