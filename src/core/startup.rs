use crate::service::user_service::UserService;
use anyhow::Result;
use tracing::{debug, info};

/// Records loaded at boot when `database.seed_sample_data` is set.
const SAMPLE_USERS: [(&str, &str); 3] = [
    ("John Doe", "john.doe@example.com"),
    ("Jane Smith", "jane.smith@example.com"),
    ("Bob Johnson", "bob.johnson@example.com"),
];

/// Populate an empty store with sample users. Returns how many were
/// created.
///
/// The store is durable, so a non-empty table means a previous run
/// already seeded it; re-seeding would insert duplicates under fresh ids.
pub async fn seed_sample_users(users: &UserService) -> Result<usize> {
    if !users.get_all_users().await?.is_empty() {
        debug!("Store already populated, skipping sample data");
        return Ok(0);
    }

    for (name, email) in SAMPLE_USERS {
        let user = users.create_user(name, email).await?;
        info!(user_id = ?user.id, name = %user.name, "Sample user created");
    }

    Ok(SAMPLE_USERS.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::repo::user_repo::{SqliteUserRepository, UserRepository};
    use sqlx::sqlite::SqlitePoolOptions;
    use std::sync::Arc;

    async fn memory_service() -> UserService {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory pool");
        db::init_schema(&pool).await.expect("schema");

        let repo: Arc<dyn UserRepository> = Arc::new(SqliteUserRepository::new(pool));
        UserService::new(repo)
    }

    #[tokio::test]
    async fn test_seed_populates_empty_store_once() {
        let service = memory_service().await;

        assert_eq!(seed_sample_users(&service).await.unwrap(), 3);
        assert_eq!(service.get_all_users().await.unwrap().len(), 3);

        // Second run is a no-op
        assert_eq!(seed_sample_users(&service).await.unwrap(), 0);
        assert_eq!(service.get_all_users().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_seed_skips_non_empty_store() {
        let service = memory_service().await;
        service.create_user("Existing", "existing@example.com").await.unwrap();

        assert_eq!(seed_sample_users(&service).await.unwrap(), 0);
        assert_eq!(service.get_all_users().await.unwrap().len(), 1);
    }
}
