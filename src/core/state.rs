// Application state (AppState)

use crate::core::config::Config;
use crate::repo::user_repo::{SqliteUserRepository, UserRepository};
use crate::schema::{create_schema, Context, Schema};
use crate::service::user_service::UserService;
use sqlx::SqlitePool;
use std::sync::Arc;

/// Shared application state
///
/// Owns the compiled GraphQL schema and the execution context. Wiring is
/// explicit: the context holds the service, the service holds the
/// repository, the repository holds the pool.
#[derive(Clone)]
pub struct AppState {
    /// Compiled GraphQL schema
    pub schema: Arc<Schema>,

    /// Resolver context handed to every execution
    pub context: Context,

    /// Configuration
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config, pool: SqlitePool) -> Self {
        let repo: Arc<dyn UserRepository> = Arc::new(SqliteUserRepository::new(pool));
        let users = Arc::new(UserService::new(repo));

        Self {
            schema: Arc::new(create_schema()),
            context: Context::new(users),
            config: Arc::new(config),
        }
    }
}
