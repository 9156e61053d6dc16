pub mod fallback;
pub mod graphql;
pub mod health;
