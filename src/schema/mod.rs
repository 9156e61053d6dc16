//! GraphQL schema: root types, execution context, and the wire-level
//! `User` object.

pub mod context;
pub mod mutation;
pub mod query;
pub mod user;

pub use context::Context;
pub use mutation::Mutation;
pub use query::Query;
pub use user::UserObject;

use crate::core::error::UserError;
use juniper::{EmptySubscription, RootNode};
use uuid::Uuid;

pub type Schema = RootNode<'static, Query, Mutation, EmptySubscription<Context>>;

pub fn create_schema() -> Schema {
    Schema::new(Query, Mutation, EmptySubscription::new())
}

/// Parse a textual identifier argument.
///
/// The wire contract is the canonical hyphenated UUID form only;
/// `Uuid::parse_str` alone would also accept the simple, braced, and URN
/// forms.
pub(crate) fn parse_id(raw: &str) -> Result<Uuid, UserError> {
    if raw.len() != 36 {
        return Err(UserError::InvalidId);
    }

    Uuid::parse_str(raw).map_err(|_| UserError::InvalidId)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_accepts_canonical_form() {
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn test_parse_id_rejects_simple_form() {
        let simple = Uuid::new_v4().simple().to_string();
        assert!(parse_id(&simple).is_err());
    }

    #[test]
    fn test_parse_id_rejects_braced_and_urn_forms() {
        let id = Uuid::new_v4();
        assert!(parse_id(&format!("{{{id}}}")).is_err());
        assert!(parse_id(&format!("urn:uuid:{id}")).is_err());
    }

    #[test]
    fn test_parse_id_rejects_garbage() {
        assert!(parse_id("").is_err());
        assert!(parse_id("42").is_err());
        assert!(parse_id("not-a-uuid-at-all-but-36-chars-long!").is_err());
    }
}
