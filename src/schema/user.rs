use crate::models::user::User;
use juniper::{GraphQLObject, ID};

/// Wire representation of a user record. All fields are nullable in the
/// schema; persisted records always populate all three.
#[derive(Debug, GraphQLObject)]
#[graphql(name = "User", description = "A user account")]
pub struct UserObject {
    /// Storage-assigned identifier.
    pub id: Option<ID>,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl From<User> for UserObject {
    fn from(user: User) -> Self {
        Self {
            id: user.id.map(|id| ID::from(id.to_string())),
            name: Some(user.name),
            email: Some(user.email),
        }
    }
}
