use crate::core::error::UserError;
use crate::schema::context::Context;
use crate::schema::parse_id;
use crate::schema::user::UserObject;
use juniper::graphql_object;

/// Root query type.
pub struct Query;

#[graphql_object(context = Context)]
impl Query {
    /// Every registered user.
    async fn users(context: &Context) -> Result<Vec<UserObject>, UserError> {
        let users = context.users.get_all_users().await?;
        Ok(users.into_iter().map(UserObject::from).collect())
    }

    /// One user by id. Malformed and absent ids both resolve to null.
    async fn user(context: &Context, id: String) -> Result<Option<UserObject>, UserError> {
        let Ok(id) = parse_id(&id) else {
            return Ok(None);
        };

        Ok(context.users.get_user_by_id(id).await?.map(UserObject::from))
    }
}
