use crate::core::error::UserError;
use crate::schema::context::Context;
use crate::schema::parse_id;
use crate::schema::user::UserObject;
use juniper::graphql_object;

/// Root mutation type.
pub struct Mutation;

#[graphql_object(context = Context)]
impl Mutation {
    /// Create a user; the store assigns the id.
    async fn create_user(
        context: &Context,
        name: String,
        email: String,
    ) -> Result<Option<UserObject>, UserError> {
        let user = context.users.create_user(name, email).await?;
        Ok(Some(user.into()))
    }

    /// Overwrite name and email of an existing user.
    ///
    /// A malformed id is a field error here, unlike `user`/`deleteUser`.
    async fn update_user(
        context: &Context,
        id: String,
        name: String,
        email: String,
    ) -> Result<Option<UserObject>, UserError> {
        let id = parse_id(&id)?;
        let user = context.users.update_user(id, name, email).await?;
        Ok(Some(user.into()))
    }

    /// Delete a user. Malformed and absent ids both resolve to false.
    async fn delete_user(context: &Context, id: String) -> Result<bool, UserError> {
        let Ok(id) = parse_id(&id) else {
            return Ok(false);
        };

        context.users.delete_user(id).await
    }
}
