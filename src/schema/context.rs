use crate::service::user_service::UserService;
use std::sync::Arc;

/// Values shared with every resolver invocation.
#[derive(Clone)]
pub struct Context {
    pub users: Arc<UserService>,
}

impl Context {
    pub fn new(users: Arc<UserService>) -> Self {
        Self { users }
    }
}

impl juniper::Context for Context {}
