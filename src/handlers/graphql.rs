use crate::core::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use juniper::http::{graphiql::graphiql_source, GraphQLRequest};
use std::sync::Arc;

/// GraphQL endpoint
///
/// POST /graphql
///
/// Field errors still execute to a document and stay 200 with an errors
/// list; only an invalid document itself is a client error.
pub async fn graphql_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GraphQLRequest>,
) -> Response {
    let response = request.execute(&state.schema, &state.context).await;

    let status = if response.is_ok() {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };

    (status, Json(response)).into_response()
}

/// Interactive GraphiQL explorer
///
/// GET /graphiql
pub async fn graphiql_handler() -> Html<String> {
    Html(graphiql_source("/graphql", None))
}
