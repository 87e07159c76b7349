use async_graphql::{EmptySubscription, Schema, http::GraphiQLSource};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, Router, response::Html, routing::get};

pub use crate::modules::weekly_metrics::use_cases::record_week::inbound::graphql::MutationRoot;
pub use crate::modules::weekly_metrics::use_cases::view_dashboard::inbound::graphql::QueryRoot;
pub use crate::shell::state::AppState;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub const GRAPHQL_PATH: &str = "/gql";

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}

pub fn routes(schema: AppSchema) -> Router {
    Router::new()
        .route(GRAPHQL_PATH, get(graphiql).post(graphql))
        .layer(Extension(schema))
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
