pub mod mutations;
pub mod queries;

use async_graphql::{EmptySubscription, Schema as GraphQLSchema};

use crate::app_state::AppState;

pub use mutations::MutationRoot;
pub use queries::QueryRoot;

pub type Schema = GraphQLSchema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn create_schema(app_state: AppState) -> Schema {
    GraphQLSchema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(app_state)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::Config,
        services::insight_service::MockInsightTransport,
    };
    use std::sync::Arc;

    fn schema() -> Schema {
        let state = AppState::with_transport(
            Config::test_config(),
            Arc::new(MockInsightTransport::new()),
        )
        .expect("state should build");
        create_schema(state)
    }

    #[actix_web::test]
    async fn personas_query_lists_all_personas() {
        let response = schema().execute("{ personas { slug hasChallenge } }").await;

        assert!(response.errors.is_empty(), "{:?}", response.errors);
        let data = response.data.into_json().expect("json data");
        assert_eq!(data["personas"].as_array().map(Vec::len), Some(4));
    }

    #[actix_web::test]
    async fn session_flow_through_mutations() {
        let schema = schema();
        let created = schema
            .execute("mutation { createSession(persona: CUSTOMER_CARE) { id phase } }")
            .await;
        assert!(created.errors.is_empty(), "{:?}", created.errors);
        let data = created.data.into_json().expect("json data");
        let id = data["createSession"]["id"]
            .as_str()
            .expect("session id")
            .to_string();
        assert_eq!(data["createSession"]["phase"], "NOT_STARTED");

        let confirmed = schema
            .execute(format!(
                r#"mutation {{ confirmVideo(sessionId: "{}", input: {{ confirmed: true }}) {{ canStart }} }}"#,
                id
            ))
            .await;
        let data = confirmed.data.into_json().expect("json data");
        assert_eq!(data["confirmVideo"]["canStart"], true);

        let started = schema
            .execute(format!(
                r#"mutation {{ startChallenge(sessionId: "{}") {{ phase questions {{ number }} }} }}"#,
                id
            ))
            .await;
        let data = started.data.into_json().expect("json data");
        assert_eq!(data["startChallenge"]["phase"], "AWAITING_ANSWERS");
        assert_eq!(
            data["startChallenge"]["questions"].as_array().map(Vec::len),
            Some(5)
        );
    }

    #[actix_web::test]
    async fn illegal_transition_reports_error_code() {
        let schema = schema();
        let created = schema
            .execute("mutation { createSession(persona: DEVELOPER) { id } }")
            .await;
        let data = created.data.into_json().expect("json data");
        let id = data["createSession"]["id"].as_str().expect("id").to_string();

        let response = schema
            .execute(format!(
                r#"mutation {{ submitChallenge(sessionId: "{}") {{ phase }} }}"#,
                id
            ))
            .await;

        let error = response.errors.first().expect("submit before start fails");
        let code = error
            .extensions
            .as_ref()
            .and_then(|ext| ext.get("code"))
            .map(|v| v.to_string());
        assert_eq!(code.as_deref(), Some("\"INVALID_TRANSITION\""));
    }
}
