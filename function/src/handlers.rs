use arigold_orchestrator::ProcessOutcome;
use arigold_orchestrator::validation::parse_agent_request;
use arigold_protocol::http::HealthResponse;
use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use tracing::Instrument;
use tracing::info_span;
use uuid::Uuid;

use crate::error::HttpError;
use crate::state::FunctionState;

pub async fn health(State(state): State<FunctionState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(state.config().agent_name.clone()))
}

/// Agent endpoint. Generation failures come back as a 200 outcome carrying
/// an `error` field; only bad input and initialisation failures map to an
/// error status.
pub async fn invoke(
    State(state): State<FunctionState>,
    body: Bytes,
) -> Result<Json<ProcessOutcome>, HttpError> {
    let request_id = Uuid::new_v4();
    let span = info_span!("invoke", %request_id);

    async move {
        let agent_request = parse_agent_request(&body)?;
        let orchestrator = state.orchestrator().await?;
        let outcome = orchestrator
            .process(&agent_request.request, agent_request.context)
            .await;
        Ok(Json(outcome))
    }
    .instrument(span)
    .await
}
