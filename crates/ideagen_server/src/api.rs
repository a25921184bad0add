//! HTTP routes for content generation and health checks.

use crate::error::ApiError;
use crate::service::ContentService;
use axum::extract::rejection::JsonRejection;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use ideagen_core::{Capability, ContentBundle, IdeaInput, NormalizedOutput};
use ideagen_interface::TextGenerator;
use serde_json::json;
use std::sync::Arc;
use tracing::instrument;

/// API server state.
pub struct ApiState<D> {
    /// Content service shared by every route.
    pub service: Arc<ContentService<D>>,
}

impl<D> Clone for ApiState<D> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}

impl<D> ApiState<D> {
    /// Creates a new API state.
    pub fn new(service: ContentService<D>) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

/// Creates the API router.
pub fn create_router<D>(service: ContentService<D>) -> Router
where
    D: TextGenerator + 'static,
{
    let state = ApiState::new(service);

    Router::new()
        .route("/title", post(title::<D>))
        .route("/description", post(description::<D>))
        .route("/keywords", post(keywords::<D>))
        .route("/tags", post(tags::<D>))
        .route("/generate", post(generate_all::<D>))
        .route("/health", get(health_check))
        .with_state(state)
}

/// Health check endpoint.
#[instrument(skip_all)]
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

async fn title<D: TextGenerator>(
    State(state): State<ApiState<D>>,
    body: Result<Json<IdeaInput>, JsonRejection>,
) -> Result<Json<NormalizedOutput>, ApiError> {
    single(state, body, Capability::Title).await
}

async fn description<D: TextGenerator>(
    State(state): State<ApiState<D>>,
    body: Result<Json<IdeaInput>, JsonRejection>,
) -> Result<Json<NormalizedOutput>, ApiError> {
    single(state, body, Capability::Description).await
}

async fn keywords<D: TextGenerator>(
    State(state): State<ApiState<D>>,
    body: Result<Json<IdeaInput>, JsonRejection>,
) -> Result<Json<NormalizedOutput>, ApiError> {
    single(state, body, Capability::Keywords).await
}

async fn tags<D: TextGenerator>(
    State(state): State<ApiState<D>>,
    body: Result<Json<IdeaInput>, JsonRejection>,
) -> Result<Json<NormalizedOutput>, ApiError> {
    single(state, body, Capability::Tags).await
}

/// Validate, then generate one field.
#[instrument(skip(state, body, capability), fields(capability = %capability))]
async fn single<D: TextGenerator>(
    state: ApiState<D>,
    body: Result<Json<IdeaInput>, JsonRejection>,
    capability: Capability,
) -> Result<Json<NormalizedOutput>, ApiError> {
    let Json(input) = body?;
    let idea = input.into_idea()?;
    let output = state.service.generate(capability, &idea).await?;
    Ok(Json(output))
}

/// Generate every field at once.
#[instrument(skip_all)]
async fn generate_all<D: TextGenerator>(
    State(state): State<ApiState<D>>,
    body: Result<Json<IdeaInput>, JsonRejection>,
) -> Result<Json<ContentBundle>, ApiError> {
    let Json(input) = body?;
    let idea = input.into_idea()?;
    let bundle = state.service.generate_all(&idea).await?;
    Ok(Json(bundle))
}
