//! API request handlers
//!
//! Handlers for all REST API endpoints.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

use super::server::AppState;
use crate::error::ExportError;
use crate::types::{Campaign, Survey};

/// Standard API response wrapper
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub request_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            request_id: Uuid::new_v4().to_string(),
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self
    where
        T: Default,
    {
        Self {
            success: false,
            request_id: Uuid::new_v4().to_string(),
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Failure returned by a handler
#[derive(Debug)]
pub enum ApiError {
    Export(ExportError),
    /// The blocking export task did not complete
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Export(ExportError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Export(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::Export(e) => e.to_string(),
            ApiError::Internal(msg) => msg.clone(),
        }
    }
}

impl From<ExportError> for ApiError {
    fn from(e: ExportError) -> Self {
        ApiError::Export(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self.message(), "request failed");
        }
        (status, Json(ApiResponse::<()>::err(self.message()))).into_response()
    }
}

/// Root endpoint response
#[derive(Serialize)]
pub struct RootResponse {
    pub name: String,
    pub version: String,
    pub description: String,
    pub endpoints: Vec<EndpointInfo>,
}

#[derive(Serialize)]
pub struct EndpointInfo {
    pub path: String,
    pub method: String,
    pub description: String,
}

impl EndpointInfo {
    fn new(method: &str, path: &str, description: &str) -> Self {
        Self {
            path: path.to_string(),
            method: method.to_string(),
            description: description.to_string(),
        }
    }
}

/// GET / - Root info
pub async fn root(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let response = RootResponse {
        name: "Survey API Server".to_string(),
        version: state.version.clone(),
        description: "Survey campaign export service".to_string(),
        endpoints: vec![
            EndpointInfo::new("GET", "/health", "Health check endpoint"),
            EndpointInfo::new("GET", "/version", "Get server version"),
            EndpointInfo::new("POST", "/api/survey/create", "Create a survey"),
            EndpointInfo::new("GET", "/api/survey/get?id=", "Get a survey by id"),
            EndpointInfo::new("POST", "/api/survey/campaign/create", "Create a campaign"),
            EndpointInfo::new("GET", "/api/survey/campaign/get?id=", "Get a campaign by id"),
            EndpointInfo::new(
                "POST",
                "/api/survey/campaign/export?campaignId=",
                "Export a campaign report and mail it",
            ),
        ],
    };
    Json(ApiResponse::ok(response))
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_message: String,
}

/// GET /health - Health check
pub async fn health() -> impl IntoResponse {
    Json(ApiResponse::ok(HealthResponse {
        status: "healthy".to_string(),
        uptime_message: "Server is running".to_string(),
    }))
}

/// Version response
#[derive(Serialize)]
pub struct VersionResponse {
    pub version: String,
    pub features: Vec<String>,
}

/// GET /version - Server version
pub async fn version(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(ApiResponse::ok(VersionResponse {
        version: state.version.clone(),
        features: vec![
            "survey".to_string(),
            "campaign".to_string(),
            "export".to_string(),
        ],
    }))
}

/// `?id=` lookup
#[derive(Deserialize)]
pub struct IdQuery {
    pub id: String,
}

/// `?campaignId=` export trigger
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportQuery {
    pub campaign_id: String,
}

/// POST /api/survey/create - Store a survey
pub async fn create_survey(
    State(state): State<Arc<AppState>>,
    Json(survey): Json<Survey>,
) -> Result<StatusCode, ApiError> {
    state.pipeline.create_survey(survey)?;
    Ok(StatusCode::OK)
}

/// GET /api/survey/get?id= - Survey or 404
pub async fn get_survey(
    State(state): State<Arc<AppState>>,
    Query(query): Query<IdQuery>,
) -> Result<Json<Survey>, ApiError> {
    match state.pipeline.get_survey(&query.id)? {
        Some(survey) => Ok(Json(survey)),
        None => Err(ExportError::not_found("Survey", query.id).into()),
    }
}

/// POST /api/survey/campaign/create - Store a campaign
pub async fn create_campaign(
    State(state): State<Arc<AppState>>,
    Json(campaign): Json<Campaign>,
) -> Result<StatusCode, ApiError> {
    state.pipeline.create_campaign(campaign)?;
    Ok(StatusCode::OK)
}

/// GET /api/survey/campaign/get?id= - Campaign or 404
pub async fn get_campaign(
    State(state): State<Arc<AppState>>,
    Query(query): Query<IdQuery>,
) -> Result<Json<Campaign>, ApiError> {
    match state.pipeline.get_campaign(&query.id)? {
        Some(campaign) => Ok(Json(campaign)),
        None => Err(ExportError::not_found("Campaign", query.id).into()),
    }
}

/// POST /api/survey/campaign/export?campaignId= - Build and mail the report
pub async fn export_campaign(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ExportQuery>,
) -> Result<StatusCode, ApiError> {
    let pipeline = state.pipeline.clone();
    tokio::task::spawn_blocking(move || pipeline.export_campaign(&query.campaign_id))
        .await
        .map_err(|e| ApiError::Internal(format!("export task failed: {}", e)))??;
    Ok(StatusCode::OK)
}
