//! HTTP handlers for the dashboard API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! reactive layer for chart rendering.

use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use tracing::debug;

use super::dto::{
    ChartQuery, ChartSpec, ControlsResponse, EventRequest, EventResponse, HealthResponse,
    LayoutNode,
};
use super::error::AppError;
use super::state::AppState;
use crate::layout::{render_page, PageBootstrap};
use crate::reactive::OutputId;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Page
// =============================================================================

/// GET /
///
/// Render the dashboard page with the initial charts embedded.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let initial = state.controls.initial_state();
    let figures = state.dashboard.initial_render(&initial);

    let html = render_page(&PageBootstrap {
        layout: &state.layout,
        state: &initial,
        figures: &figures,
    })?;

    Ok(Html(html))
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        records: state.dataset().len(),
    }))
}

// =============================================================================
// Layout and Controls
// =============================================================================

/// GET /v1/layout
pub async fn get_layout(State(state): State<AppState>) -> HandlerResult<LayoutNode> {
    Ok(Json(state.layout.as_ref().clone()))
}

/// GET /v1/controls
///
/// Dropdown options, slider bounds and the initial control state.
pub async fn get_controls(State(state): State<AppState>) -> HandlerResult<ControlsResponse> {
    Ok(Json(ControlsResponse {
        controls: state.controls.as_ref().clone(),
        initial_state: state.controls.initial_state(),
    }))
}

// =============================================================================
// Charts
// =============================================================================

/// GET /v1/charts/{output_id}
///
/// Render one chart for the control values in the query string.
pub async fn get_chart(
    State(state): State<AppState>,
    Path(output_id): Path<String>,
    Query(query): Query<ChartQuery>,
) -> HandlerResult<ChartSpec> {
    let output: OutputId = output_id.parse().map_err(AppError::NotFound)?;
    let controls = query.into_state(state.controls.initial_state());

    let figure = state
        .dashboard
        .render_output(output, &controls)
        .ok_or_else(|| AppError::NotFound(format!("No listener for {}", output.as_str())))?;

    Ok(Json(figure))
}

/// POST /v1/events
///
/// Apply one control change to the client's state and return the
/// re-rendered outputs that subscribe to that control.
pub async fn post_event(
    State(state): State<AppState>,
    Json(request): Json<EventRequest>,
) -> HandlerResult<EventResponse> {
    let EventRequest {
        state: mut controls,
        event,
    } = request;

    debug!(control = event.control().as_str(), "Received control event");
    let updates = state.dashboard.dispatch(&mut controls, event);

    Ok(Json(EventResponse {
        state: controls,
        updates,
    }))
}
