use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, patch, post},
    Json, Router,
};
use chrono::{Duration, NaiveDate, NaiveTime, Utc};
use fleuron_order::{CreateOrderError, TransitionError};
use fleuron_shared::{Order, OrderDraft, OrderFilter, OrderStatus, Role};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/orders", get(list_orders).post(create_order))
        .route("/orders/parse", post(parse_notes))
        .route("/orders/{id}", get(get_order))
        .route("/orders/{id}/status", patch(update_status))
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub status: Option<String>,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    pub status: Option<String>,
    pub role: Option<String>,
    pub driver_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    pub notes: Option<String>,
}

/// GET /orders?status=&date=
/// Lists the day's orders, newest first. Unrecognized status values are
/// ignored rather than rejected.
async fn list_orders(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Value>, AppError> {
    let day = query.date.unwrap_or_else(|| Utc::now().date_naive());
    let start = day.and_time(NaiveTime::MIN).and_utc();
    let filter = OrderFilter {
        created_after: Some(start),
        created_before: Some(start + Duration::days(1)),
        status: query.status.as_deref().and_then(OrderStatus::parse),
    };

    let orders = state
        .store
        .find_many(&filter)
        .await
        .map_err(|e| AppError::Anyhow(anyhow::anyhow!(e.to_string())))?;
    Ok(Json(json!({ "orders": orders })))
}

/// GET /orders/{id}
async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let order: Order = state
        .store
        .find_by_id(id)
        .await
        .map_err(|e| AppError::Anyhow(anyhow::anyhow!(e.to_string())))?
        .ok_or_else(|| AppError::NotFound("Order not found".to_string()))?;
    Ok(Json(json!({ "order": order })))
}

/// POST /orders
/// Validates and creates an order in SUBMITTED status.
async fn create_order(
    State(state): State<AppState>,
    Json(draft): Json<OrderDraft>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let order = state.engine.create_order(draft).await.map_err(|e| match e {
        CreateOrderError::Invalid(errors) => AppError::Validation(errors),
        CreateOrderError::Store(msg) => AppError::Anyhow(anyhow::anyhow!(msg)),
    })?;
    Ok((StatusCode::CREATED, Json(json!({ "order": order }))))
}

/// PATCH /orders/{id}/status
/// The role-gated transition entrypoint.
async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<Json<Value>, AppError> {
    let (Some(status_raw), Some(role_raw)) = (req.status, req.role) else {
        return Err(AppError::BadRequest(
            "status and role are required".to_string(),
        ));
    };

    let status = OrderStatus::parse(&status_raw)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown status: {status_raw}")))?;
    let role = Role::parse(&role_raw)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown role: {role_raw}")))?;

    state
        .engine
        .transition_status(id, status, role, req.driver_name)
        .await
        .map_err(|e| match e {
            TransitionError::NotFound(_) => AppError::NotFound("Order not found".to_string()),
            TransitionError::NotAllowed { .. } => {
                AppError::PolicyDenied("Transition not allowed for your role".to_string())
            }
            TransitionError::Store(msg) => AppError::Anyhow(anyhow::anyhow!(msg)),
        })?;

    Ok(Json(json!({ "success": true })))
}

/// POST /orders/parse
/// Extracts structured order fields from free-text phone notes.
async fn parse_notes(
    State(state): State<AppState>,
    Json(req): Json<ParseRequest>,
) -> Result<Json<Value>, AppError> {
    let notes = req.notes.unwrap_or_default();
    if notes.trim().is_empty() {
        return Err(AppError::BadRequest("notes field is required".to_string()));
    }

    let parsed = state
        .parser
        .parse(&notes)
        .await
        .map_err(|_| AppError::AiUnavailable("Failed to parse order notes".to_string()))?;

    Ok(Json(json!({ "parsed": parsed })))
}
