use axum::{
    extract::{Path, Query, State},
    middleware,
    routing::{get, post},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::leave_controller::LeaveController;
use crate::dto::leave_dto::{ApplyLeaveRequest, DecideLeaveRequest, LeaveQuery, LeaveResponse};
use crate::dto::ApiResponse;
use crate::middleware::auth::{admin_only_middleware, AuthenticatedUser};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_leave_router() -> Router<AppState> {
    let admin = Router::new()
        .route("/:id/decide", post(decide_leave))
        .route_layer(middleware::from_fn(admin_only_middleware));

    Router::new()
        .route("/", get(list_leaves))
        .route("/apply", post(apply_leave))
        .merge(admin)
}

async fn apply_leave(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<ApplyLeaveRequest>,
) -> Result<Json<ApiResponse<LeaveResponse>>, AppError> {
    let controller = LeaveController::new(state.pool.clone());
    let response = controller.apply(&user, request).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Solicitud de permiso enviada exitosamente".to_string(),
    )))
}

async fn list_leaves(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Query(query): Query<LeaveQuery>,
) -> Result<Json<Vec<LeaveResponse>>, AppError> {
    let controller = LeaveController::new(state.pool.clone());
    let response = controller.list(&user, query).await?;
    Ok(Json(response))
}

async fn decide_leave(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<DecideLeaveRequest>,
) -> Result<Json<ApiResponse<LeaveResponse>>, AppError> {
    let controller = LeaveController::new(state.pool.clone());
    let response = controller.decide(&user, id, request).await?;
    Ok(Json(ApiResponse::success(response)))
}
