use axum::{
    extract::{Query, State},
    routing::{get, post},
    Extension, Json, Router,
};

use crate::controllers::attendance_controller::{AttendanceController, AttendanceListing};
use crate::dto::attendance_dto::{AttendanceQuery, AttendanceResponse};
use crate::dto::ApiResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_attendance_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_attendance))
        .route("/checkin", post(check_in))
        .route("/checkout", post(check_out))
}

async fn check_in(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<ApiResponse<AttendanceResponse>>, AppError> {
    let controller = AttendanceController::new(state.pool.clone());
    let response = controller.check_in(&user).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Check-in registrado exitosamente".to_string(),
    )))
}

async fn check_out(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<ApiResponse<AttendanceResponse>>, AppError> {
    let controller = AttendanceController::new(state.pool.clone());
    let response = controller.check_out(&user).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Check-out registrado exitosamente".to_string(),
    )))
}

async fn list_attendance(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Query(query): Query<AttendanceQuery>,
) -> Result<Json<AttendanceListing>, AppError> {
    let controller = AttendanceController::new(state.pool.clone());
    let response = controller.list(&user, query).await?;
    Ok(Json(response))
}
