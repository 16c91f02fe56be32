use axum::{
    extract::State,
    routing::{get, put},
    Extension, Json, Router,
};

use crate::controllers::employee_controller::EmployeeController;
use crate::dto::employee_dto::{EmployeeDetailResponse, UpdateMeRequest};
use crate::dto::ApiResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Perfil propio: lectura para cualquier rol, edición limitada
pub fn create_profile_router() -> Router<AppState> {
    Router::new()
        .route("/me", get(get_me))
        .route("/me", put(update_me))
}

async fn get_me(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<EmployeeDetailResponse>, AppError> {
    let controller = EmployeeController::new(state.pool.clone());
    let response = controller.me(&user).await?;
    Ok(Json(response))
}

async fn update_me(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<UpdateMeRequest>,
) -> Result<Json<ApiResponse<EmployeeDetailResponse>>, AppError> {
    let controller = EmployeeController::new(state.pool.clone());
    let response = controller.update_me(&user, request).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Perfil actualizado exitosamente".to_string(),
    )))
}
