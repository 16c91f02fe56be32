use axum::{extract::State, middleware, routing::get, Extension, Json, Router};

use crate::controllers::dashboard_controller::DashboardController;
use crate::dto::dashboard_dto::{AdminDashboardResponse, EmployeeDashboardResponse};
use crate::middleware::auth::{admin_only_middleware, AuthenticatedUser};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_dashboard_router() -> Router<AppState> {
    let admin = Router::new()
        .route("/admin", get(admin_dashboard))
        .route_layer(middleware::from_fn(admin_only_middleware));

    Router::new().route("/", get(employee_dashboard)).merge(admin)
}

async fn employee_dashboard(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<EmployeeDashboardResponse>, AppError> {
    let controller = DashboardController::new(state.pool.clone());
    let response = controller.employee_dashboard(&user).await?;
    Ok(Json(response))
}

async fn admin_dashboard(
    State(state): State<AppState>,
) -> Result<Json<AdminDashboardResponse>, AppError> {
    let controller = DashboardController::new(state.pool.clone());
    let response = controller.admin_dashboard().await?;
    Ok(Json(response))
}
