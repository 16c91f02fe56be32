use axum::{
    extract::{Path, State},
    middleware,
    routing::{get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::employee_controller::EmployeeController;
use crate::dto::employee_dto::{CreateEmployeeRequest, EmployeeDetailResponse, UpdateEmployeeRequest};
use crate::dto::ApiResponse;
use crate::middleware::auth::admin_only_middleware;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Gestión de empleados: todo el router es solo para Admin
pub fn create_employee_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_employees))
        .route("/", post(create_employee))
        .route("/:id", get(get_employee))
        .route("/:id", put(update_employee))
        .route("/:id/deactivate", post(deactivate_employee))
        .route_layer(middleware::from_fn(admin_only_middleware))
}

async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<Vec<EmployeeDetailResponse>>, AppError> {
    let controller = EmployeeController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn create_employee(
    State(state): State<AppState>,
    Json(request): Json<CreateEmployeeRequest>,
) -> Result<Json<ApiResponse<EmployeeDetailResponse>>, AppError> {
    let controller = EmployeeController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Usuario creado exitosamente".to_string(),
    )))
}

async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<EmployeeDetailResponse>, AppError> {
    let controller = EmployeeController::new(state.pool.clone());
    let response = controller.get(id).await?;
    Ok(Json(response))
}

async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateEmployeeRequest>,
) -> Result<Json<ApiResponse<EmployeeDetailResponse>>, AppError> {
    let controller = EmployeeController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Empleado actualizado exitosamente".to_string(),
    )))
}

async fn deactivate_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = EmployeeController::new(state.pool.clone());
    controller.deactivate(id).await?;
    Ok(Json(ApiResponse::message_only(
        "Usuario desactivado exitosamente".to_string(),
    )))
}
