use axum::{
    extract::{Path, Query, State},
    middleware,
    routing::{get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::payroll_controller::PayrollController;
use crate::dto::payroll_dto::{
    GeneratePayrollRequest, GeneratePayrollResponse, MyPayrollResponse, PayrollRecordsQuery,
    PayrollResponse, SalaryStructureRequest, SalaryStructureResponse,
};
use crate::dto::ApiResponse;
use crate::middleware::auth::{admin_only_middleware, AuthenticatedUser};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_payroll_router() -> Router<AppState> {
    let admin = Router::new()
        .route("/records", get(payroll_records))
        .route("/generate", post(generate_payroll))
        .route("/:user_id", get(get_salary_structure))
        .route("/:user_id", put(update_salary_structure))
        .route_layer(middleware::from_fn(admin_only_middleware));

    Router::new().route("/", get(my_payroll)).merge(admin)
}

async fn my_payroll(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<MyPayrollResponse>, AppError> {
    let controller = PayrollController::new(state.pool.clone());
    let response = controller.my_payroll(&user).await?;
    Ok(Json(response))
}

async fn get_salary_structure(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<SalaryStructureResponse>, AppError> {
    let controller = PayrollController::new(state.pool.clone());
    let response = controller.salary_structure(user_id).await?;
    Ok(Json(response))
}

async fn update_salary_structure(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(request): Json<SalaryStructureRequest>,
) -> Result<Json<ApiResponse<SalaryStructureResponse>>, AppError> {
    let controller = PayrollController::new(state.pool.clone());
    let response = controller.update_salary_structure(user_id, request).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Estructura salarial actualizada exitosamente".to_string(),
    )))
}

async fn generate_payroll(
    State(state): State<AppState>,
    Json(request): Json<GeneratePayrollRequest>,
) -> Result<Json<ApiResponse<GeneratePayrollResponse>>, AppError> {
    let controller = PayrollController::new(state.pool.clone());
    let response = controller.generate(request).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn payroll_records(
    State(state): State<AppState>,
    Query(query): Query<PayrollRecordsQuery>,
) -> Result<Json<Vec<PayrollResponse>>, AppError> {
    let controller = PayrollController::new(state.pool.clone());
    let response = controller.records(query).await?;
    Ok(Json(response))
}
