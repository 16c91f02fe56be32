//! Routers de la API
//!
//! Un router por recurso, montados bajo /api. Las rutas protegidas
//! pasan por el middleware de autenticación; las de Admin añaden
//! el gate de rol encima.

pub mod attendance_routes;
pub mod auth_routes;
pub mod dashboard_routes;
pub mod employee_routes;
pub mod leave_routes;
pub mod payroll_routes;
pub mod profile_routes;

use axum::{middleware, response::Json, routing::get, Router};
use serde_json::json;

use crate::middleware::auth::auth_middleware;
use crate::middleware::cors::cors_middleware;
use crate::state::AppState;

/// Crear la aplicación completa: health check + API + CORS
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_endpoint))
        .nest("/api", create_api_router(state.clone()))
        .layer(cors_middleware())
        .with_state(state)
}

/// Health check simple
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "service": "dayflow-hrms",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Crear el router principal de la API
pub fn create_api_router(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .nest("/attendance", attendance_routes::create_attendance_router())
        .nest("/leave", leave_routes::create_leave_router())
        .nest("/employees", employee_routes::create_employee_router())
        .nest("/payroll", payroll_routes::create_payroll_router())
        .nest("/dashboard", dashboard_routes::create_dashboard_router())
        .merge(profile_routes::create_profile_router())
        .layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .nest("/auth", auth_routes::create_auth_router())
        .merge(protected)
}
