use axum::{
    extract::{Json, State},
    routing::post,
    Router,
};

use crate::controllers::auth_controller::AuthController;
use crate::dto::auth_dto::{
    LoginRequest, OtpSentResponse, ResendOtpRequest, SessionResponse, SignupRequest, UserResponse,
    VerifyOtpRequest,
};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/verify-otp", post(verify_otp))
        .route("/resend-otp", post(resend_otp))
}

async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let controller = AuthController::new(state.pool.clone());
    let response = controller.signup(request).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Usuario registrado exitosamente".to_string(),
    )))
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<OtpSentResponse>, AppError> {
    let controller = AuthController::new(state.pool.clone());
    let response = controller.login(request, &state.config, &state.mailer).await?;
    Ok(Json(response))
}

async fn verify_otp(
    State(state): State<AppState>,
    Json(request): Json<VerifyOtpRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let controller = AuthController::new(state.pool.clone());
    let response = controller.verify_otp(request, &state.config).await?;
    Ok(Json(response))
}

async fn resend_otp(
    State(state): State<AppState>,
    Json(request): Json<ResendOtpRequest>,
) -> Result<Json<OtpSentResponse>, AppError> {
    let controller = AuthController::new(state.pool.clone());
    let response = controller
        .resend_otp(request, &state.config, &state.mailer)
        .await?;
    Ok(Json(response))
}
