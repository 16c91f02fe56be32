use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::user::{Role, User, UserStatus};

/// Request de alta de usuario (signup directo con employee_id explícito)
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 2, max = 20))]
    pub employee_id: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 2, max = 100))]
    pub full_name: String,

    pub phone: Option<String>,

    pub role: Role,

    #[validate(length(min = 8, max = 100))]
    pub password: String,
}

/// Request de login - fase 1: credenciales
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}

/// Request de verificación - fase 2: OTP
#[derive(Debug, Deserialize, Validate)]
pub struct VerifyOtpRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(equal = 6))]
    pub otp: String,
}

/// Request de reenvío de OTP
#[derive(Debug, Deserialize, Validate)]
pub struct ResendOtpRequest {
    #[validate(email)]
    pub email: String,
}

/// Response de usuario (sin password_hash ni OTP)
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub employee_id: String,
    pub email: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub role: Role,
    pub email_verified: bool,
    pub user_status: UserStatus,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            employee_id: user.employee_id,
            email: user.email,
            full_name: user.full_name,
            phone: user.phone,
            role: user.role,
            email_verified: user.email_verified,
            user_status: user.user_status,
            created_at: user.created_at,
        }
    }
}

/// Response de login fase 1: aún sin sesión
#[derive(Debug, Serialize)]
pub struct OtpSentResponse {
    pub otp_sent: bool,
    pub message: String,
}

/// Response de sesión tras confirmar el OTP
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub user: UserResponse,
}
