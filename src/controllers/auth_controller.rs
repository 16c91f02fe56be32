//! Controller de autenticación y OTP
//!
//! Login en dos fases: credenciales -> OTP por correo -> sesión JWT.
//! Los rechazos de credenciales y de OTP son genéricos a propósito:
//! nunca revelan qué campo falló.

use bcrypt::{hash, verify, DEFAULT_COST};
use sqlx::PgPool;
use validator::Validate;

use crate::clients::MailClient;
use crate::config::EnvironmentConfig;
use crate::dto::auth_dto::{
    LoginRequest, OtpSentResponse, ResendOtpRequest, SessionResponse, SignupRequest, UserResponse,
    VerifyOtpRequest,
};
use crate::models::user::User;
use crate::repositories::profile_repository::ProfileRepository;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::{conflict_error, AppError};
use crate::utils::jwt::generate_token;
use crate::utils::otp::{generate_otp, otp_expiry};
use crate::utils::validation::validate_employee_id;

const INVALID_CREDENTIALS: &str = "Invalid email or password";
const INVALID_OTP: &str = "Invalid or expired OTP";

pub struct AuthController {
    users: UserRepository,
    profiles: ProfileRepository,
}

impl AuthController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            profiles: ProfileRepository::new(pool),
        }
    }

    /// Alta de usuario con employee_id explícito
    pub async fn signup(&self, request: SignupRequest) -> Result<UserResponse, AppError> {
        request.validate()?;
        validate_employee_id(&request.employee_id)?;

        // Chequeos previos para mensajes claros; el UNIQUE de la base
        // cubre la carrera entre requests duplicados concurrentes
        if self.users.employee_id_exists(&request.employee_id).await? {
            return Err(conflict_error("User", "employee_id", &request.employee_id));
        }
        if self.users.email_exists(&request.email).await? {
            return Err(conflict_error("User", "email", &request.email));
        }

        let password_hash = hash(&request.password, DEFAULT_COST)
            .map_err(|e| AppError::Internal(format!("Error hashing password: {}", e)))?;

        let user = self
            .users
            .create(
                &request.employee_id,
                &request.email,
                &password_hash,
                &request.full_name,
                request.phone.as_deref(),
                request.role,
                false,
            )
            .await?;

        self.profiles.create_default(user.id).await?;

        Ok(UserResponse::from(user))
    }

    /// Login fase 1: validar credenciales y enviar OTP
    pub async fn login(
        &self,
        request: LoginRequest,
        config: &EnvironmentConfig,
        mailer: &MailClient,
    ) -> Result<OtpSentResponse, AppError> {
        request.validate()?;

        let user = self
            .users
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;

        if !user.is_active() {
            return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        }

        let valid = verify(&request.password, &user.password_hash)
            .map_err(|e| AppError::Internal(format!("Error verifying password: {}", e)))?;

        if !valid {
            return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        }

        self.issue_otp(&user, config, mailer).await?;

        Ok(OtpSentResponse {
            otp_sent: true,
            message: "An OTP has been sent to your email".to_string(),
        })
    }

    /// Login fase 2: confirmar OTP y emitir la sesión
    pub async fn verify_otp(
        &self,
        request: VerifyOtpRequest,
        config: &EnvironmentConfig,
    ) -> Result<SessionResponse, AppError> {
        request.validate()?;

        let user = self
            .users
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::Unauthorized(INVALID_OTP.to_string()))?;

        if !user.is_active() || !user.otp_is_valid(&request.otp, chrono::Utc::now()) {
            return Err(AppError::Unauthorized(INVALID_OTP.to_string()));
        }

        self.users.clear_otp_and_verify(user.id).await?;

        let token = generate_token(
            user.id,
            &user.employee_id,
            user.role,
            &config.jwt_secret,
            config.jwt_expiration,
        )?;
        let expires_at =
            chrono::Utc::now() + chrono::Duration::seconds(config.jwt_expiration as i64);

        tracing::info!("✅ Sesión iniciada para {}", user.employee_id);

        Ok(SessionResponse {
            token,
            expires_at,
            user: UserResponse::from(user),
        })
    }

    /// Reenviar el OTP de un login pendiente de confirmación
    pub async fn resend_otp(
        &self,
        request: ResendOtpRequest,
        config: &EnvironmentConfig,
        mailer: &MailClient,
    ) -> Result<OtpSentResponse, AppError> {
        request.validate()?;

        let user = self
            .users
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;

        // Solo hay reenvío si el login dejó un OTP pendiente
        if !user.is_active() || user.otp_code.is_none() {
            return Err(AppError::BadRequest(
                "No pending login for this account".to_string(),
            ));
        }

        self.issue_otp(&user, config, mailer).await?;

        Ok(OtpSentResponse {
            otp_sent: true,
            message: "A new OTP has been sent to your email".to_string(),
        })
    }

    async fn issue_otp(
        &self,
        user: &User,
        config: &EnvironmentConfig,
        mailer: &MailClient,
    ) -> Result<(), AppError> {
        let otp = generate_otp();
        let expires_at = otp_expiry(config.otp_ttl_minutes);

        self.users.set_otp(user.id, &otp, expires_at).await?;

        // Fire-and-forget: un fallo de entrega no bloquea el login,
        // el usuario puede pedir reenvío
        mailer.send_fire_and_forget(
            user.email.clone(),
            "Your Dayflow HRMS Login OTP".to_string(),
            format!(
                "Your OTP for logging into Dayflow HRMS is: {}\n\nThis code will expire in {} minutes.",
                otp, config.otp_ttl_minutes
            ),
        );

        Ok(())
    }
}
