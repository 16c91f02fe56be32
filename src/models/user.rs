//! Modelo de User
//!
//! Este módulo contiene el struct User y sus enums de rol y estado.
//! Los usuarios nunca se borran físicamente: se desactivan.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Rol de acceso del usuario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "VARCHAR", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Employee,
    Admin,
}

impl Role {
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    /// Prefijo del employee_id generado para este rol
    pub fn employee_id_prefix(&self) -> &'static str {
        match self {
            Role::Admin => "HR",
            Role::Employee => "E",
        }
    }
}

/// Estado del usuario (sin borrado físico)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "VARCHAR", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    Active,
    Inactive,
}

/// User - mapea exactamente a la tabla users
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub employee_id: String,
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub role: Role,
    pub email_verified: bool,
    pub user_status: UserStatus,
    pub otp_code: Option<String>,
    pub otp_expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn is_active(&self) -> bool {
        self.user_status == UserStatus::Active
    }

    /// Verificar si el OTP pendiente sigue vigente
    pub fn otp_is_valid(&self, entered: &str, now: DateTime<Utc>) -> bool {
        match (&self.otp_code, &self.otp_expires_at) {
            (Some(code), Some(expires_at)) => code == entered && now <= *expires_at,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn user_with_otp(code: Option<&str>, expires_in: Option<Duration>) -> User {
        let now = Utc::now();
        User {
            id: Uuid::new_v4(),
            employee_id: "E00001".to_string(),
            email: "test@example.com".to_string(),
            password_hash: String::new(),
            full_name: "Test User".to_string(),
            phone: None,
            role: Role::Employee,
            email_verified: false,
            user_status: UserStatus::Active,
            otp_code: code.map(|c| c.to_string()),
            otp_expires_at: expires_in.map(|d| now + d),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_otp_valid_within_window() {
        let user = user_with_otp(Some("123456"), Some(Duration::minutes(5)));
        assert!(user.otp_is_valid("123456", Utc::now()));
    }

    #[test]
    fn test_otp_wrong_code_rejected() {
        let user = user_with_otp(Some("123456"), Some(Duration::minutes(5)));
        assert!(!user.otp_is_valid("654321", Utc::now()));
    }

    #[test]
    fn test_otp_expired_rejected() {
        let user = user_with_otp(Some("123456"), Some(Duration::minutes(-1)));
        assert!(!user.otp_is_valid("123456", Utc::now()));
    }

    #[test]
    fn test_otp_absent_rejected() {
        let user = user_with_otp(None, None);
        assert!(!user.otp_is_valid("123456", Utc::now()));
    }

    #[test]
    fn test_employee_id_prefix() {
        assert_eq!(Role::Admin.employee_id_prefix(), "HR");
        assert_eq!(Role::Employee.employee_id_prefix(), "E");
    }
}
