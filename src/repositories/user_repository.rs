use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::user::{Role, User, UserStatus};
use crate::utils::errors::AppError;

pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        employee_id: &str,
        email: &str,
        password_hash: &str,
        full_name: &str,
        phone: Option<&str>,
        role: Role,
        email_verified: bool,
    ) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, employee_id, email, password_hash, full_name, phone, role, email_verified, user_status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, 'ACTIVE', NOW(), NOW())
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(employee_id)
        .bind(email)
        .bind(password_hash)
        .bind(full_name)
        .bind(phone)
        .bind(role)
        .bind(email_verified)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_unique_violation(e, "User with this employee_id or email already exists"))?;

        Ok(user)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    pub async fn employee_id_exists(&self, employee_id: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM users WHERE employee_id = $1)")
                .bind(employee_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    /// Generar el siguiente employee_id para un prefijo (E00001, HR00001, ...)
    pub async fn next_employee_id(&self, prefix: &str) -> Result<String, AppError> {
        let last: Option<(String,)> = sqlx::query_as(
            r#"
            SELECT employee_id FROM users
            WHERE employee_id LIKE $1
            ORDER BY LENGTH(employee_id) DESC, employee_id DESC
            LIMIT 1
            "#,
        )
        .bind(format!("{}%", prefix))
        .fetch_optional(&self.pool)
        .await?;

        let next_number = match last {
            Some((last_id,)) => last_id[prefix.len()..].parse::<u64>().unwrap_or(0) + 1,
            None => 1,
        };

        Ok(format!("{}{:05}", prefix, next_number))
    }

    pub async fn list_all(&self) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;

        Ok(users)
    }

    pub async fn update_contact(
        &self,
        id: Uuid,
        full_name: &str,
        email: &str,
        phone: Option<&str>,
    ) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET full_name = $2, email = $3, phone = $4, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(full_name)
        .bind(email)
        .bind(phone)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_unique_violation(e, "User with this email already exists"))?;

        Ok(user)
    }

    pub async fn update_phone(&self, id: Uuid, phone: Option<&str>) -> Result<(), AppError> {
        sqlx::query("UPDATE users SET phone = $2, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .bind(phone)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn set_status(&self, id: Uuid, status: UserStatus) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE users SET user_status = $2, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        Ok(())
    }

    pub async fn set_otp(
        &self,
        id: Uuid,
        otp_code: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), AppError> {
        sqlx::query(
            "UPDATE users SET otp_code = $2, otp_expires_at = $3, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(otp_code)
        .bind(expires_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Limpiar el OTP consumido y marcar el email como verificado
    pub async fn clear_otp_and_verify(&self, id: Uuid) -> Result<(), AppError> {
        sqlx::query(
            r#"
            UPDATE users
            SET otp_code = NULL, otp_expires_at = NULL, email_verified = TRUE, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn count_by_role(&self, role: Role) -> Result<i64, AppError> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE role = $1")
            .bind(role)
            .fetch_one(&self.pool)
            .await?;

        Ok(result.0)
    }
}
