use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::profile::{EmployeeProfile, EmploymentType};
use crate::utils::errors::AppError;

pub struct ProfileRepository {
    pool: PgPool,
}

impl ProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Crear el perfil por defecto al dar de alta un usuario
    pub async fn create_default(&self, user_id: Uuid) -> Result<EmployeeProfile, AppError> {
        let profile = sqlx::query_as::<_, EmployeeProfile>(
            r#"
            INSERT INTO employee_profiles (id, user_id, created_at, updated_at)
            VALUES ($1, $2, NOW(), NOW())
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_unique_violation(e, "Profile for this user already exists"))?;

        Ok(profile)
    }

    pub async fn find_by_user(&self, user_id: Uuid) -> Result<Option<EmployeeProfile>, AppError> {
        let profile = sqlx::query_as::<_, EmployeeProfile>(
            "SELECT * FROM employee_profiles WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(profile)
    }

    pub async fn list_all(&self) -> Result<Vec<EmployeeProfile>, AppError> {
        let profiles = sqlx::query_as::<_, EmployeeProfile>("SELECT * FROM employee_profiles")
            .fetch_all(&self.pool)
            .await?;

        Ok(profiles)
    }

    pub async fn update_job_details(
        &self,
        user_id: Uuid,
        department: Option<String>,
        position: Option<String>,
        employment_type: Option<EmploymentType>,
        date_joined: Option<NaiveDate>,
    ) -> Result<EmployeeProfile, AppError> {
        let current = self
            .find_by_user(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))?;

        let profile = sqlx::query_as::<_, EmployeeProfile>(
            r#"
            UPDATE employee_profiles
            SET department = $2, position = $3, employment_type = $4, date_joined = $5, updated_at = NOW()
            WHERE user_id = $1
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(department.unwrap_or(current.department))
        .bind(position.unwrap_or(current.position))
        .bind(employment_type.unwrap_or(current.employment_type))
        .bind(date_joined.unwrap_or(current.date_joined))
        .fetch_one(&self.pool)
        .await?;

        Ok(profile)
    }

    pub async fn update_address(
        &self,
        user_id: Uuid,
        address: Option<&str>,
    ) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE employee_profiles SET address = $2, updated_at = NOW() WHERE user_id = $1",
        )
        .bind(user_id)
        .bind(address)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Profile not found".to_string()));
        }

        Ok(())
    }

    pub async fn update_salary(
        &self,
        user_id: Uuid,
        base_salary: Decimal,
        allowances: Decimal,
        deductions: Decimal,
    ) -> Result<EmployeeProfile, AppError> {
        let profile = sqlx::query_as::<_, EmployeeProfile>(
            r#"
            UPDATE employee_profiles
            SET base_salary = $2, allowances = $3, deductions = $4, updated_at = NOW()
            WHERE user_id = $1
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(base_salary)
        .bind(allowances)
        .bind(deductions)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))?;

        Ok(profile)
    }

    /// Perfiles de empleados activos, para la generación de nómina
    pub async fn list_active_employees(&self) -> Result<Vec<EmployeeProfile>, AppError> {
        let profiles = sqlx::query_as::<_, EmployeeProfile>(
            r#"
            SELECT p.* FROM employee_profiles p
            JOIN users u ON u.id = p.user_id
            WHERE u.role = 'EMPLOYEE' AND u.user_status = 'ACTIVE'
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(profiles)
    }
}
