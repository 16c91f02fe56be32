use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::payroll::Payroll;
use crate::utils::errors::AppError;

pub struct PayrollRepository {
    pool: PgPool,
}

impl PayrollRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Crear o actualizar la nómina de un empleado para un mes.
    /// UNIQUE (user_id, month, year) hace idempotente la regeneración.
    pub async fn upsert(
        &self,
        user_id: Uuid,
        month: i32,
        year: i32,
        base_salary: Decimal,
        allowances: Decimal,
        deductions: Decimal,
        net_salary: Decimal,
    ) -> Result<Payroll, AppError> {
        let payroll = sqlx::query_as::<_, Payroll>(
            r#"
            INSERT INTO payrolls (id, user_id, month, year, base_salary, allowances, deductions, net_salary, generated_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, NOW(), NOW())
            ON CONFLICT (user_id, month, year)
            DO UPDATE SET base_salary = $5, allowances = $6, deductions = $7, net_salary = $8, updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(month)
        .bind(year)
        .bind(base_salary)
        .bind(allowances)
        .bind(deductions)
        .bind(net_salary)
        .fetch_one(&self.pool)
        .await?;

        Ok(payroll)
    }

    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Payroll>, AppError> {
        let payrolls = sqlx::query_as::<_, Payroll>(
            "SELECT * FROM payrolls WHERE user_id = $1 ORDER BY year DESC, month DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(payrolls)
    }

    pub async fn latest_for_user(&self, user_id: Uuid) -> Result<Option<Payroll>, AppError> {
        let payroll = sqlx::query_as::<_, Payroll>(
            "SELECT * FROM payrolls WHERE user_id = $1 ORDER BY year DESC, month DESC LIMIT 1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(payroll)
    }

    pub async fn list_for_month(&self, month: i32, year: i32) -> Result<Vec<Payroll>, AppError> {
        let payrolls = sqlx::query_as::<_, Payroll>(
            "SELECT * FROM payrolls WHERE month = $1 AND year = $2 ORDER BY user_id",
        )
        .bind(month)
        .bind(year)
        .fetch_all(&self.pool)
        .await?;

        Ok(payrolls)
    }
}
