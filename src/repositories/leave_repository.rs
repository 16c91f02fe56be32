use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::leave::{LeaveRequest, LeaveStatus, LeaveType};
use crate::utils::errors::AppError;

pub struct LeaveRepository {
    pool: PgPool,
}

impl LeaveRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        leave_type: LeaveType,
        start_date: NaiveDate,
        end_date: NaiveDate,
        remarks: Option<&str>,
    ) -> Result<LeaveRequest, AppError> {
        let request = sqlx::query_as::<_, LeaveRequest>(
            r#"
            INSERT INTO leave_requests (id, user_id, leave_type, start_date, end_date, remarks, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, 'PENDING', NOW())
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(leave_type)
        .bind(start_date)
        .bind(end_date)
        .bind(remarks)
        .fetch_one(&self.pool)
        .await?;

        Ok(request)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<LeaveRequest>, AppError> {
        let request = sqlx::query_as::<_, LeaveRequest>("SELECT * FROM leave_requests WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(request)
    }

    pub async fn list_for_user(
        &self,
        user_id: Uuid,
        status: Option<LeaveStatus>,
    ) -> Result<Vec<LeaveRequest>, AppError> {
        let requests = sqlx::query_as::<_, LeaveRequest>(
            r#"
            SELECT * FROM leave_requests
            WHERE user_id = $1 AND ($2::VARCHAR IS NULL OR status = $2)
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .bind(status)
        .fetch_all(&self.pool)
        .await?;

        Ok(requests)
    }

    pub async fn list_all(&self, status: Option<LeaveStatus>) -> Result<Vec<LeaveRequest>, AppError> {
        let requests = sqlx::query_as::<_, LeaveRequest>(
            r#"
            SELECT * FROM leave_requests
            WHERE ($1::VARCHAR IS NULL OR status = $1)
            ORDER BY created_at DESC
            "#,
        )
        .bind(status)
        .fetch_all(&self.pool)
        .await?;

        Ok(requests)
    }

    /// Transición atómica PENDING -> APPROVED/REJECTED. El WHERE sobre
    /// status garantiza la terminalidad: una solicitud ya decidida no
    /// vuelve a cambiar aunque lleguen dos decisiones en paralelo.
    pub async fn decide(
        &self,
        id: Uuid,
        decision: LeaveStatus,
        decided_by: Uuid,
        comments: Option<&str>,
    ) -> Result<Option<LeaveRequest>, AppError> {
        let request = sqlx::query_as::<_, LeaveRequest>(
            r#"
            UPDATE leave_requests
            SET status = $2, decided_by = $3, decided_at = NOW(), admin_comments = $4
            WHERE id = $1 AND status = 'PENDING'
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(decision)
        .bind(decided_by)
        .bind(comments)
        .fetch_optional(&self.pool)
        .await?;

        Ok(request)
    }

    pub async fn count_pending_for_user(&self, user_id: Uuid) -> Result<i64, AppError> {
        let result: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM leave_requests WHERE user_id = $1 AND status = 'PENDING'",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    pub async fn count_pending(&self) -> Result<i64, AppError> {
        let result: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM leave_requests WHERE status = 'PENDING'")
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    pub async fn recent(&self, limit: i64) -> Result<Vec<LeaveRequest>, AppError> {
        let requests = sqlx::query_as::<_, LeaveRequest>(
            "SELECT * FROM leave_requests ORDER BY created_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(requests)
    }
}
