use chrono::{NaiveDate, NaiveTime};
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::attendance_dto::AttendanceWithEmployeeRow;
use crate::models::attendance::{AttendanceRecord, AttendanceStatus};
use crate::utils::errors::AppError;

pub struct AttendanceRepository {
    pool: PgPool,
}

impl AttendanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Crear el registro de hoy con el check-in. Si el día ya tiene
    /// registro sin check-in (p. ej. marcado LEAVE al aprobar un
    /// permiso) se completa ese registro; solo se rechaza cuando el
    /// check-in ya está puesto. El guard sobre check_in_time resuelve
    /// también la carrera de dos check-ins en paralelo.
    pub async fn check_in(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        check_in_time: NaiveTime,
    ) -> Result<AttendanceRecord, AppError> {
        let record = sqlx::query_as::<_, AttendanceRecord>(
            r#"
            INSERT INTO attendance_records (id, user_id, date, check_in_time, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, 'PRESENT', NOW(), NOW())
            ON CONFLICT (user_id, date)
            DO UPDATE SET check_in_time = EXCLUDED.check_in_time, updated_at = NOW()
            WHERE attendance_records.check_in_time IS NULL
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(date)
        .bind(check_in_time)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::Conflict("Ya has hecho check-in hoy".to_string()))?;

        Ok(record)
    }

    pub async fn find_by_user_and_date(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<Option<AttendanceRecord>, AppError> {
        let record = sqlx::query_as::<_, AttendanceRecord>(
            "SELECT * FROM attendance_records WHERE user_id = $1 AND date = $2",
        )
        .bind(user_id)
        .bind(date)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    /// Registrar el check-out. Solo muta registros sin check-out previo;
    /// después el registro es inmutable.
    pub async fn check_out(
        &self,
        id: Uuid,
        check_out_time: NaiveTime,
        status: AttendanceStatus,
    ) -> Result<AttendanceRecord, AppError> {
        let record = sqlx::query_as::<_, AttendanceRecord>(
            r#"
            UPDATE attendance_records
            SET check_out_time = $2, status = $3, updated_at = NOW()
            WHERE id = $1 AND check_out_time IS NULL
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(check_out_time)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::Conflict("Ya has hecho check-out hoy".to_string()))?;

        Ok(record)
    }

    pub async fn list_for_user_range(
        &self,
        user_id: Uuid,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<AttendanceRecord>, AppError> {
        let records = sqlx::query_as::<_, AttendanceRecord>(
            r#"
            SELECT * FROM attendance_records
            WHERE user_id = $1 AND date BETWEEN $2 AND $3
            ORDER BY date DESC
            "#,
        )
        .bind(user_id)
        .bind(start_date)
        .bind(end_date)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// Vista de Admin: asistencia de todos los empleados en un rango,
    /// opcionalmente filtrada por employee_id
    pub async fn list_all_range(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
        employee_id: Option<&str>,
    ) -> Result<Vec<AttendanceWithEmployeeRow>, AppError> {
        let rows = sqlx::query_as::<_, AttendanceWithEmployeeRow>(
            r#"
            SELECT a.id, a.user_id, u.employee_id, u.full_name, a.date,
                   a.check_in_time, a.check_out_time, a.status
            FROM attendance_records a
            JOIN users u ON u.id = a.user_id
            WHERE a.date BETWEEN $1 AND $2
              AND ($3::VARCHAR IS NULL OR u.employee_id = $3)
            ORDER BY a.date DESC, u.employee_id
            "#,
        )
        .bind(start_date)
        .bind(end_date)
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn recent_for_user(
        &self,
        user_id: Uuid,
        limit: i64,
    ) -> Result<Vec<AttendanceRecord>, AppError> {
        let records = sqlx::query_as::<_, AttendanceRecord>(
            "SELECT * FROM attendance_records WHERE user_id = $1 ORDER BY date DESC LIMIT $2",
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// Marcar un día como LEAVE al aprobar un permiso. Si ya hay registro
    /// ese día se actualiza su estado, si no se crea uno.
    pub async fn upsert_leave_day(&self, user_id: Uuid, date: NaiveDate) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO attendance_records (id, user_id, date, status, created_at, updated_at)
            VALUES ($1, $2, $3, 'LEAVE', NOW(), NOW())
            ON CONFLICT (user_id, date)
            DO UPDATE SET status = 'LEAVE', updated_at = NOW()
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(date)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn count_present_on(&self, date: NaiveDate) -> Result<i64, AppError> {
        let result: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM attendance_records WHERE date = $1 AND status = 'PRESENT'",
        )
        .bind(date)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }
}
