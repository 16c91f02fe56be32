//! Controller de asistencia
//!
//! Check-in crea el registro del día, check-out lo muta una sola vez.
//! Las vistas son agregaciones de solo lectura por rango de fechas.

use chrono::{Datelike, NaiveDate, Utc};
use sqlx::PgPool;

use crate::dto::attendance_dto::{
    AttendanceQuery, AttendanceResponse, AttendanceScope, AttendanceWithEmployeeResponse,
};
use crate::middleware::auth::AuthenticatedUser;
use crate::models::attendance::status_for_hours;
use crate::repositories::attendance_repository::AttendanceRepository;
use crate::utils::errors::AppError;

pub struct AttendanceController {
    attendance: AttendanceRepository,
}

/// Resultado de GET /api/attendance según el scope pedido
#[derive(Debug, serde::Serialize)]
#[serde(untagged)]
pub enum AttendanceListing {
    Own(Vec<AttendanceResponse>),
    All(Vec<AttendanceWithEmployeeResponse>),
}

impl AttendanceController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            attendance: AttendanceRepository::new(pool),
        }
    }

    pub async fn check_in(&self, user: &AuthenticatedUser) -> Result<AttendanceResponse, AppError> {
        let now = Utc::now();
        let record = self
            .attendance
            .check_in(user.user_id, now.date_naive(), now.time())
            .await?;

        tracing::info!("⏱️ Check-in de {} a las {}", user.employee_id, now.time());

        Ok(AttendanceResponse::from(record))
    }

    pub async fn check_out(&self, user: &AuthenticatedUser) -> Result<AttendanceResponse, AppError> {
        let now = Utc::now();
        let today = now.date_naive();

        let record = self
            .attendance
            .find_by_user_and_date(user.user_id, today)
            .await?
            .ok_or_else(|| AppError::Conflict("Primero debes hacer check-in".to_string()))?;

        let check_in_time = record
            .check_in_time
            .ok_or_else(|| AppError::Conflict("Primero debes hacer check-in".to_string()))?;

        if record.check_out_time.is_some() {
            return Err(AppError::Conflict("Ya has hecho check-out hoy".to_string()));
        }

        let seconds = (now.time() - check_in_time).num_seconds().max(0);
        let hours = seconds as f64 / 3600.0;
        let status = status_for_hours(hours);

        let updated = self.attendance.check_out(record.id, now.time(), status).await?;

        tracing::info!(
            "⏱️ Check-out de {} a las {} ({:.2}h)",
            user.employee_id,
            now.time(),
            hours
        );

        Ok(AttendanceResponse::from(updated))
    }

    /// Vista por rango. scope=all requiere rol Admin; un empleado solo
    /// puede consultar sus propios registros.
    pub async fn list(
        &self,
        user: &AuthenticatedUser,
        query: AttendanceQuery,
    ) -> Result<AttendanceListing, AppError> {
        let today = Utc::now().date_naive();
        let start_date = query.start_date.unwrap_or_else(|| first_of_month(today));
        let end_date = query.end_date.unwrap_or(today);

        if start_date > end_date {
            return Err(AppError::Validation(
                "start_date debe ser anterior o igual a end_date".to_string(),
            ));
        }

        match query.scope {
            AttendanceScope::Self_ => {
                let records = self
                    .attendance
                    .list_for_user_range(user.user_id, start_date, end_date)
                    .await?;
                Ok(AttendanceListing::Own(
                    records.into_iter().map(AttendanceResponse::from).collect(),
                ))
            }
            AttendanceScope::All => {
                if !user.is_admin() {
                    return Err(AppError::Forbidden(
                        "Se requieren permisos de administrador".to_string(),
                    ));
                }
                let rows = self
                    .attendance
                    .list_all_range(start_date, end_date, query.employee_id.as_deref())
                    .await?;
                Ok(AttendanceListing::All(
                    rows.into_iter()
                        .map(AttendanceWithEmployeeResponse::from)
                        .collect(),
                ))
            }
        }
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_of_month() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 17).unwrap();
        assert_eq!(first_of_month(date), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }
}
