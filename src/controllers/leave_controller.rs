//! Controller del flujo de permisos
//!
//! Un empleado crea solicitudes PENDING para sí mismo; un Admin las
//! decide. La decisión es un único UPDATE condicionado al estado
//! PENDING, así que una solicitud decidida es terminal.

use chrono::Days;
use sqlx::PgPool;
use validator::Validate;

use crate::dto::leave_dto::{ApplyLeaveRequest, DecideLeaveRequest, LeaveQuery, LeaveResponse};
use crate::middleware::auth::AuthenticatedUser;
use crate::models::leave::LeaveStatus;
use crate::repositories::attendance_repository::AttendanceRepository;
use crate::repositories::leave_repository::LeaveRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::validate_date_range;
use uuid::Uuid;

pub struct LeaveController {
    leaves: LeaveRepository,
    attendance: AttendanceRepository,
}

impl LeaveController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            leaves: LeaveRepository::new(pool.clone()),
            attendance: AttendanceRepository::new(pool),
        }
    }

    pub async fn apply(
        &self,
        user: &AuthenticatedUser,
        request: ApplyLeaveRequest,
    ) -> Result<LeaveResponse, AppError> {
        request.validate()?;
        validate_date_range(request.start_date, request.end_date)?;

        let leave = self
            .leaves
            .create(
                user.user_id,
                request.leave_type,
                request.start_date,
                request.end_date,
                request.remarks.as_deref(),
            )
            .await?;

        Ok(LeaveResponse::from(leave))
    }

    /// Historial: un Admin ve todas las solicitudes, un empleado solo
    /// las suyas. Nunca hay fuga de datos entre roles.
    pub async fn list(
        &self,
        user: &AuthenticatedUser,
        query: LeaveQuery,
    ) -> Result<Vec<LeaveResponse>, AppError> {
        let leaves = if user.is_admin() {
            self.leaves.list_all(query.status).await?
        } else {
            self.leaves.list_for_user(user.user_id, query.status).await?
        };

        Ok(leaves.into_iter().map(LeaveResponse::from).collect())
    }

    /// Decisión de Admin sobre una solicitud PENDING
    pub async fn decide(
        &self,
        admin: &AuthenticatedUser,
        leave_id: Uuid,
        request: DecideLeaveRequest,
    ) -> Result<LeaveResponse, AppError> {
        request.validate()?;
        let decision = request.decision.as_status();

        let decided = self
            .leaves
            .decide(leave_id, decision, admin.user_id, request.comments.as_deref())
            .await?;

        let leave = match decided {
            Some(leave) => leave,
            None => {
                // Distinguir inexistente de ya decidida
                return match self.leaves.find_by_id(leave_id).await? {
                    None => Err(AppError::NotFound("Leave request not found".to_string())),
                    Some(_) => Err(AppError::Conflict(
                        "Leave request has already been decided".to_string(),
                    )),
                };
            }
        };

        // Al aprobar, los días del permiso quedan marcados como LEAVE
        // en la asistencia
        if decision == LeaveStatus::Approved {
            let mut date = leave.start_date;
            while date <= leave.end_date {
                self.attendance.upsert_leave_day(leave.user_id, date).await?;
                date = date
                    .checked_add_days(Days::new(1))
                    .ok_or_else(|| AppError::Internal("Date overflow".to_string()))?;
            }
        }

        tracing::info!(
            "📋 Permiso {} {} por {}",
            leave.id,
            if decision == LeaveStatus::Approved { "aprobado" } else { "rechazado" },
            admin.employee_id
        );

        Ok(LeaveResponse::from(leave))
    }
}
