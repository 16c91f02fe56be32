//! Controller de dashboards
//!
//! Tarjetas de acceso rápido para el empleado y estadísticas globales
//! para el Admin. Todo es de solo lectura.

use chrono::Utc;
use sqlx::PgPool;

use crate::dto::attendance_dto::AttendanceResponse;
use crate::dto::dashboard_dto::{AdminDashboardResponse, EmployeeDashboardResponse};
use crate::dto::leave_dto::LeaveResponse;
use crate::dto::payroll_dto::PayrollResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::user::Role;
use crate::repositories::attendance_repository::AttendanceRepository;
use crate::repositories::leave_repository::LeaveRepository;
use crate::repositories::payroll_repository::PayrollRepository;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::AppError;

const RECENT_ATTENDANCE_DAYS: i64 = 7;
const RECENT_LEAVES: i64 = 5;

pub struct DashboardController {
    users: UserRepository,
    attendance: AttendanceRepository,
    leaves: LeaveRepository,
    payrolls: PayrollRepository,
}

impl DashboardController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            attendance: AttendanceRepository::new(pool.clone()),
            leaves: LeaveRepository::new(pool.clone()),
            payrolls: PayrollRepository::new(pool),
        }
    }

    pub async fn employee_dashboard(
        &self,
        user: &AuthenticatedUser,
    ) -> Result<EmployeeDashboardResponse, AppError> {
        let today = Utc::now().date_naive();

        let recent = self
            .attendance
            .recent_for_user(user.user_id, RECENT_ATTENDANCE_DAYS)
            .await?;
        let pending_leaves = self.leaves.count_pending_for_user(user.user_id).await?;
        let latest_payroll = self.payrolls.latest_for_user(user.user_id).await?;
        let today_attendance = self
            .attendance
            .find_by_user_and_date(user.user_id, today)
            .await?;

        Ok(EmployeeDashboardResponse {
            recent_attendance: recent.into_iter().map(AttendanceResponse::from).collect(),
            pending_leaves,
            latest_payroll: latest_payroll.map(PayrollResponse::from),
            today_attendance: today_attendance.map(AttendanceResponse::from),
        })
    }

    pub async fn admin_dashboard(&self) -> Result<AdminDashboardResponse, AppError> {
        let today = Utc::now().date_naive();

        let total_employees = self.users.count_by_role(Role::Employee).await?;
        let pending_leaves = self.leaves.count_pending().await?;
        let present_today = self.attendance.count_present_on(today).await?;
        let recent_leaves = self.leaves.recent(RECENT_LEAVES).await?;

        Ok(AdminDashboardResponse {
            total_employees,
            pending_leaves,
            present_today,
            recent_leaves: recent_leaves.into_iter().map(LeaveResponse::from).collect(),
        })
    }
}
