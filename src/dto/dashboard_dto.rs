use serde::Serialize;

use crate::dto::attendance_dto::AttendanceResponse;
use crate::dto::leave_dto::LeaveResponse;
use crate::dto::payroll_dto::PayrollResponse;

/// Dashboard del empleado: tarjetas de acceso rápido
#[derive(Debug, Serialize)]
pub struct EmployeeDashboardResponse {
    pub recent_attendance: Vec<AttendanceResponse>,
    pub pending_leaves: i64,
    pub latest_payroll: Option<PayrollResponse>,
    pub today_attendance: Option<AttendanceResponse>,
}

/// Dashboard del Admin: estadísticas globales
#[derive(Debug, Serialize)]
pub struct AdminDashboardResponse {
    pub total_employees: i64,
    pub pending_leaves: i64,
    pub present_today: i64,
    pub recent_leaves: Vec<LeaveResponse>,
}
