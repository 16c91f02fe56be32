use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::attendance::{AttendanceRecord, AttendanceStatus};

/// Alcance de la consulta de asistencia
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum AttendanceScope {
    #[default]
    #[serde(rename = "self")]
    Self_,
    #[serde(rename = "all")]
    All,
}

/// Query params de GET /api/attendance
#[derive(Debug, Default, Deserialize)]
pub struct AttendanceQuery {
    #[serde(default)]
    pub scope: AttendanceScope,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    // Solo relevante con scope=all (Admin)
    pub employee_id: Option<String>,
}

/// Response de un registro de asistencia
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceResponse {
    pub id: Uuid,
    pub date: NaiveDate,
    pub check_in_time: Option<NaiveTime>,
    pub check_out_time: Option<NaiveTime>,
    pub status: AttendanceStatus,
    pub hours_worked: f64,
}

impl From<AttendanceRecord> for AttendanceResponse {
    fn from(record: AttendanceRecord) -> Self {
        let hours_worked = record.hours_worked();
        Self {
            id: record.id,
            date: record.date,
            check_in_time: record.check_in_time,
            check_out_time: record.check_out_time,
            status: record.status,
            hours_worked,
        }
    }
}

/// Fila de asistencia con datos del empleado (vista de Admin)
#[derive(Debug, sqlx::FromRow)]
pub struct AttendanceWithEmployeeRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub employee_id: String,
    pub full_name: String,
    pub date: NaiveDate,
    pub check_in_time: Option<NaiveTime>,
    pub check_out_time: Option<NaiveTime>,
    pub status: AttendanceStatus,
}

#[derive(Debug, Serialize)]
pub struct AttendanceWithEmployeeResponse {
    pub id: Uuid,
    pub employee_id: String,
    pub full_name: String,
    pub date: NaiveDate,
    pub check_in_time: Option<NaiveTime>,
    pub check_out_time: Option<NaiveTime>,
    pub status: AttendanceStatus,
}

impl From<AttendanceWithEmployeeRow> for AttendanceWithEmployeeResponse {
    fn from(row: AttendanceWithEmployeeRow) -> Self {
        Self {
            id: row.id,
            employee_id: row.employee_id,
            full_name: row.full_name,
            date: row.date,
            check_in_time: row.check_in_time,
            check_out_time: row.check_out_time,
            status: row.status,
        }
    }
}
