//! Modelo de LeaveRequest
//!
//! Máquina de estados: PENDING -> {APPROVED, REJECTED}, ambos terminales.
//! La transición la ejecuta solo un Admin y es un único UPDATE atómico
//! condicionado a status = 'PENDING'.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Tipo de permiso
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "VARCHAR", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaveType {
    Paid,
    Sick,
    Unpaid,
}

/// Estado del permiso
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "VARCHAR", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    /// Un permiso decidido ya no admite transiciones
    pub fn is_terminal(&self) -> bool {
        !matches!(self, LeaveStatus::Pending)
    }
}

/// LeaveRequest - mapea exactamente a la tabla leave_requests
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LeaveRequest {
    pub id: Uuid,
    pub user_id: Uuid,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub remarks: Option<String>,
    pub status: LeaveStatus,
    pub admin_comments: Option<String>,
    pub decided_by: Option<Uuid>,
    pub decided_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl LeaveRequest {
    /// Duración en días, ambos extremos incluidos
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(!LeaveStatus::Pending.is_terminal());
        assert!(LeaveStatus::Approved.is_terminal());
        assert!(LeaveStatus::Rejected.is_terminal());
    }

    #[test]
    fn test_duration_days_inclusive() {
        let now = Utc::now();
        let request = LeaveRequest {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            leave_type: LeaveType::Sick,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 12).unwrap(),
            remarks: None,
            status: LeaveStatus::Pending,
            admin_comments: None,
            decided_by: None,
            decided_at: None,
            created_at: now,
        };
        assert_eq!(request.duration_days(), 3);
    }
}
