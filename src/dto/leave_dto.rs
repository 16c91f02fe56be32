use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::leave::{LeaveRequest, LeaveStatus, LeaveType};

/// Request de solicitud de permiso
#[derive(Debug, Deserialize, Validate)]
pub struct ApplyLeaveRequest {
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    #[validate(length(max = 1000))]
    pub remarks: Option<String>,
}

/// Decisión de un Admin sobre una solicitud PENDING
#[derive(Debug, Deserialize, Validate)]
pub struct DecideLeaveRequest {
    pub decision: LeaveDecision,

    #[validate(length(max = 1000))]
    pub comments: Option<String>,
}

/// Solo los dos estados terminales son decisiones válidas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaveDecision {
    Approved,
    Rejected,
}

impl LeaveDecision {
    pub fn as_status(&self) -> LeaveStatus {
        match self {
            LeaveDecision::Approved => LeaveStatus::Approved,
            LeaveDecision::Rejected => LeaveStatus::Rejected,
        }
    }
}

/// Query params de GET /api/leave
#[derive(Debug, Default, Deserialize)]
pub struct LeaveQuery {
    pub status: Option<LeaveStatus>,
}

/// Response de una solicitud de permiso
#[derive(Debug, Clone, Serialize)]
pub struct LeaveResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub duration_days: i64,
    pub remarks: Option<String>,
    pub status: LeaveStatus,
    pub admin_comments: Option<String>,
    pub decided_by: Option<Uuid>,
    pub decided_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<LeaveRequest> for LeaveResponse {
    fn from(request: LeaveRequest) -> Self {
        let duration_days = request.duration_days();
        Self {
            id: request.id,
            user_id: request.user_id,
            leave_type: request.leave_type,
            start_date: request.start_date,
            end_date: request.end_date,
            duration_days,
            remarks: request.remarks,
            status: request.status,
            admin_comments: request.admin_comments,
            decided_by: request.decided_by,
            decided_at: request.decided_at,
            created_at: request.created_at,
        }
    }
}
