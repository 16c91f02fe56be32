//! Modelo de AttendanceRecord
//!
//! Un registro por (user, date), garantizado por UNIQUE en la base de
//! datos. Se crea en el check-in, se muta una sola vez en el check-out
//! y queda inmutable después.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado diario de asistencia
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "VARCHAR", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttendanceStatus {
    Present,
    Absent,
    HalfDay,
    Leave,
}

/// AttendanceRecord - mapea exactamente a la tabla attendance_records
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AttendanceRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub check_in_time: Option<NaiveTime>,
    pub check_out_time: Option<NaiveTime>,
    pub status: AttendanceStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AttendanceRecord {
    /// Horas trabajadas entre check-in y check-out (0 si falta alguno)
    pub fn hours_worked(&self) -> f64 {
        match (self.check_in_time, self.check_out_time) {
            (Some(check_in), Some(check_out)) => {
                let start = NaiveDateTime::new(self.date, check_in);
                let end = NaiveDateTime::new(self.date, check_out);
                let seconds = (end - start).num_seconds();
                if seconds <= 0 {
                    return 0.0;
                }
                (seconds as f64 / 3600.0 * 100.0).round() / 100.0
            }
            _ => 0.0,
        }
    }
}

/// Estado derivado de las horas trabajadas al momento del check-out
pub fn status_for_hours(hours: f64) -> AttendanceStatus {
    if hours >= 8.0 {
        AttendanceStatus::Present
    } else if hours >= 4.0 {
        AttendanceStatus::HalfDay
    } else {
        AttendanceStatus::Absent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(check_in: Option<&str>, check_out: Option<&str>) -> AttendanceRecord {
        let now = Utc::now();
        AttendanceRecord {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            check_in_time: check_in.map(|t| t.parse().unwrap()),
            check_out_time: check_out.map(|t| t.parse().unwrap()),
            status: AttendanceStatus::Absent,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_hours_worked_full_day() {
        let rec = record(Some("09:00:00"), Some("18:00:00"));
        assert_eq!(rec.hours_worked(), 9.0);
    }

    #[test]
    fn test_hours_worked_with_minutes() {
        let rec = record(Some("09:00:00"), Some("13:30:00"));
        assert_eq!(rec.hours_worked(), 4.5);
    }

    #[test]
    fn test_hours_worked_without_checkout() {
        let rec = record(Some("09:00:00"), None);
        assert_eq!(rec.hours_worked(), 0.0);
    }

    #[test]
    fn test_status_for_hours() {
        assert_eq!(status_for_hours(9.0), AttendanceStatus::Present);
        assert_eq!(status_for_hours(8.0), AttendanceStatus::Present);
        assert_eq!(status_for_hours(5.5), AttendanceStatus::HalfDay);
        assert_eq!(status_for_hours(2.0), AttendanceStatus::Absent);
    }
}
