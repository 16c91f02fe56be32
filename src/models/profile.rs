//! Modelo de EmployeeProfile
//!
//! Perfil uno-a-uno con User: datos de puesto y estructura salarial.
//! Solo un Admin puede modificarlo (salvo los campos de autoservicio
//! phone/address).

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Tipo de contrato
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "VARCHAR", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
}

/// EmployeeProfile - mapea exactamente a la tabla employee_profiles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EmployeeProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub department: String,
    pub position: String,
    pub employment_type: EmploymentType,
    pub date_joined: NaiveDate,
    pub address: Option<String>,
    pub base_salary: Decimal,
    pub allowances: Decimal,
    pub deductions: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl EmployeeProfile {
    /// Salario neto: base + complementos - deducciones
    pub fn net_salary(&self) -> Decimal {
        self.base_salary + self.allowances - self.deductions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(value: &str) -> Decimal {
        value.parse().unwrap()
    }

    #[test]
    fn test_net_salary() {
        let now = Utc::now();
        let profile = EmployeeProfile {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            department: "Engineering".to_string(),
            position: "Developer".to_string(),
            employment_type: EmploymentType::FullTime,
            date_joined: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            address: None,
            base_salary: dec("3000.00"),
            allowances: dec("500.00"),
            deductions: dec("250.50"),
            created_at: now,
            updated_at: now,
        };
        assert_eq!(profile.net_salary(), dec("3249.50"));
    }
}
