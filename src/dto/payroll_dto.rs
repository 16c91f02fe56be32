use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::payroll::Payroll;
use crate::models::profile::EmployeeProfile;

/// Request de actualización de estructura salarial (Admin)
#[derive(Debug, Deserialize)]
pub struct SalaryStructureRequest {
    pub base_salary: Decimal,
    #[serde(default)]
    pub allowances: Decimal,
    #[serde(default)]
    pub deductions: Decimal,
}

/// Estructura salarial con el neto calculado para mostrar
#[derive(Debug, Clone, Serialize)]
pub struct SalaryStructureResponse {
    pub base_salary: Decimal,
    pub allowances: Decimal,
    pub deductions: Decimal,
    pub net_salary: Decimal,
}

impl From<&EmployeeProfile> for SalaryStructureResponse {
    fn from(profile: &EmployeeProfile) -> Self {
        Self {
            base_salary: profile.base_salary,
            allowances: profile.allowances,
            deductions: profile.deductions,
            net_salary: profile.net_salary(),
        }
    }
}

/// Request de generación de nómina mensual (Admin)
#[derive(Debug, Deserialize)]
pub struct GeneratePayrollRequest {
    pub month: i32,
    pub year: i32,
}

/// Query params de GET /api/payroll/records
#[derive(Debug, Default, Deserialize)]
pub struct PayrollRecordsQuery {
    pub month: Option<i32>,
    pub year: Option<i32>,
}

/// Response de un registro de nómina
#[derive(Debug, Clone, Serialize)]
pub struct PayrollResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub month: i32,
    pub year: i32,
    pub base_salary: Decimal,
    pub allowances: Decimal,
    pub deductions: Decimal,
    pub net_salary: Decimal,
    pub generated_at: DateTime<Utc>,
}

impl From<Payroll> for PayrollResponse {
    fn from(payroll: Payroll) -> Self {
        Self {
            id: payroll.id,
            user_id: payroll.user_id,
            month: payroll.month,
            year: payroll.year,
            base_salary: payroll.base_salary,
            allowances: payroll.allowances,
            deductions: payroll.deductions,
            net_salary: payroll.net_salary,
            generated_at: payroll.generated_at,
        }
    }
}

/// Vista de nómina del propio empleado
#[derive(Debug, Serialize)]
pub struct MyPayrollResponse {
    pub salary_structure: SalaryStructureResponse,
    pub records: Vec<PayrollResponse>,
}

/// Resumen de una corrida de generación de nómina
#[derive(Debug, Serialize)]
pub struct GeneratePayrollResponse {
    pub month: i32,
    pub year: i32,
    pub generated_count: usize,
    pub skipped_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::payroll::net_salary;

    #[test]
    fn test_salary_structure_net() {
        let base: Decimal = "1000.00".parse().unwrap();
        let allowances: Decimal = "100.00".parse().unwrap();
        let deductions: Decimal = "50.00".parse().unwrap();
        assert_eq!(
            net_salary(base, allowances, deductions),
            "1050.00".parse::<Decimal>().unwrap()
        );
    }
}
