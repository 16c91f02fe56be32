//! Modelo de Payroll
//!
//! Foto mensual de la estructura salarial de cada empleado, generada
//! por un Admin. UNIQUE (user_id, month, year).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Payroll - mapea exactamente a la tabla payrolls
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Payroll {
    pub id: Uuid,
    pub user_id: Uuid,
    pub month: i32,
    pub year: i32,
    pub base_salary: Decimal,
    pub allowances: Decimal,
    pub deductions: Decimal,
    pub net_salary: Decimal,
    pub generated_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Salario neto: base + complementos - deducciones
pub fn net_salary(base: Decimal, allowances: Decimal, deductions: Decimal) -> Decimal {
    base + allowances - deductions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_net_salary() {
        let base: Decimal = "2500.00".parse().unwrap();
        let allowances: Decimal = "300.00".parse().unwrap();
        let deductions: Decimal = "150.00".parse().unwrap();
        assert_eq!(
            net_salary(base, allowances, deductions),
            "2650.00".parse::<Decimal>().unwrap()
        );
    }
}
