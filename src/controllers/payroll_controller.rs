//! Controller de nómina
//!
//! El empleado lee su propia estructura salarial; el Admin la edita y
//! genera la nómina mensual. No hay más cálculo que el neto mostrado:
//! base + complementos - deducciones.

use chrono::{Datelike, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::payroll_dto::{
    GeneratePayrollRequest, GeneratePayrollResponse, MyPayrollResponse, PayrollRecordsQuery,
    PayrollResponse, SalaryStructureRequest, SalaryStructureResponse,
};
use crate::middleware::auth::AuthenticatedUser;
use crate::models::payroll::net_salary;
use crate::repositories::payroll_repository::PayrollRepository;
use crate::repositories::profile_repository::ProfileRepository;
use crate::utils::errors::{not_found_error, AppError};
use crate::utils::validation::{validate_month, validate_year};

pub struct PayrollController {
    payrolls: PayrollRepository,
    profiles: ProfileRepository,
}

impl PayrollController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            payrolls: PayrollRepository::new(pool.clone()),
            profiles: ProfileRepository::new(pool),
        }
    }

    /// Vista de solo lectura del propio empleado
    pub async fn my_payroll(&self, user: &AuthenticatedUser) -> Result<MyPayrollResponse, AppError> {
        let profile = self
            .profiles
            .find_by_user(user.user_id)
            .await?
            .ok_or_else(|| not_found_error("Profile", &user.user_id.to_string()))?;

        let records = self.payrolls.list_for_user(user.user_id).await?;

        Ok(MyPayrollResponse {
            salary_structure: SalaryStructureResponse::from(&profile),
            records: records.into_iter().map(PayrollResponse::from).collect(),
        })
    }

    /// Estructura salarial de cualquier perfil (Admin)
    pub async fn salary_structure(
        &self,
        user_id: Uuid,
    ) -> Result<SalaryStructureResponse, AppError> {
        let profile = self
            .profiles
            .find_by_user(user_id)
            .await?
            .ok_or_else(|| not_found_error("Profile", &user_id.to_string()))?;

        Ok(SalaryStructureResponse::from(&profile))
    }

    /// Actualizar la estructura salarial de un perfil (Admin)
    pub async fn update_salary_structure(
        &self,
        user_id: Uuid,
        request: SalaryStructureRequest,
    ) -> Result<SalaryStructureResponse, AppError> {
        validate_salary_figures(&request)?;

        let profile = self
            .profiles
            .update_salary(
                user_id,
                request.base_salary,
                request.allowances,
                request.deductions,
            )
            .await?;

        Ok(SalaryStructureResponse::from(&profile))
    }

    /// Generar la nómina de un mes para todos los empleados activos.
    /// Los perfiles sin estructura salarial definida se omiten.
    pub async fn generate(
        &self,
        request: GeneratePayrollRequest,
    ) -> Result<GeneratePayrollResponse, AppError> {
        validate_month(request.month)?;
        validate_year(request.year)?;

        let profiles = self.profiles.list_active_employees().await?;

        let mut generated_count = 0;
        let mut skipped_count = 0;

        for profile in profiles {
            if profile.base_salary == Decimal::ZERO {
                skipped_count += 1;
                continue;
            }

            self.payrolls
                .upsert(
                    profile.user_id,
                    request.month,
                    request.year,
                    profile.base_salary,
                    profile.allowances,
                    profile.deductions,
                    net_salary(profile.base_salary, profile.allowances, profile.deductions),
                )
                .await?;
            generated_count += 1;
        }

        tracing::info!(
            "💰 Nómina {}/{} generada para {} empleados ({} omitidos)",
            request.month,
            request.year,
            generated_count,
            skipped_count
        );

        Ok(GeneratePayrollResponse {
            month: request.month,
            year: request.year,
            generated_count,
            skipped_count,
        })
    }

    /// Vista mensual de Admin; por defecto el mes en curso
    pub async fn records(
        &self,
        query: PayrollRecordsQuery,
    ) -> Result<Vec<PayrollResponse>, AppError> {
        let now = Utc::now();
        let month = query.month.unwrap_or(now.month() as i32);
        let year = query.year.unwrap_or(now.year());

        validate_month(month)?;
        validate_year(year)?;

        let records = self.payrolls.list_for_month(month, year).await?;

        Ok(records.into_iter().map(PayrollResponse::from).collect())
    }
}

fn validate_salary_figures(request: &SalaryStructureRequest) -> Result<(), AppError> {
    if request.base_salary < Decimal::ZERO
        || request.allowances < Decimal::ZERO
        || request.deductions < Decimal::ZERO
    {
        return Err(AppError::Validation(
            "Los importes salariales no pueden ser negativos".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(value: &str) -> Decimal {
        value.parse().unwrap()
    }

    #[test]
    fn test_negative_salary_rejected() {
        let request = SalaryStructureRequest {
            base_salary: dec("-1"),
            allowances: Decimal::ZERO,
            deductions: Decimal::ZERO,
        };
        assert!(validate_salary_figures(&request).is_err());
    }

    #[test]
    fn test_zero_salary_allowed() {
        let request = SalaryStructureRequest {
            base_salary: Decimal::ZERO,
            allowances: Decimal::ZERO,
            deductions: Decimal::ZERO,
        };
        assert!(validate_salary_figures(&request).is_ok());
    }
}
