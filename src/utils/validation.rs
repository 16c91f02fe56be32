//! Utilidades de validación
//!
//! Reglas de formato que el derive de validator no cubre: employee_id,
//! rangos de fechas y mes/año de nómina.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

use crate::utils::errors::AppError;

lazy_static! {
    // E00001 para empleados, HR00001 para admins
    static ref EMPLOYEE_ID_RE: Regex = Regex::new(r"^(E|HR)\d{1,18}$").unwrap();
}

/// Validar formato de employee_id
pub fn validate_employee_id(value: &str) -> Result<(), AppError> {
    if !EMPLOYEE_ID_RE.is_match(value) {
        return Err(AppError::Validation(format!(
            "employee_id '{}' inválido: se espera prefijo E o HR seguido de dígitos",
            value
        )));
    }
    Ok(())
}

/// Validar rango de fechas (start <= end)
pub fn validate_date_range(start: NaiveDate, end: NaiveDate) -> Result<(), AppError> {
    if start > end {
        return Err(AppError::Validation(
            "start_date debe ser anterior o igual a end_date".to_string(),
        ));
    }
    Ok(())
}

/// Validar mes de nómina
pub fn validate_month(month: i32) -> Result<(), AppError> {
    if !(1..=12).contains(&month) {
        return Err(AppError::Validation(format!("Mes '{}' inválido", month)));
    }
    Ok(())
}

/// Validar año de nómina
pub fn validate_year(year: i32) -> Result<(), AppError> {
    if year < 2020 {
        return Err(AppError::Validation(format!("Año '{}' inválido", year)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_employee_id() {
        assert!(validate_employee_id("E00001").is_ok());
        assert!(validate_employee_id("HR00042").is_ok());
        assert!(validate_employee_id("X00001").is_err());
        assert!(validate_employee_id("E").is_err());
        assert!(validate_employee_id("00001").is_err());
    }

    #[test]
    fn test_validate_date_range() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 12).unwrap();
        assert!(validate_date_range(start, end).is_ok());
        assert!(validate_date_range(start, start).is_ok());
        assert!(validate_date_range(end, start).is_err());
    }

    #[test]
    fn test_validate_month_year() {
        assert!(validate_month(1).is_ok());
        assert!(validate_month(12).is_ok());
        assert!(validate_month(0).is_err());
        assert!(validate_month(13).is_err());
        assert!(validate_year(2024).is_ok());
        assert!(validate_year(2019).is_err());
    }
}
