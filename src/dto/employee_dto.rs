use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::dto::auth_dto::UserResponse;
use crate::models::profile::{EmployeeProfile, EmploymentType};
use crate::models::user::Role;

/// Request de onboarding por Admin (employee_id autogenerado)
#[derive(Debug, Deserialize, Validate)]
pub struct CreateEmployeeRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 2, max = 100))]
    pub full_name: String,

    pub phone: Option<String>,

    pub role: Role,

    #[validate(length(min = 8, max = 100))]
    pub password: String,
}

/// Distinguir campo ausente (sin cambios) de campo null (borrar):
/// ausente -> None, null -> Some(None), valor -> Some(Some(v))
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

/// Request de edición de empleado por Admin
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateEmployeeRequest {
    #[validate(length(min = 2, max = 100))]
    pub full_name: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "double_option")]
    pub phone: Option<Option<String>>,

    #[validate(length(min = 1, max = 100))]
    pub department: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub position: Option<String>,

    pub employment_type: Option<EmploymentType>,

    pub date_joined: Option<NaiveDate>,
}

/// Request de autoservicio: campos que un empleado puede editarse
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateMeRequest {
    #[serde(default, deserialize_with = "double_option")]
    pub phone: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    pub address: Option<Option<String>>,
}

/// Response de perfil (sin estructura salarial; eso vive en payroll)
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub department: String,
    pub position: String,
    pub employment_type: EmploymentType,
    pub date_joined: NaiveDate,
    pub address: Option<String>,
}

impl From<EmployeeProfile> for ProfileResponse {
    fn from(profile: EmployeeProfile) -> Self {
        Self {
            department: profile.department,
            position: profile.position,
            employment_type: profile.employment_type,
            date_joined: profile.date_joined,
            address: profile.address,
        }
    }
}

/// Response de detalle de empleado: usuario + perfil
#[derive(Debug, Serialize)]
pub struct EmployeeDetailResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    pub profile: ProfileResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_me_field_missing_means_no_change() {
        let request: UpdateMeRequest = serde_json::from_str("{}").unwrap();
        assert!(request.phone.is_none());
        assert!(request.address.is_none());
    }

    #[test]
    fn test_update_me_null_clears_field() {
        let request: UpdateMeRequest = serde_json::from_str(r#"{"phone": null}"#).unwrap();
        assert_eq!(request.phone, Some(None));
        assert!(request.address.is_none());
    }

    #[test]
    fn test_update_me_value_sets_field() {
        let request: UpdateMeRequest =
            serde_json::from_str(r#"{"address": "Calle Mayor 1"}"#).unwrap();
        assert_eq!(request.address, Some(Some("Calle Mayor 1".to_string())));
    }

    #[test]
    fn test_update_employee_null_clears_phone() {
        let request: UpdateEmployeeRequest =
            serde_json::from_str(r#"{"phone": null}"#).unwrap();
        assert_eq!(request.phone, Some(None));
    }
}
