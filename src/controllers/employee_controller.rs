//! Controller de empleados y perfiles
//!
//! Autoservicio limitado para el propio usuario (/me) y gestión
//! completa para Admin: onboarding con employee_id autogenerado,
//! edición de perfil y desactivación (nunca borrado físico).

use std::collections::HashMap;

use bcrypt::{hash, DEFAULT_COST};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::auth_dto::UserResponse;
use crate::dto::employee_dto::{
    CreateEmployeeRequest, EmployeeDetailResponse, ProfileResponse, UpdateEmployeeRequest,
    UpdateMeRequest,
};
use crate::middleware::auth::AuthenticatedUser;
use crate::models::user::UserStatus;
use crate::repositories::profile_repository::ProfileRepository;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::{conflict_error, not_found_error, AppError};

pub struct EmployeeController {
    users: UserRepository,
    profiles: ProfileRepository,
}

impl EmployeeController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            profiles: ProfileRepository::new(pool),
        }
    }

    /// Perfil propio (cualquier rol)
    pub async fn me(&self, user: &AuthenticatedUser) -> Result<EmployeeDetailResponse, AppError> {
        self.detail(user.user_id).await
    }

    /// Autoservicio: solo phone y address. Campo ausente = sin cambios,
    /// null explícito = borrar el valor.
    pub async fn update_me(
        &self,
        user: &AuthenticatedUser,
        request: UpdateMeRequest,
    ) -> Result<EmployeeDetailResponse, AppError> {
        request.validate()?;

        if let Some(phone) = &request.phone {
            self.users.update_phone(user.user_id, phone.as_deref()).await?;
        }
        if let Some(address) = &request.address {
            self.profiles
                .update_address(user.user_id, address.as_deref())
                .await?;
        }

        self.detail(user.user_id).await
    }

    /// Onboarding por Admin con employee_id autogenerado; los usuarios
    /// creados por Admin nacen verificados
    pub async fn create(
        &self,
        request: CreateEmployeeRequest,
    ) -> Result<EmployeeDetailResponse, AppError> {
        request.validate()?;

        if self.users.email_exists(&request.email).await? {
            return Err(conflict_error("User", "email", &request.email));
        }

        let employee_id = self
            .users
            .next_employee_id(request.role.employee_id_prefix())
            .await?;

        let password_hash = hash(&request.password, DEFAULT_COST)
            .map_err(|e| AppError::Internal(format!("Error hashing password: {}", e)))?;

        let user = self
            .users
            .create(
                &employee_id,
                &request.email,
                &password_hash,
                &request.full_name,
                request.phone.as_deref(),
                request.role,
                true,
            )
            .await?;

        let profile = self.profiles.create_default(user.id).await?;

        tracing::info!("👤 Usuario {} creado por Admin", user.employee_id);

        Ok(EmployeeDetailResponse {
            user: UserResponse::from(user),
            profile: ProfileResponse::from(profile),
        })
    }

    pub async fn list(&self) -> Result<Vec<EmployeeDetailResponse>, AppError> {
        let users = self.users.list_all().await?;
        let mut profiles: HashMap<Uuid, _> = self
            .profiles
            .list_all()
            .await?
            .into_iter()
            .map(|p| (p.user_id, p))
            .collect();

        let mut result = Vec::with_capacity(users.len());
        for user in users {
            let Some(profile) = profiles.remove(&user.id) else {
                // Usuario sin perfil: inconsistencia de datos, se omite
                tracing::warn!("Usuario {} sin perfil", user.employee_id);
                continue;
            };
            result.push(EmployeeDetailResponse {
                user: UserResponse::from(user),
                profile: ProfileResponse::from(profile),
            });
        }

        Ok(result)
    }

    pub async fn get(&self, user_id: Uuid) -> Result<EmployeeDetailResponse, AppError> {
        self.detail(user_id).await
    }

    /// Edición completa por Admin: datos de contacto y de puesto
    pub async fn update(
        &self,
        user_id: Uuid,
        request: UpdateEmployeeRequest,
    ) -> Result<EmployeeDetailResponse, AppError> {
        request.validate()?;

        let current = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| not_found_error("User", &user_id.to_string()))?;

        let phone = match &request.phone {
            Some(value) => value.as_deref(),
            None => current.phone.as_deref(),
        };

        self.users
            .update_contact(
                user_id,
                request.full_name.as_deref().unwrap_or(&current.full_name),
                request.email.as_deref().unwrap_or(&current.email),
                phone,
            )
            .await?;

        self.profiles
            .update_job_details(
                user_id,
                request.department,
                request.position,
                request.employment_type,
                request.date_joined,
            )
            .await?;

        self.detail(user_id).await
    }

    /// Desactivar en lugar de borrar
    pub async fn deactivate(&self, user_id: Uuid) -> Result<(), AppError> {
        self.users.set_status(user_id, UserStatus::Inactive).await?;
        tracing::info!("🚫 Usuario {} desactivado", user_id);
        Ok(())
    }

    async fn detail(&self, user_id: Uuid) -> Result<EmployeeDetailResponse, AppError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| not_found_error("User", &user_id.to_string()))?;

        let profile = self
            .profiles
            .find_by_user(user_id)
            .await?
            .ok_or_else(|| not_found_error("Profile", &user_id.to_string()))?;

        Ok(EmployeeDetailResponse {
            user: UserResponse::from(user),
            profile: ProfileResponse::from(profile),
        })
    }
}
