//! DTOs de la API
//!
//! Requests y responses serializables por recurso.

pub mod attendance_dto;
pub mod auth_dto;
pub mod common;
pub mod dashboard_dto;
pub mod employee_dto;
pub mod leave_dto;
pub mod payroll_dto;

pub use common::ApiResponse;
