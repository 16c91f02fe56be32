//! Repositorios de acceso a datos
//!
//! Un repositorio por entidad; cada uno es dueño de su SQL. Los
//! controllers no tocan la base de datos directamente.

pub mod attendance_repository;
pub mod leave_repository;
pub mod payroll_repository;
pub mod profile_repository;
pub mod user_repository;
