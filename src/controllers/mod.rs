//! Controllers de la aplicación
//!
//! Reglas de negocio por recurso. Los handlers de rutas delegan aquí y
//! los controllers delegan el SQL a los repositorios.

pub mod attendance_controller;
pub mod auth_controller;
pub mod dashboard_controller;
pub mod employee_controller;
pub mod leave_controller;
pub mod payroll_controller;
