//! Modelos de dominio del HRMS
//!
//! Cada struct mapea exactamente a su tabla en PostgreSQL.

pub mod attendance;
pub mod leave;
pub mod payroll;
pub mod profile;
pub mod user;
