//! Dayflow HRMS - API backend
//!
//! Sistema de gestión de RRHH: onboarding, asistencia, permisos y
//! nómina, con login en dos fases (credenciales + OTP por correo) y
//! acceso por rol (EMPLOYEE / ADMIN).

pub mod clients;
pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;
