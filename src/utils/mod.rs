//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, validación,
//! JWT y generación de OTP.

pub mod errors;
pub mod jwt;
pub mod otp;
pub mod validation;
