//! Utilidades JWT
//!
//! Este módulo contiene funciones helper para emitir y verificar los
//! tokens de sesión. El token solo se emite después de confirmar el OTP.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{models::user::Role, utils::errors::AppError};

/// Claims del JWT token
#[derive(Debug, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String, // user_id
    pub employee_id: String,
    pub role: Role,
    pub exp: usize, // expiration timestamp
    pub iat: usize, // issued at timestamp
}

/// Generar JWT token para un usuario
pub fn generate_token(
    user_id: Uuid,
    employee_id: &str,
    role: Role,
    secret: &str,
    expiration_secs: u64,
) -> Result<String, AppError> {
    let now = chrono::Utc::now();
    let expires_at = now + chrono::Duration::seconds(expiration_secs as i64);

    let claims = JwtClaims {
        sub: user_id.to_string(),
        employee_id: employee_id.to_string(),
        role,
        exp: expires_at.timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    let encoding_key = EncodingKey::from_secret(secret.as_ref());

    encode(&Header::default(), &claims, &encoding_key)
        .map_err(|e| AppError::Jwt(format!("Error generando token: {}", e)))
}

/// Verificar y decodificar JWT token
pub fn verify_token(token: &str, secret: &str) -> Result<JwtClaims, AppError> {
    let decoding_key = DecodingKey::from_secret(secret.as_ref());

    let token_data = decode::<JwtClaims>(token, &decoding_key, &Validation::default())
        .map_err(|e| AppError::Jwt(format!("Token inválido: {}", e)))?;

    Ok(token_data.claims)
}

/// Extraer token del header Authorization
pub fn extract_token_from_header(auth_header: &str) -> Result<&str, AppError> {
    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Jwt("Header Authorization debe comenzar con 'Bearer '".to_string()))?;

    if token.is_empty() {
        return Err(AppError::Jwt("Token no puede estar vacío".to_string()));
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn test_generate_and_verify_roundtrip() {
        let user_id = Uuid::new_v4();
        let token = generate_token(user_id, "E00001", Role::Employee, SECRET, 3600).unwrap();
        let claims = verify_token(&token, SECRET).unwrap();

        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.employee_id, "E00001");
        assert_eq!(claims.role, Role::Employee);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_verify_with_wrong_secret_fails() {
        let token = generate_token(Uuid::new_v4(), "E00001", Role::Admin, SECRET, 3600).unwrap();
        assert!(verify_token(&token, "other-secret").is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        // la validación por defecto usa leeway de 60s, así que forzamos
        // un token vencido hace más de un minuto
        let now = chrono::Utc::now();
        let claims = JwtClaims {
            sub: Uuid::new_v4().to_string(),
            employee_id: "E00002".to_string(),
            role: Role::Employee,
            exp: (now.timestamp() - 120) as usize,
            iat: (now.timestamp() - 3600) as usize,
        };
        let expired = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_ref()),
        )
        .unwrap();
        assert!(verify_token(&expired, SECRET).is_err());
    }

    #[test]
    fn test_extract_token_from_header() {
        assert_eq!(extract_token_from_header("Bearer abc.def.ghi").unwrap(), "abc.def.ghi");
        assert!(extract_token_from_header("abc.def.ghi").is_err());
        assert!(extract_token_from_header("Bearer ").is_err());
    }
}
