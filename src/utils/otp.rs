//! Generación de códigos OTP
//!
//! Códigos numéricos de 6 dígitos para el segundo paso del login.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

pub const OTP_LENGTH: usize = 6;

/// Generar un código OTP de 6 dígitos
pub fn generate_otp() -> String {
    let code: u32 = rand::thread_rng().gen_range(0..1_000_000);
    format!("{:06}", code)
}

/// Calcular el instante de expiración de un OTP recién emitido
pub fn otp_expiry(ttl_minutes: i64) -> DateTime<Utc> {
    Utc::now() + Duration::minutes(ttl_minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_otp_is_six_digits() {
        for _ in 0..100 {
            let code = generate_otp();
            assert_eq!(code.len(), OTP_LENGTH);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_otp_expiry_in_future() {
        let expiry = otp_expiry(10);
        assert!(expiry > Utc::now());
        assert!(expiry <= Utc::now() + Duration::minutes(10));
    }
}
