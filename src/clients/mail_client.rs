//! Cliente de correo saliente
//!
//! Este módulo envía los correos de OTP y alertas a través de una API
//! HTTP de correo. El envío es fire-and-forget desde el punto de vista
//! del core: un fallo de entrega se loguea y el usuario puede pedir
//! reenvío, nunca bloquea el login.

use serde_json::json;

use crate::config::EnvironmentConfig;
use crate::utils::errors::AppError;

#[derive(Clone)]
pub struct MailClient {
    http_client: reqwest::Client,
    api_url: Option<String>,
    api_key: Option<String>,
    from: String,
}

impl MailClient {
    pub fn new(config: &EnvironmentConfig) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            api_url: config.mail_api_url.clone(),
            api_key: config.mail_api_key.clone(),
            from: config.mail_from.clone(),
        }
    }

    /// Enviar un correo (recipient, subject, body)
    pub async fn send(&self, recipient: &str, subject: &str, body: &str) -> Result<(), AppError> {
        let Some(api_url) = &self.api_url else {
            // Modo log-only: sin transporte configurado se imprime el
            // correo en el log (desarrollo y tests)
            tracing::info!("📧 [mail log-only] to={} subject={} body={}", recipient, subject, body);
            return Ok(());
        };

        let mut request = self.http_client.post(api_url).json(&json!({
            "from": self.from,
            "to": [recipient],
            "subject": subject,
            "text": body,
        }));

        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Mail(format!("Error enviando correo: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Mail(format!(
                "La API de correo respondió {}",
                response.status()
            )));
        }

        Ok(())
    }

    /// Enviar en background sin bloquear la request actual
    pub fn send_fire_and_forget(&self, recipient: String, subject: String, body: String) {
        let client = self.clone();
        tokio::spawn(async move {
            if let Err(e) = client.send(&recipient, &subject, &body).await {
                tracing::warn!("Fallo de entrega de correo a {}: {}", recipient, e);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_only_client() -> MailClient {
        MailClient {
            http_client: reqwest::Client::new(),
            api_url: None,
            api_key: None,
            from: "no-reply@dayflow.local".to_string(),
        }
    }

    #[tokio::test]
    async fn test_log_only_mode_always_succeeds() {
        let client = log_only_client();
        let result = client.send("test@example.com", "Subject", "Body").await;
        assert!(result.is_ok());
    }
}
