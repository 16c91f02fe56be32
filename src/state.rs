//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. No hay sesiones globales: el principal
//! autenticado viaja como extension de cada request.

use sqlx::PgPool;

use crate::clients::MailClient;
use crate::config::EnvironmentConfig;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
    pub mailer: MailClient,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        let mailer = MailClient::new(&config);
        Self { pool, config, mailer }
    }
}
