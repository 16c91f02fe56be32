//! Clientes de servicios externos

pub mod mail_client;

pub use mail_client::MailClient;
