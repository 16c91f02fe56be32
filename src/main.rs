use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use dayflow_hrms::config::EnvironmentConfig;
use dayflow_hrms::state::AppState;
use dayflow_hrms::{database, routes};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🏢 Dayflow HRMS - API");
    info!("=====================");

    let config = EnvironmentConfig::from_env();

    // Inicializar base de datos
    if let Ok(url) = std::env::var("DATABASE_URL") {
        info!("🐘 Conectando a {}", database::connection::mask_database_url(&url));
    }
    let pool = match database::create_pool(None).await {
        Ok(pool) => {
            info!("✅ Base de datos conectada");
            pool
        }
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let addr: SocketAddr = config.server_addr().parse()?;
    let app_state = AppState::new(pool, config);

    let app = routes::create_app(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🔐 Auth:");
    info!("   POST /api/auth/signup - Alta de usuario");
    info!("   POST /api/auth/login - Login (fase 1: envía OTP)");
    info!("   POST /api/auth/verify-otp - Confirmar OTP y obtener sesión");
    info!("   POST /api/auth/resend-otp - Reenviar OTP");
    info!("⏱️ Asistencia:");
    info!("   POST /api/attendance/checkin - Check-in del día");
    info!("   POST /api/attendance/checkout - Check-out del día");
    info!("   GET  /api/attendance?scope=self|all - Vista por rango");
    info!("📋 Permisos:");
    info!("   POST /api/leave/apply - Solicitar permiso");
    info!("   GET  /api/leave - Historial de permisos");
    info!("   POST /api/leave/:id/decide - Aprobar/rechazar (Admin)");
    info!("👤 Empleados:");
    info!("   GET  /api/me - Perfil propio");
    info!("   PUT  /api/me - Autoservicio (phone/address)");
    info!("   GET  /api/employees - Listar empleados (Admin)");
    info!("   POST /api/employees - Onboarding (Admin)");
    info!("   GET  /api/employees/:id - Detalle (Admin)");
    info!("   PUT  /api/employees/:id - Editar (Admin)");
    info!("   POST /api/employees/:id/deactivate - Desactivar (Admin)");
    info!("💰 Nómina:");
    info!("   GET  /api/payroll - Nómina propia");
    info!("   GET  /api/payroll/:user_id - Estructura salarial (Admin)");
    info!("   PUT  /api/payroll/:user_id - Actualizar estructura (Admin)");
    info!("   POST /api/payroll/generate - Generar nómina mensual (Admin)");
    info!("   GET  /api/payroll/records - Vista mensual (Admin)");
    info!("📊 Dashboards:");
    info!("   GET  /api/dashboard - Dashboard del empleado");
    info!("   GET  /api/dashboard/admin - Dashboard del Admin");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
