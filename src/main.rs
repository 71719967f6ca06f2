use std::net::SocketAddr;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use concesionaria::config::database::DatabaseConfig;
use concesionaria::config::environment::EnvironmentConfig;
use concesionaria::config::quote_settings::QuoteSettings;
use concesionaria::database::DatabaseConnection;
use concesionaria::services::FinancingPlanCatalog;
use concesionaria::{create_app_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("🚗 Concesionaria - API de catálogo, cotizador y financiación");
    info!("==========================================================");

    let config = EnvironmentConfig::from_env().context("Configuración inválida")?;
    let quote_settings = QuoteSettings::from_env().context("Configuración del cotizador inválida")?;
    let db_config = DatabaseConfig::from_env().context("Configuración de base de datos inválida")?;

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::connect(&db_config).await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };
    db_connection
        .run_migrations()
        .await
        .context("Error aplicando migraciones")?;

    let plans = FinancingPlanCatalog::standard();
    info!(
        "💰 Cotizador: base ${}, {} planes de financiación",
        quote_settings.base_price,
        plans.len()
    );

    let addr: SocketAddr = config
        .server_url()
        .parse()
        .with_context(|| format!("Dirección inválida: {}", config.server_url()))?;
    if config.is_development() {
        info!("🛠️ Modo desarrollo");
    }

    let state = AppState::new(db_connection.into_pool(), config, quote_settings, plans);
    let app = create_app_router(state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /api/health - Health check");
    info!("🔐 Auth:");
    info!("   POST /api/auth/register - Registrar usuario");
    info!("   POST /api/auth/login - Login");
    info!("   GET  /api/auth/me - Usuario actual");
    info!("🚗 Vehículos:");
    info!("   GET  /api/vehiculos - Listar vehículos");
    info!("   GET  /api/vehiculos/destacados - Vehículos destacados");
    info!("   GET  /api/vehiculos/:id - Obtener vehículo");
    info!("   POST/PUT/DELETE /api/vehiculos[/:id] - Administrar catálogo (admin)");
    info!("💰 Cotizador y financiación:");
    info!("   POST /api/cotizar - Cotizar usado");
    info!("   GET  /api/cotizaciones - Historial de cotizaciones");
    info!("   GET  /api/planes - Listar planes");
    info!("   GET  /api/planes/:plan_id - Detalle de plan");
    info!("   POST /api/planes/:plan_id/calcular - Calcular cuotas");
    info!("👤 Área de clientes:");
    info!("   /api/favoritos, /api/turnos, /api/alertas, /api/usuario/stats");
    info!("✉️ Contacto:");
    info!("   POST /api/mensajes - Enviar mensaje");
    info!("   GET  /api/mensajes[/stats|/:id] - Bandeja (admin)");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo escuchar Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo escuchar SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
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
