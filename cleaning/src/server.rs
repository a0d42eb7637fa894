use crate::api::router;
use crate::config::{InfraPool, ServerConfig, ServerConfigCli, TracingGuard};
use crate::migration::{Migrator, MigratorTrait};
use crate::signal::shutdown_signal;

pub struct LcmsServer {
    pub config: ServerConfig,
    pub infra_pool: InfraPool,
}

impl LcmsServer {
    pub async fn main(cli: ServerConfigCli) {
        match ServerConfig::new(&cli) {
            Ok(config) => {
                let _guard = match config.setup_tracing_subscriber() {
                    Ok(guard) => guard,
                    Err(e) => {
                        eprintln!("{e}");
                        return;
                    }
                };
                match Self::setup(config).await {
                    Ok(server) => {
                        if let Err(e) = server.run().await {
                            tracing::error!("{}", e);
                        }
                    }
                    Err(e) => {
                        tracing::error!("{}", e);
                    }
                }
            }
            Err(e) => {
                eprintln!("{e}");
            }
        }
    }

    /// Applies pending migrations and exits.
    pub async fn migrate(cli: ServerConfigCli) {
        match ServerConfig::new(&cli) {
            Ok(config) => {
                let _guard: Option<TracingGuard> = config.setup_tracing_subscriber().ok();
                let res = async {
                    let db = sea_orm::Database::connect(&config.db_url).await?;
                    Migrator::up(&db, None).await?;
                    Ok::<_, crate::error::Error>(())
                }
                .await;
                match res {
                    Ok(()) => tracing::info!("Database is up to date"),
                    Err(e) => tracing::error!("{}", e),
                }
            }
            Err(e) => {
                eprintln!("{e}");
            }
        }
    }

    pub async fn setup(config: ServerConfig) -> crate::error::Result<Self> {
        tracing::debug!("Server is setting up");
        let infra_pool = config.build_infra_pool().await?;
        // Setup database
        Migrator::up(&infra_pool.db, None).await?;
        Ok(Self { config, infra_pool })
    }

    pub async fn run(self) -> crate::error::Result<()> {
        tracing::debug!("Server is running");
        let LcmsServer { config, infra_pool } = self;
        let app = router(infra_pool).layer(config.build_cors_layer()?);
        let addr = config.bind();
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server is listening on: {}", addr);
        if let Err(e) = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
        {
            tracing::error!("Server error: {}", e);
        }
        tracing::info!("Server shutdown complete");
        Ok(())
    }
}
