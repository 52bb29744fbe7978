use sqlx::PgPool;
use std::sync::Arc;

use sports_server::adapters::PgSportRepository;
use sports_server::build_router;
use sports_server::config::ServerConfig;

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("Sports API initializing...");

    let config = ServerConfig::from_lookup(|key| secrets.get(key))
        .map_err(|e| shuttle_runtime::Error::Custom(e.into()))?;

    if config.run_migrations {
        sqlx::migrate!()
            .run(&pool)
            .await
            .map_err(|e| shuttle_runtime::Error::Custom(e.into()))?;

        tracing::info!("Database migrations completed");
    } else {
        tracing::warn!("Database migrations skipped");
    }

    let sport_repo = Arc::new(PgSportRepository::new(pool));
    let router = build_router(sport_repo, &config);

    tracing::info!("Swagger UI: /swagger-ui");
    tracing::info!("Sports API ready");

    Ok(router.into())
}
