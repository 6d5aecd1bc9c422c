use anyhow::Context;
use catalogo::configuration::{get_configuration, StorageKind};
use catalogo::db::Store;
use catalogo::startup::run;
use catalogo::telemetry::{get_subscriber, init_subscriber};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use std::net::TcpListener;
use std::time::Duration;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("catalogo".into(), "info".into());
    init_subscriber(subscriber)?;

    let settings = get_configuration().context("Failed to read configuration.")?;

    let store = match settings.storage {
        StorageKind::Postgres => {
            tracing::info!(
                db_host = %settings.database.host,
                db_port = settings.database.port,
                db_name = %settings.database.database_name,
                "Connecting to PostgreSQL"
            );

            let connect_options = PgConnectOptions::new()
                .host(&settings.database.host)
                .port(settings.database.port)
                .username(&settings.database.username)
                .password(&settings.database.password)
                .database(&settings.database.database_name)
                .ssl_mode(PgSslMode::Prefer);

            let pg_pool = PgPoolOptions::new()
                .max_connections(5)
                .acquire_timeout(Duration::from_secs(30))
                .connect_with(connect_options)
                .await
                .context("Failed to connect to database.")?;

            sqlx::migrate!("./migrations")
                .run(&pg_pool)
                .await
                .context("Failed to migrate database.")?;

            Store::postgres(pg_pool)
        }
        StorageKind::Memory => {
            tracing::warn!("Using in-memory storage, records are lost on restart");
            Store::memory()
        }
    };

    let address = format!("{}:{}", settings.app_host, settings.app_port);
    tracing::info!("Start server at {:?}", &address);
    let listener =
        TcpListener::bind(&address).with_context(|| format!("failed to bind to {}", address))?;

    run(listener, store, settings)?.await?;
    Ok(())
}
