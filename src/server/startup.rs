//! Initialization of the database, outbound clients and shared application state.

use std::{sync::Arc, time::Duration};

use crate::server::{
    card::CardRenderer,
    config::Config,
    error::{provider::ProviderError, AppError},
    provider::{asset::ObjectAssetStore, email::ResendNotifier, payment::PayFastGateway},
    state::AppState,
};

/// Timeout applied to every outbound HTTP request (Resend, PayFast validation).
const HTTP_TIMEOUT: Duration = Duration::from_secs(15);

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the HTTP client shared by the email and payment providers.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Client with the request timeout applied
/// - `Err(AppError::ProviderErr)` - TLS backend could not be initialized
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .build()
        .map_err(ProviderError::from)?;

    Ok(client)
}

/// Wires the production providers into the application state.
///
/// # Arguments
/// - `config` - Application configuration
/// - `db` - Migrated database connection
/// - `http_client` - Client from `setup_reqwest_client`
///
/// # Returns
/// - `Ok(AppState)` - State ready to be attached to the router
/// - `Err(AppError::ConfigErr)` - Asset backend could not be built
pub fn build_state(
    config: &Config,
    db: sea_orm::DatabaseConnection,
    http_client: reqwest::Client,
) -> Result<AppState, AppError> {
    let assets = ObjectAssetStore::from_config(&config.assets)?;
    let notifier = ResendNotifier::new(
        http_client.clone(),
        config.email.api_url.clone(),
        config.email.api_key.clone(),
        config.email.from.clone(),
    );
    let gateway = PayFastGateway::new(http_client, config.payfast.clone());

    if !config.payfast.verify {
        tracing::warn!("PayFast notification validation is disabled");
    }

    Ok(AppState::new(
        db,
        Arc::new(assets),
        Arc::new(notifier),
        Arc::new(gateway),
        CardRenderer::new(config.card.clone()),
        config.member_code_prefix.clone(),
    ))
}
