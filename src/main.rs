use tracing_subscriber::EnvFilter;

use highlanders::server::{
    config::Config, error::AppError, router, scheduler::reconciliation, startup,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let state = startup::build_state(&config, db, http_client)?;

    let _scheduler =
        reconciliation::start_scheduler(state.clone(), &config.reconcile_schedule).await?;

    let app = router::app(&config, state)?;
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;

    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
