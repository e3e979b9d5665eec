use anyhow::Context as _;
use sea_orm::Database;
use tracing::info;

use roster_core::tracing::init_tracing;
use roster_employees::config::EmployeesConfig;
use roster_employees::router::build_router;
use roster_employees::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_tracing();

    let config = EmployeesConfig::from_env()?;

    let db = Database::connect(&config.database_url)
        .await
        .context("failed to connect to database")?;

    let router = build_router(AppState::new(db));
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("employees service listening on {addr}");
    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}
