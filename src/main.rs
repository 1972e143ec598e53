//! Server binary: reads settings from the environment (and `.env`), prepares the
//! store for the configured product shape, and serves the API.

use axum::{extract::Request, ServiceExt};
use product_crud::{
    app, connect, ensure_table, AppError, AppState, CatalogProduct, Entity, Gateway, MemoryGateway, PgGateway,
    Product, ProductSchema, Settings, StoreKind,
};
use std::process::ExitCode;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("product_crud=info,tower_http=info")),
        )
        .init();

    let settings = match Settings::from_env() {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let result = match settings.schema {
        ProductSchema::Inventory => serve::<Product>(&settings).await,
        ProductSchema::Catalog => serve::<CatalogProduct>(&settings).await,
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "server stopped");
            ExitCode::FAILURE
        }
    }
}

async fn serve<E: Entity>(settings: &Settings) -> Result<(), AppError> {
    let gateway: Arc<dyn Gateway<E>> = match settings.store {
        StoreKind::Postgres => {
            let pool = connect(&settings.database_url, settings.max_connections)
                .await
                .map_err(|e| {
                    tracing::error!("Connection failed to open");
                    e
                })?;
            ensure_table::<E>(&pool).await?;
            Arc::new(PgGateway::<E>::new(pool))
        }
        StoreKind::Memory => {
            tracing::warn!("using in-memory store; data is lost on exit");
            Arc::new(MemoryGateway::<E>::new())
        }
    };

    let app = app(AppState::new(gateway), settings.max_body_bytes);
    let listener = TcpListener::bind(&settings.bind_addr).await?;
    tracing::info!(schema = ?settings.schema, "listening on http://{}", listener.local_addr()?);
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;
    Ok(())
}
