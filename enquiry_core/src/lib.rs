//! Core library for the enquiry relay: data model, validation, mail delivery,
//! route handlers and the client-side form model.

pub mod client;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod mail;
pub mod middleware;
pub mod models;
pub mod services;
pub mod validation;

pub use client::{EnquiryForm, EnquiryTransport, FormStatus, HttpTransport, QuoteForm, SubmitOutcome};
pub use config::AppConfig;
pub use error::{AppError, Result};
pub use handlers::routes::create_routes;
pub use mail::{MailError, Mailer, OutboundEmail, ResendMailer};
pub use models::{ContactResponse, Enquiry, EnquiryPayload, Topic};
pub use services::{EnquiryService, SubmissionOutcome};

use axum::{error_handling::HandleErrorLayer, extract::DefaultBodyLimit, BoxError, Router};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tower::{timeout::error::Elapsed, ServiceBuilder};
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub app_name: String,
    pub version: String,
    pub enquiries: EnquiryService,
}

impl AppState {
    pub fn new(enquiries: EnquiryService) -> Self {
        Self {
            app_name: "Enquiry Relay".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            enquiries,
        }
    }

    /// Wires the Resend adapter from configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let mailer = ResendMailer::new(
            &config.mail.api_base_url,
            config.mail.api_key.clone(),
            config.mail.timeout(),
        )
        .map_err(|e| anyhow::anyhow!("Failed to build mail client: {}", e))?;

        Ok(Self::with_mailer(Arc::new(mailer), config))
    }

    pub fn with_mailer(mailer: Arc<dyn Mailer>, config: &AppConfig) -> Self {
        Self::new(EnquiryService::from_config(mailer, &config.mail))
    }
}

pub fn create_app(state: AppState) -> Router {
    create_app_with_config(state, &AppConfig::default())
}

pub fn create_app_with_config(state: AppState, config: &AppConfig) -> Router {
    Router::new()
        .merge(create_routes())
        .layer(DefaultBodyLimit::max(config.server.max_body_bytes))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .timeout(config.server.request_timeout()),
        )
        .layer(middleware::cors::cors_layer_from_config(&config.cors))
        .layer(middleware::logging::logging_layer())
        .with_state(state)
}

/// Turns errors raised by the tower stack into the contact response envelope.
async fn handle_middleware_error(err: BoxError) -> AppError {
    if err.is::<Elapsed>() {
        AppError::RequestTimeout
    } else {
        AppError::Other(anyhow::anyhow!("Unhandled middleware error: {}", err))
    }
}

pub async fn run_server(app: Router, addr: SocketAddr) -> Result<()> {
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind {}: {}", addr, e))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
