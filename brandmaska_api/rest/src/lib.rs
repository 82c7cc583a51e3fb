use std::{net::IpAddr, sync::Arc};

use anyhow::Context;
use axum::Router;
use brandmaska_core_contact_contracts::ContactService;
use brandmaska_core_health_contracts::HealthService;
use tokio::net::TcpListener;
use tracing::info;

mod middlewares;
mod models;
mod routes;

pub use routes::contact::SEND_MAIL_ROUTE;

#[derive(Debug, Clone)]
pub struct RestServer<Health, Contact> {
    health: Health,
    contact: Contact,
    config: RestServerConfig,
}

#[derive(Debug, Clone, Copy)]
pub struct RestServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl<Health, Contact> RestServer<Health, Contact>
where
    Health: HealthService,
    Contact: ContactService,
{
    pub fn new(health: Health, contact: Contact, config: RestServerConfig) -> Self {
        Self {
            health,
            contact,
            config,
        }
    }

    pub async fn serve(self) -> anyhow::Result<()> {
        let RestServerConfig { host, port } = self.config;
        let listener = TcpListener::bind((host, port))
            .await
            .with_context(|| format!("Failed to bind to {host}:{port}"))?;
        info!("Listening on http://{host}:{port}{SEND_MAIL_ROUTE}");

        axum::serve(listener, self.router())
            .await
            .context("Failed to start HTTP server")
    }

    pub fn router(self) -> Router<()> {
        let router = Router::new()
            .merge(routes::health::router(Arc::new(self.health)))
            .merge(routes::contact::router(Arc::new(self.contact)));

        middlewares::add(router)
    }
}
