use std::sync::Arc;

use anyhow::Context;
use brandmaska_api_rest::{RestServer, RestServerConfig};
use brandmaska_config::Config;
use brandmaska_core_contact_impl::{ContactServiceConfig, ContactServiceImpl};
use brandmaska_core_health_impl::{HealthServiceConfig, HealthServiceImpl};
use brandmaska_email_impl::EmailServiceImpl;
use brandmaska_templates_impl::TemplateServiceImpl;

pub type Email = EmailServiceImpl;
pub type Template = TemplateServiceImpl;

pub type HealthService = HealthServiceImpl<Email>;
pub type ContactService = ContactServiceImpl<Email, Template>;

pub type Server = RestServer<HealthService, ContactService>;

/// Wire the services of the REST server on top of the given transport.
pub fn build(config: &Config, email: Email) -> anyhow::Result<Server> {
    let template = TemplateServiceImpl::new().context("Failed to load email templates")?;

    let health = HealthServiceImpl::new(
        email.clone(),
        HealthServiceConfig {
            cache_ttl: *config.health.cache_ttl,
        },
    );

    let contact = ContactServiceImpl::new(
        email,
        template,
        ContactServiceConfig {
            recipient: Arc::new(config.contact.recipient.clone()),
        },
    );

    Ok(RestServer::new(
        health,
        contact,
        RestServerConfig {
            host: config.http.host,
            port: config.http.port,
        },
    ))
}
