use brandmaska_config::Config;
use brandmaska_email_contracts::EmailService;
use tracing::{info, warn};

use crate::{email, environment};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    info!("Setting up smtp transport");
    let email = email::connect(&config.email);
    if let Err(err) = email.ping().await {
        warn!("SMTP server is not reachable, sending emails will fail: {err:#}");
    }

    let server = environment::build(&config, email)?;
    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve().await
}
