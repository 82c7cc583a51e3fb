use std::{net::IpAddr, path::Path};

use anyhow::Context;
use brandmaska_models::{email_address::EmailAddressWithName, Sensitive};
use config::{Environment, File, FileFormat};
pub use duration::Duration;
use serde::Deserialize;

mod duration;

/// The default configuration, compiled into the binary.
pub const DEFAULT_CONFIG: &str = include_str!("../../config.toml");

/// Colon separated list of additional config files, applied in order on top
/// of [`DEFAULT_CONFIG`].
pub const CONFIG_PATHS_ENV: &str = "BRANDMASKA_CONFIG";

/// Prefix of the environment variables holding the sender account
/// (`EMAIL_USER` and `EMAIL_PASS`).
pub const EMAIL_CREDENTIALS_ENV_PREFIX: &str = "EMAIL";

pub fn load() -> anyhow::Result<Config> {
    let paths = std::env::var_os(CONFIG_PATHS_ENV)
        .map(|paths| std::env::split_paths(&paths).collect::<Vec<_>>())
        .unwrap_or_default();

    load_from(
        &paths,
        Environment::with_prefix(EMAIL_CREDENTIALS_ENV_PREFIX),
    )
}

fn load_from(paths: &[impl AsRef<Path>], credentials_env: Environment) -> anyhow::Result<Config> {
    let mut config: Config = paths
        .iter()
        .try_fold(
            config::Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml)),
            |builder, path| {
                let path = path.as_ref();
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file at {}", path.display()))?;
                let source = File::from_str(&content, FileFormat::Toml);
                anyhow::Ok(builder.add_source(source))
            },
        )?
        .build()?
        .try_deserialize()
        .context("Failed to load config")?;

    config.email.credentials = config::Config::builder()
        .add_source(credentials_env.ignore_empty(true))
        .build()?
        .try_deserialize()
        .context("Failed to read email credentials from the environment")?;

    Ok(config)
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub email: EmailConfig,
    pub contact: ContactConfig,
    pub health: HealthConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct EmailConfig {
    pub smtp_url: String,
    /// Display name of the sender mailbox
    pub from_name: Option<String>,
    #[serde(skip)]
    pub credentials: EmailCredentialsConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct EmailCredentialsConfig {
    pub user: Option<String>,
    pub pass: Option<Sensitive<String>>,
}

impl EmailCredentialsConfig {
    pub fn is_complete(&self) -> bool {
        self.user.is_some() && self.pass.is_some()
    }
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    /// Inbox that receives the contact form notifications
    pub recipient: EmailAddressWithName,
}

#[derive(Debug, Deserialize)]
pub struct HealthConfig {
    pub cache_ttl: Duration,
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn env(vars: &[(&str, &str)]) -> Environment {
        Environment::with_prefix(EMAIL_CREDENTIALS_ENV_PREFIX).source(Some(
            vars.iter()
                .map(|&(k, v)| (k.to_owned(), v.to_owned()))
                .collect(),
        ))
    }

    #[test]
    fn load_default_config() {
        // Act
        let config = load_from(&[] as &[&Path], env(&[])).unwrap();

        // Assert
        assert_eq!(config.http.port, 8000);
        assert_eq!(config.contact.recipient.email(), "support@diffrun.com");
        assert_eq!(*config.health.cache_ttl, std::time::Duration::from_secs(10));
        assert_eq!(config.email.credentials.user, None);
        assert!(!config.email.credentials.is_complete());
    }

    #[test]
    fn load_credentials_from_environment() {
        let config = load_from(
            &[] as &[&Path],
            env(&[
                ("EMAIL_USER", "website@brandmaska.com"),
                ("EMAIL_PASS", "app-password"),
                ("PATH", "/usr/bin"),
            ]),
        )
        .unwrap();

        let credentials = config.email.credentials;
        assert_eq!(credentials.user.as_deref(), Some("website@brandmaska.com"));
        assert_eq!(credentials.pass.as_deref().map(String::as_str), Some("app-password"));
        assert!(!format!("{credentials:?}").contains("app-password"));
    }

    #[test]
    fn empty_credentials_are_absent() {
        let config = load_from(
            &[] as &[&Path],
            env(&[("EMAIL_USER", "website@brandmaska.com"), ("EMAIL_PASS", "")]),
        )
        .unwrap();

        assert!(config.email.credentials.pass.is_none());
        assert!(!config.email.credentials.is_complete());
    }

    #[test]
    fn load_override_file() {
        // Arrange
        let path = std::env::temp_dir().join(format!(
            "brandmaska-config-test-{}.toml",
            std::process::id()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[http]\nport = 9000\n\n[contact]\nrecipient = \"hello@brandmaska.com\""
        )
        .unwrap();

        // Act
        let config = load_from(&[&path], env(&[]));
        std::fs::remove_file(&path).unwrap();

        // Assert
        let config = config.unwrap();
        assert_eq!(config.http.port, 9000);
        assert_eq!(config.http.host.to_string(), "127.0.0.1");
        assert_eq!(config.contact.recipient.email(), "hello@brandmaska.com");
    }

    #[test]
    fn load_missing_file() {
        let result = load_from(&[Path::new("/nonexistent/brandmaska.toml")], env(&[]));

        assert!(result.is_err());
    }
}
