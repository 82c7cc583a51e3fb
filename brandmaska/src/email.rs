use brandmaska_config::{EmailConfig, EmailCredentialsConfig};
use brandmaska_email_impl::{EmailServiceImpl, SmtpCredentials};
use brandmaska_models::email_address::{EmailAddress, EmailAddressWithName};
use tracing::{error, warn};

/// Set up the SMTP transport.
///
/// Missing credentials or an unusable transport are logged but do not stop
/// the process. Sending fails later in that case.
pub fn connect(config: &EmailConfig) -> EmailServiceImpl {
    let from = sender(config);

    let credentials = smtp_credentials(&config.credentials);

    EmailServiceImpl::new(&config.smtp_url, from.clone(), credentials).unwrap_or_else(|err| {
        error!("Failed to set up the SMTP transport: {err:#}");
        EmailServiceImpl::unavailable(from)
    })
}

fn smtp_credentials(config: &EmailCredentialsConfig) -> Option<SmtpCredentials> {
    if !config.is_complete() {
        warn!("EMAIL_USER or EMAIL_PASS is not set, sending emails will fail");
        return None;
    }

    Some(SmtpCredentials {
        user: config.user.clone()?,
        password: config.pass.clone()?,
    })
}

/// The sender mailbox is the account the transport authenticates as.
fn sender(config: &EmailConfig) -> Option<EmailAddressWithName> {
    let user = config.credentials.user.as_deref()?;
    match user.parse::<EmailAddress>() {
        Ok(address) => Some(address.with_name(config.from_name.clone())),
        Err(err) => {
            warn!("EMAIL_USER is not a valid email address: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(user: Option<&str>) -> EmailConfig {
        EmailConfig {
            smtp_url: "smtps://smtp.gmail.com".into(),
            from_name: Some("BrandMaska Website".into()),
            credentials: EmailCredentialsConfig {
                user: user.map(Into::into),
                pass: Some(String::from("app-password").into()),
            },
        }
    }

    #[test]
    fn sender_uses_account_and_display_name() {
        let from = sender(&config(Some("website@brandmaska.com"))).unwrap();

        assert_eq!(from.email(), "website@brandmaska.com");
        assert_eq!(from.0.name.as_deref(), Some("BrandMaska Website"));
    }

    #[test]
    fn no_sender_without_valid_account() {
        assert_eq!(sender(&config(None)), None);
        assert_eq!(sender(&config(Some("not an address"))), None);
    }

    #[test]
    fn credentials_require_user_and_password() {
        let complete = config(Some("website@brandmaska.com")).credentials;
        let credentials = smtp_credentials(&complete).unwrap();
        assert_eq!(credentials.user, "website@brandmaska.com");
        assert_eq!(*credentials.password, "app-password");

        let missing_user = config(None).credentials;
        assert!(smtp_credentials(&missing_user).is_none());

        let missing_pass = EmailCredentialsConfig {
            user: Some("website@brandmaska.com".into()),
            pass: None,
        };
        assert!(smtp_credentials(&missing_pass).is_none());
    }
}
