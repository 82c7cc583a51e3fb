use anyhow::{ensure, Context};
use brandmaska_email_contracts::{Email, EmailBody, EmailService};
use brandmaska_models::{email_address::EmailAddressWithName, Sensitive};
use lettre::{
    message::{header::ContentType, Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct EmailServiceImpl {
    from: Option<EmailAddressWithName>,
    transport: Option<AsyncSmtpTransport<Tokio1Executor>>,
}

#[derive(Debug, Clone)]
pub struct SmtpCredentials {
    pub user: String,
    pub password: Sensitive<String>,
}

impl EmailServiceImpl {
    /// Build the SMTP transport. No connection is opened until the first
    /// email is sent or [`EmailService::ping`] is called.
    pub fn new(
        smtp_url: &str,
        from: Option<EmailAddressWithName>,
        credentials: Option<SmtpCredentials>,
    ) -> anyhow::Result<Self> {
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::from_url(smtp_url)
            .context("Invalid SMTP url")?;
        if let Some(SmtpCredentials { user, password }) = credentials {
            builder = builder.credentials(Credentials::new(user, password.0));
        }

        Ok(Self {
            from,
            transport: Some(builder.build()),
        })
    }

    /// An email service without a transport, every send fails.
    pub fn unavailable(from: Option<EmailAddressWithName>) -> Self {
        Self {
            from,
            transport: None,
        }
    }

    fn build_message(&self, email: Email) -> anyhow::Result<Message> {
        let from = self
            .from
            .as_ref()
            .context("No sender address has been configured")?;

        let mut builder = Message::builder()
            .from(from.0.clone())
            .to(email.recipient.0)
            .subject(email.subject);
        if let Some(reply_to) = email.reply_to {
            builder = builder.reply_to(Mailbox::new(None, reply_to.0));
        }

        let message = match email.body {
            EmailBody::Text(text) => builder.header(ContentType::TEXT_PLAIN).body(text)?,
            EmailBody::Alternative { text, html } => {
                builder.multipart(MultiPart::alternative_plain_html(text, html))?
            }
        };

        Ok(message)
    }
}

impl EmailService for EmailServiceImpl {
    async fn send(&self, email: Email) -> anyhow::Result<bool> {
        let transport = self
            .transport
            .as_ref()
            .context("SMTP transport is not available")?;
        let message = self.build_message(email)?;
        let response = transport.send(message).await?;
        debug!(code = %response.code(), "smtp server answered");
        Ok(response.is_positive())
    }

    async fn ping(&self) -> anyhow::Result<()> {
        let transport = self
            .transport
            .as_ref()
            .context("SMTP transport is not available")?;
        ensure!(
            transport.test_connection().await?,
            "SMTP server did not accept the connection test"
        );
        Ok(())
    }
}
