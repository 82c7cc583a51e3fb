use std::sync::Arc;

use brandmaska_core_contact_contracts::{
    ContactDelivery, ContactSendMessageError, ContactService,
};
use brandmaska_email_contracts::EmailService;
use brandmaska_models::{contact::ContactSubmission, email_address::EmailAddressWithName};
use brandmaska_templates_contracts::TemplateService;
use tracing::info;

pub mod compose;

#[derive(Debug, Clone)]
pub struct ContactServiceImpl<Email, Template> {
    email: Email,
    template: Template,
    config: ContactServiceConfig,
}

#[derive(Debug, Clone)]
pub struct ContactServiceConfig {
    /// Inbox that receives the contact form notifications.
    pub recipient: Arc<EmailAddressWithName>,
}

impl<Email, Template> ContactServiceImpl<Email, Template> {
    pub fn new(email: Email, template: Template, config: ContactServiceConfig) -> Self {
        Self {
            email,
            template,
            config,
        }
    }
}

impl<EmailS, TemplateS> ContactService for ContactServiceImpl<EmailS, TemplateS>
where
    EmailS: EmailService,
    TemplateS: TemplateService,
{
    async fn send_message(
        &self,
        submission: ContactSubmission,
    ) -> Result<ContactDelivery, ContactSendMessageError> {
        if submission.is_spam() {
            info!(
                email = %submission.payload.email,
                "discarding contact form submission with filled in honeypot"
            );
            return Ok(ContactDelivery::Discarded);
        }

        let email = compose::compose_notification(
            &self.template,
            (*self.config.recipient).clone(),
            submission.payload,
        )?;

        if !self.email.send(email).await? {
            return Err(ContactSendMessageError::Send);
        }

        Ok(ContactDelivery::Sent)
    }
}
