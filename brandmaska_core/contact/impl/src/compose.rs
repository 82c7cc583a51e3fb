use brandmaska_email_contracts::{Email, EmailBody};
use brandmaska_models::{contact::ContactPayload, email_address::EmailAddressWithName};
use brandmaska_templates_contracts::{ContactNotificationTemplate, TemplateService};
use tracing::warn;

/// Turn a validated submission into the notification email for `recipient`.
///
/// Replies to the notification go to the visitor who filled in the form. If
/// their address is not a valid mailbox the notification is sent without a
/// `Reply-To` header; the address is still part of the body.
pub fn compose_notification(
    template: &impl TemplateService,
    recipient: EmailAddressWithName,
    payload: ContactPayload,
) -> anyhow::Result<Email> {
    let reply_to = payload
        .email
        .to_email_address()
        .inspect_err(|err| {
            warn!(
                email = %payload.email,
                "visitor's email address is not a valid mailbox, omitting reply-to: {err}"
            )
        })
        .ok();

    let rendered = template.render(&ContactNotificationTemplate {
        name: payload.name.to_string(),
        email: payload.email.into_inner(),
        phone: payload.phone.map(|phone| phone.into_inner()),
        message: payload.message.into_inner(),
    })?;

    Ok(Email {
        recipient,
        subject: format!("New Message from {}", *payload.name),
        body: EmailBody::Alternative {
            text: rendered.text,
            html: rendered.html,
        },
        reply_to,
    })
}
