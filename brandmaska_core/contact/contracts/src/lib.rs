use std::future::Future;

use brandmaska_models::contact::ContactSubmission;
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactService: Send + Sync + 'static {
    /// Forward a validated contact form submission to the agency's inbox.
    fn send_message(
        &self,
        submission: ContactSubmission,
    ) -> impl Future<Output = Result<ContactDelivery, ContactSendMessageError>> + Send;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactDelivery {
    /// The email has been accepted by the mail transport.
    Sent,
    /// The submission filled in the honeypot field and has been dropped.
    Discarded,
}

#[derive(Debug, Error)]
pub enum ContactSendMessageError {
    #[error("Failed to send message.")]
    Send,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactService {
    pub fn with_send_message(
        mut self,
        submission: ContactSubmission,
        result: Result<ContactDelivery, ContactSendMessageError>,
    ) -> Self {
        self.expect_send_message()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
