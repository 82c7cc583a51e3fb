use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use brandmaska_core_contact_contracts::{
    ContactDelivery, ContactSendMessageError, ContactService,
};
use brandmaska_models::contact::{ContactSubmission, ContactValidationError};
use tracing::{error, info};

use super::error;
use crate::models::ApiMessage;

pub const SEND_MAIL_ROUTE: &str = "/api/send-mail";

const EMAIL_SENT: &str = "Email sent successfully!";
const SEND_FAILED: &str = "Failed to send email. Please try again later.";

pub fn router(service: Arc<impl ContactService>) -> Router<()> {
    Router::new()
        .route(
            SEND_MAIL_ROUTE,
            routing::post(send_mail).options(preflight),
        )
        .with_state(service)
}

async fn send_mail(service: State<Arc<impl ContactService>>, body: Bytes) -> Response {
    let submission = match parse_submission(&body) {
        Ok(submission) => submission,
        Err(err) => return error(StatusCode::BAD_REQUEST, err.to_string()),
    };

    match service.send_message(submission).await {
        Ok(delivery) => {
            if delivery == ContactDelivery::Sent {
                info!("contact notification sent");
            }
            (StatusCode::OK, Json(ApiMessage { message: EMAIL_SENT })).into_response()
        }
        Err(ContactSendMessageError::Send) => {
            error!("mail transport did not accept the contact notification");
            error(StatusCode::INTERNAL_SERVER_ERROR, SEND_FAILED)
        }
        Err(ContactSendMessageError::Other(err)) => {
            error!("Failed to send contact notification: {err:#}");
            error(StatusCode::INTERNAL_SERVER_ERROR, SEND_FAILED)
        }
    }
}

fn parse_submission(body: &[u8]) -> Result<ContactSubmission, ContactValidationError> {
    let body = serde_json::from_slice::<serde_json::Value>(body)
        .map_err(|_| ContactValidationError::InvalidBody)?;
    ContactSubmission::from_json(&body)
}

async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}
