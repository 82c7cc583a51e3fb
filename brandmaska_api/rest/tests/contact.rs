use anyhow::anyhow;
use axum::http::{Method, StatusCode};
use brandmaska_api_rest::SEND_MAIL_ROUTE;
use brandmaska_core_contact_contracts::{
    ContactDelivery, ContactSendMessageError, MockContactService,
};
use brandmaska_core_health_contracts::MockHealthService;
use brandmaska_models::contact::ContactSubmission;
use pretty_assertions::assert_eq;
use serde_json::json;

mod common;

const SEND_FAILED: &str = "Failed to send email. Please try again later.";

fn valid_body() -> serde_json::Value {
    json!({
        "name": "Ada",
        "email": "ada@example.com",
        "phone": "+1 555 123 4567",
        "message": "Hello there, I need a logo."
    })
}

fn submission(body: &serde_json::Value) -> ContactSubmission {
    ContactSubmission::from_json(body).unwrap()
}

#[tokio::test]
async fn ok() {
    // Arrange
    let body = valid_body();
    let contact = MockContactService::new()
        .with_send_message(submission(&body), Ok(ContactDelivery::Sent));
    let router = common::router(MockHealthService::new(), contact);

    // Act
    let response = common::post_json(router, &body).await;

    // Assert
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!({"message": "Email sent successfully!"}));
}

#[tokio::test]
async fn ok_sanitizes_before_forwarding() {
    // Arrange
    let body = json!({
        "name": "  Ada\r\nLovelace ",
        "email": " ada@example.com ",
        "message": "Hi\nthere\tfriend!!"
    });
    let expected = submission(&json!({
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "message": "Hi there friend!!"
    }));
    assert_eq!(expected.payload.phone, None);
    let contact = MockContactService::new().with_send_message(expected, Ok(ContactDelivery::Sent));
    let router = common::router(MockHealthService::new(), contact);

    // Act
    let response = common::post_json(router, &body).await;

    // Assert
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn honeypot_discarded_looks_like_success() {
    // Arrange
    let mut body = valid_body();
    body["honeypot"] = json!("http://spam.example");
    let expected = submission(&body);
    assert!(expected.is_spam());
    let contact =
        MockContactService::new().with_send_message(expected, Ok(ContactDelivery::Discarded));
    let router = common::router(MockHealthService::new(), contact);

    // Act
    let response = common::post_json(router, &body).await;

    // Assert
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!({"message": "Email sent successfully!"}));
}

#[tokio::test]
async fn validation_errors() {
    let cases = [
        (
            json!({"name": "", "email": "a@b.co", "message": "long enough message"}),
            "Name, email, and message are required.",
        ),
        (
            json!({"email": "a@b.co", "message": "long enough message"}),
            "Name, email, and message are required.",
        ),
        (
            json!({"name": "Bob", "email": "bob@example", "message": "long enough message"}),
            "Please enter a valid email address.",
        ),
        (
            json!({
                "name": "Bob",
                "email": "bob@example.com",
                "phone": "12ab",
                "message": "long enough message"
            }),
            "Please enter a valid phone number.",
        ),
        (
            json!({"name": "Bob", "email": "bob@example.com", "message": "short"}),
            "Message should be at least 10 characters.",
        ),
        (json!(["not", "an", "object"]), "Invalid JSON body."),
    ];

    for (body, expected) in cases {
        // Arrange
        let router = common::router(MockHealthService::new(), MockContactService::new());

        // Act
        let response = common::post_json(router, &body).await;

        // Assert
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(response.json(), json!({"error": expected}), "{body}");
    }
}

#[tokio::test]
async fn invalid_json_syntax() {
    // Arrange
    let router = common::router(MockHealthService::new(), MockContactService::new());

    // Act
    let response = common::send(router, Method::POST, SEND_MAIL_ROUTE, "{\"name\": ").await;

    // Assert
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json(), json!({"error": "Invalid JSON body."}));
}

#[tokio::test]
async fn send_rejected() {
    // Arrange
    let body = valid_body();
    let contact = MockContactService::new()
        .with_send_message(submission(&body), Err(ContactSendMessageError::Send));
    let router = common::router(MockHealthService::new(), contact);

    // Act
    let response = common::post_json(router, &body).await;

    // Assert
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json(), json!({"error": SEND_FAILED}));
}

#[tokio::test]
async fn transport_error_is_not_leaked() {
    // Arrange
    let body = valid_body();
    let contact = MockContactService::new().with_send_message(
        submission(&body),
        Err(ContactSendMessageError::Other(anyhow!(
            "535 Username and Password not accepted"
        ))),
    );
    let router = common::router(MockHealthService::new(), contact);

    // Act
    let response = common::post_json(router, &body).await;

    // Assert
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json(), json!({"error": SEND_FAILED}));
    assert!(!String::from_utf8_lossy(&response.body).contains("535"));
}

#[tokio::test]
async fn preflight() {
    // Arrange
    let router = common::router(MockHealthService::new(), MockContactService::new());

    // Act
    let response = common::send(router, Method::OPTIONS, SEND_MAIL_ROUTE, "").await;

    // Assert
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert!(response.body.is_empty());
}

#[tokio::test]
async fn other_methods_not_allowed() {
    // Arrange
    let router = common::router(MockHealthService::new(), MockContactService::new());

    // Act
    let response = common::send(router, Method::GET, SEND_MAIL_ROUTE, "").await;

    // Assert
    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn responses_carry_request_id() {
    // Arrange
    let router = common::router(MockHealthService::new(), MockContactService::new());

    // Act
    let response = common::post_json(router, &json!({})).await;

    // Assert
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let request_id = response.request_id.unwrap();
    assert_eq!(request_id.len(), 22);
}
