use std::{future::Future, sync::LazyLock};

use anyhow::Context;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::form::ContactRequest;

pub const SEND_MAIL_PATH: &str = "/api/send-mail";

static USER_AGENT: LazyLock<String> = LazyLock::new(|| {
    let homepage = env!("CARGO_PKG_HOMEPAGE");
    let version = env!("CARGO_PKG_VERSION");
    format!("BrandMaska Contact Client ({homepage}, Version {version})")
});

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait ContactApiService: Send + Sync + 'static {
    /// Post the request to the contact endpoint.
    ///
    /// Returns the confirmation message of the server.
    fn send_mail(
        &self,
        request: ContactRequest,
    ) -> impl Future<Output = Result<String, ContactApiError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactApiError {
    /// The server answered with a non-success status. `error` is the message
    /// from the response body, if there was one.
    #[error("The server rejected the submission with status {status}.")]
    Rejected { status: u16, error: Option<String> },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(any(test, feature = "mock"))]
impl MockContactApiService {
    pub fn with_send_mail(
        mut self,
        request: ContactRequest,
        result: Result<String, ContactApiError>,
    ) -> Self {
        self.expect_send_mail()
            .once()
            .with(mockall::predicate::eq(request))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}

#[derive(Debug, Clone)]
pub struct ContactApiServiceImpl {
    client: reqwest::Client,
    endpoint: Url,
}

impl ContactApiServiceImpl {
    /// Create a client for the site served at `base_url`.
    pub fn new(base_url: &Url) -> anyhow::Result<Self> {
        let endpoint = base_url
            .join(SEND_MAIL_PATH)
            .with_context(|| format!("Invalid base url {base_url}"))?;
        let client = reqwest::Client::builder()
            .user_agent(&*USER_AGENT)
            .build()
            .context("Failed to build http client")?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl ContactApiService for ContactApiServiceImpl {
    async fn send_mail(&self, request: ContactRequest) -> Result<String, ContactApiError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await
            .context("Failed to reach the contact endpoint")?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .context("Failed to read the response body")?;

        if !status.is_success() {
            let error = serde_json::from_slice::<ErrorResponse>(&body)
                .ok()
                .map(|response| response.error);
            return Err(ContactApiError::Rejected {
                status: status.as_u16(),
                error,
            });
        }

        serde_json::from_slice::<MessageResponse>(&body)
            .map(|response| response.message)
            .context("Failed to parse the response body")
            .map_err(Into::into)
    }
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Deserialize)]
struct MessageResponse {
    message: String,
}
