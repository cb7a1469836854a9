use async_trait::async_trait;
use reqwest::{
    header::{ACCEPT, CONTENT_TYPE},
    Client, Response,
};
use serde_json::Value;
use shared::protocol::{is_truthy, CREATE_ABSTRACT_PATH, SAVE_PATH};
use tracing::{info, warn};

pub mod config;
pub mod controller;
pub mod error;
pub mod view;

pub use config::{load_settings, ClientSettings};
pub use controller::{execute, AppController, BackendCommand, DisplayState, UiEvent};
pub use error::ClientError;
pub use shared::{
    domain::{AbstractValue, AnalysisResult, Strategy, StrategyAbstracts},
    error::ValidationError,
    protocol::{AnalysisRequest, SaveRequest},
};
pub use view::{render_results, FieldView, LinkView, ResultsView, StrategyView, NO_DATA};

const JSON_MIME: &str = "application/json";

/// The two calls the summarization service exposes.
#[async_trait]
pub trait AbstractApi: Send + Sync {
    async fn create_abstract(&self, request: &AnalysisRequest)
        -> Result<AnalysisResult, ClientError>;

    /// Returns the service's acknowledgement, interpreted by truthiness.
    async fn save(&self, request: &SaveRequest) -> Result<bool, ClientError>;
}

#[derive(Debug, Clone)]
pub struct AbstractClient {
    http: Client,
    base_url: String,
}

impl AbstractClient {
    pub fn new(settings: &ClientSettings) -> Result<Self, ClientError> {
        let mut builder = Client::builder();
        if let Some(timeout) = settings.request_timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            base_url: settings.api_base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl AbstractApi for AbstractClient {
    async fn create_abstract(
        &self,
        request: &AnalysisRequest,
    ) -> Result<AnalysisResult, ClientError> {
        let endpoint = self.endpoint(CREATE_ABSTRACT_PATH);
        info!(%endpoint, url = %request.url, "requesting abstract");
        let res = self
            .http
            .get(&endpoint)
            .header(ACCEPT, JSON_MIME)
            .query(&request.query())
            .send()
            .await?;
        let body = ensure_success(res, CREATE_ABSTRACT_PATH)?
            .json::<AnalysisResult>()
            .await?;
        Ok(body)
    }

    async fn save(&self, request: &SaveRequest) -> Result<bool, ClientError> {
        let endpoint = self.endpoint(SAVE_PATH);
        info!(%endpoint, filename = %request.filename, "saving results");
        let res = self
            .http
            .post(&endpoint)
            .header(ACCEPT, JSON_MIME)
            .header(CONTENT_TYPE, JSON_MIME)
            .query(&request.query())
            .json(&request.result)
            .send()
            .await?;
        let ack = ensure_success(res, SAVE_PATH)?.json::<Value>().await?;
        Ok(is_truthy(&ack))
    }
}

fn ensure_success(res: Response, path: &str) -> Result<Response, ClientError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }
    warn!(path, status = status.as_u16(), "request rejected");
    Err(ClientError::Http {
        status: status.as_u16(),
    })
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
