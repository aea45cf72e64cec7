use crate::errors::sdk_error::SdkError;

/// What came back from the web service: the HTTP status and the raw body.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Delivers a request envelope and returns the response. The default implementation is
/// [HttpClient][crate::http::http_client::HttpClient]; anything able to post SOAP can take its place.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn call(&self, soap_action: &str, envelope: String) -> Result<RawResponse, SdkError>;
}
