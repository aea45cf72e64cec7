use crate::errors::sdk_error::SdkError;
use crate::http::transport::{RawResponse, Transport};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};

/// Posts SOAP 1.1 envelopes to a single ASMX endpoint.
pub struct HttpClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpClient {
    pub fn new(endpoint: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.to_string(),
        }
    }
}

#[async_trait::async_trait]
impl Transport for HttpClient {
    async fn call(&self, soap_action: &str, envelope: String) -> Result<RawResponse, SdkError> {
        let mut headers = HeaderMap::with_capacity(2);
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("text/xml; charset=utf-8"),
        );
        headers.insert(
            "SOAPAction",
            format!("\"{soap_action}\"")
                .parse()
                .or(Err(SdkError::InvalidArgument))?,
        );

        let response = self
            .client
            .post(&self.endpoint)
            .headers(headers)
            .body(envelope)
            .send()
            .await
            .or(Err(SdkError::TransmittingError))?;

        let status = response.status().as_u16();
        let body = response.text().await.or(Err(SdkError::ReceivingError))?;

        Ok(RawResponse { status, body })
    }
}
