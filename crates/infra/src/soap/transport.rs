//! `SoapTransport` implementation posting envelopes with reqwest

use std::path::Path;

use async_trait::async_trait;
use intercall_core::{SoapRequest, SoapResponse, SoapTransport};
use intercall_domain::constants::SOAP_CONTENT_TYPE;
use intercall_domain::{IntercallError, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode};
use tracing::{debug, warn};
use url::Url;

use crate::errors::InfraError;
use crate::http::HttpClient;

/// Posts SOAP envelopes to the vendor endpoint.
///
/// Only 2xx and 500 responses come back as `SoapResponse`; a 500 is how the
/// vendor delivers SOAP faults. Every other status is a transport failure.
#[derive(Clone)]
pub struct HttpSoapTransport {
    http: HttpClient,
    endpoint: Url,
    document: Option<String>,
}

impl HttpSoapTransport {
    /// # Errors
    /// Returns `IntercallError::Config` when `endpoint` is not an absolute
    /// URL.
    pub fn new(http: HttpClient, endpoint: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint).map_err(|e| {
            IntercallError::Config(format!("Invalid endpoint URL '{endpoint}': {e}"))
        })?;
        Ok(Self { http, endpoint, document: None })
    }

    /// WSDL document location, either a URL or a local path.
    pub fn with_document(mut self, document: Option<String>) -> Self {
        self.document = document;
        self
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Whether the WSDL document is reachable.
    ///
    /// URLs are probed with `HEAD`; anything else is treated as a file path.
    /// Unreachable documents yield `Ok(false)`.
    pub async fn check_document(&self) -> Result<bool> {
        let Some(document) = self.document.as_deref() else {
            debug!("no WSDL document configured");
            return Ok(false);
        };

        match Url::parse(document) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {
                match self.http.send(self.http.request(Method::HEAD, url)).await {
                    Ok(response) => Ok(response.status().is_success()),
                    Err(err) => {
                        warn!(document = document, error = %err, "WSDL document unreachable");
                        Ok(false)
                    }
                }
            }
            Ok(url) if url.scheme() == "file" => Ok(match url.to_file_path() {
                Ok(path) => path_exists(&path).await,
                Err(()) => false,
            }),
            _ => Ok(path_exists(Path::new(document)).await),
        }
    }
}

async fn path_exists(path: &Path) -> bool {
    tokio::fs::try_exists(path).await.unwrap_or(false)
}

#[async_trait]
impl SoapTransport for HttpSoapTransport {
    async fn send(&self, request: &SoapRequest) -> Result<SoapResponse> {
        let builder = self
            .http
            .request(Method::POST, self.endpoint.clone())
            .header(CONTENT_TYPE, SOAP_CONTENT_TYPE)
            .header("SOAPAction", format!("\"{}\"", request.soap_action()))
            .body(request.envelope.clone());

        let response = self.http.send(builder).await?;
        let status = response.status();
        let url = response.url().to_string();

        if !(status.is_success() || status == StatusCode::INTERNAL_SERVER_ERROR) {
            return Err(IntercallError::Transport(format!(
                "HTTP {} {} ({url})",
                status.as_u16(),
                status.canonical_reason().unwrap_or("unknown status")
            )));
        }

        let body = response.text().await.map_err(|err| IntercallError::from(InfraError::from(err)))?;
        debug!(
            request_id = %request.request_id,
            http_status = status.as_u16(),
            "SOAP response received"
        );

        Ok(SoapResponse { url, http_status: status.as_u16(), body })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use intercall_core::Operation;
    use tempfile::NamedTempFile;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn transport(server: &MockServer) -> HttpSoapTransport {
        HttpSoapTransport::new(HttpClient::new().unwrap(), &format!("{}/ownerAPI", server.uri()))
            .unwrap()
    }

    #[tokio::test]
    async fn posts_envelope_with_soap_headers() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/ownerAPI"))
            .and(header("content-type", "text/xml;charset=UTF-8"))
            .and(header("soapaction", "\"retrieveOwner\""))
            .and(body_string_contains("<owner-number>224343</owner-number>"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<ok/>"))
            .expect(1)
            .mount(&server)
            .await;

        let request = SoapRequest::new(
            Operation::RetrieveOwner,
            "<owner-number>224343</owner-number>".to_string(),
        );
        let response = transport(&server).send(&request).await.unwrap();

        assert_eq!(response.http_status, 200);
        assert_eq!(response.body, "<ok/>");
        assert!(response.url.ends_with("/ownerAPI"));
    }

    #[tokio::test]
    async fn server_error_body_is_returned_for_fault_classification() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("<Fault/>"))
            .expect(1)
            .mount(&server)
            .await;

        let request = SoapRequest::new(Operation::DeleteOwner, "<x/>".into());
        let response = transport(&server).send(&request).await.unwrap();

        assert_eq!(response.http_status, 500);
        assert_eq!(response.body, "<Fault/>");
    }

    #[tokio::test]
    async fn other_statuses_are_transport_errors() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let request = SoapRequest::new(Operation::DeleteOwner, "<x/>".into());
        let err = transport(&server).send(&request).await.unwrap_err();

        assert!(matches!(err, IntercallError::Transport(ref msg) if msg.contains("502")));
    }

    #[tokio::test]
    async fn remote_document_is_probed_with_head() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .and(path("/ownerAPI.wsdl"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let found = transport(&server)
            .with_document(Some(format!("{}/ownerAPI.wsdl", server.uri())))
            .check_document()
            .await
            .unwrap();
        assert!(found);

        let missing = transport(&server)
            .with_document(Some(format!("{}/missing.wsdl", server.uri())))
            .check_document()
            .await
            .unwrap();
        assert!(!missing);
    }

    #[tokio::test]
    async fn local_document_is_checked_on_disk() {
        let server = MockServer::start().await;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"<definitions/>").unwrap();

        let present = transport(&server)
            .with_document(Some(file.path().display().to_string()))
            .check_document()
            .await
            .unwrap();
        assert!(present);

        let absent = transport(&server)
            .with_document(Some("/nonexistent/ownerAPI.wsdl".into()))
            .check_document()
            .await
            .unwrap();
        assert!(!absent);
        assert!(!transport(&server).check_document().await.unwrap());
    }

    #[test]
    fn relative_endpoint_is_rejected() {
        let result = HttpSoapTransport::new(HttpClient::new().unwrap(), "ownerAPI");
        assert!(matches!(result, Err(IntercallError::Config(_))));
    }
}
