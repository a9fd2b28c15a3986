//! Common test utilities for provider configuration client testing.
//!
//! Provides a recording transport that replays a canned response, the sample
//! service documents, and client construction helpers.


use saml_provider_config::client::{
    ProviderConfigClient, StaticProjectResolver, Transport, TransportError, TransportRequest,
    TransportResponse,
};
use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use url::Url;

pub const MOCK_PROJECT_ID: &str = "mock-project-id";

/// Transport that records every request and answers with a fixed response.
#[derive(Debug, Clone)]
pub struct EchoTransport {
    status: u16,
    body: String,
    delay: Option<Duration>,
    fail_with: Option<String>,
    requests: Arc<Mutex<Vec<TransportRequest>>>,
}

impl EchoTransport {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
            delay: None,
            fail_with: None,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Sleep before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Fail every exchange at the connection level.
    pub fn failing(message: impl Into<String>) -> Self {
        let mut transport = Self::new("");
        transport.fail_with = Some(message.into());
        transport
    }

    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The only request seen so far.
    pub fn single_request(&self) -> TransportRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }

    /// Absolute URL the request would be sent to on a local emulator.
    pub fn request_url(request: &TransportRequest) -> Url {
        let base = Url::parse("http://localhost:9099/").unwrap();
        request.to_url(&base).unwrap()
    }

    /// Request body decoded as JSON.
    pub fn request_body(request: &TransportRequest) -> serde_json::Value {
        serde_json::from_str(request.body.as_deref().expect("request has no body")).unwrap()
    }
}

impl Transport for EchoTransport {
    fn execute(
        &self,
        request: TransportRequest,
    ) -> impl Future<Output = Result<TransportResponse, TransportError>> + Send {
        self.requests.lock().unwrap().push(request);
        let response = TransportResponse::new(self.status, self.body.clone());
        let delay = self.delay;
        let fail_with = self.fail_with.clone();

        async move {
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            match fail_with {
                Some(message) => Err(TransportError::new(message)),
                None => Ok(response),
            }
        }
    }
}

pub type TestClient = ProviderConfigClient<EchoTransport, StaticProjectResolver>;

/// Client scoped to the mock project.
pub fn echo_client(transport: EchoTransport) -> TestClient {
    init_logging();
    ProviderConfigClient::new(transport, StaticProjectResolver::new(MOCK_PROJECT_ID))
}

/// Client with no project configured.
pub fn unscoped_client() -> TestClient {
    init_logging();
    ProviderConfigClient::new(EchoTransport::new("{}"), StaticProjectResolver::unresolved())
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
