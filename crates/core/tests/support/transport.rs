//! Scripted `SoapTransport` that replays canned responses in order

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use intercall_core::{SoapRequest, SoapResponse, SoapTransport};
use intercall_domain::{IntercallError, Result};

pub const ENDPOINT: &str = "https://soap.intercall.test/ownerAPI";

/// Replays queued results and records every request it receives.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    responses: Arc<Mutex<VecDeque<Result<String>>>>,
    requests: Arc<Mutex<Vec<SoapRequest>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response body.
    pub fn respond(self, body: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push_back(Ok(body.into()));
        self
    }

    /// Queue a transport failure.
    pub fn fail(self, message: &str) -> Self {
        self.responses.lock().unwrap().push_back(Err(IntercallError::Transport(message.into())));
        self
    }

    pub fn requests(&self) -> Vec<SoapRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn envelopes(&self) -> Vec<String> {
        self.requests().into_iter().map(|request| request.envelope).collect()
    }
}

#[async_trait]
impl SoapTransport for ScriptedTransport {
    async fn send(&self, request: &SoapRequest) -> Result<SoapResponse> {
        self.requests.lock().unwrap().push(request.clone());
        let next = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(IntercallError::Transport("no scripted response left".into())));
        next.map(|body| SoapResponse { url: ENDPOINT.to_string(), http_status: 200, body })
    }
}
