use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

use super::gemini::{GenerateContentRequest, GenerateContentResponse, GenerationProvider, ProviderError};

#[derive(Debug, Clone)]
enum MockReply {
    Body(Value),
    Status { status: u16, body: String },
}

/// Canned provider for exercising the relays without network access.
///
/// Every call is recorded so tests can assert what was (or was not) sent.
#[derive(Clone)]
pub struct MockProvider {
    reply: Arc<Mutex<MockReply>>,
    calls: Arc<Mutex<Vec<(String, GenerateContentRequest)>>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self {
            reply: Arc::new(Mutex::new(MockReply::Body(json!({
                "candidates": [{ "content": { "parts": [{ "text": "A mock reply" }] } }]
            })))),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Replies 2xx with the given JSON body.
    pub fn with_body(self, body: Value) -> Self {
        *self.reply.lock().unwrap() = MockReply::Body(body);
        self
    }

    /// Replies with a non-2xx status and raw body text.
    pub fn with_status(self, status: u16, body: &str) -> Self {
        *self.reply.lock().unwrap() = MockReply::Status {
            status,
            body: body.to_string(),
        };
        self
    }

    pub fn get_call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_call(&self) -> Option<(String, GenerateContentRequest)> {
        self.calls.lock().unwrap().last().cloned()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenerationProvider for MockProvider {
    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ProviderError> {
        self.calls
            .lock()
            .unwrap()
            .push((model.to_string(), request.clone()));

        let reply = self.reply.lock().unwrap().clone();
        match reply {
            MockReply::Body(body) => serde_json::from_value(body)
                .map_err(|e| ProviderError::InvalidResponse(e.to_string())),
            MockReply::Status { status, body } => Err(ProviderError::Upstream { status, body }),
        }
    }
}
