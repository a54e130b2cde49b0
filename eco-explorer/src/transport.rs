//! The HTTP seam.
//!
//! The explorer only needs "GET this request, give me JSON". Timeouts and
//! connection handling belong to the implementation, not the explorer.

use async_trait::async_trait;
#[cfg(any(test, feature = "testing"))]
use eco_core::query::Endpoint;
use eco_core::{query::ApiRequest, TransportError};
use serde_json::Value;
use std::sync::Arc;
#[cfg(any(test, feature = "testing"))]
use std::{
    collections::{HashMap, VecDeque},
    sync::{Mutex, MutexGuard},
};
#[cfg(any(test, feature = "testing", feature = "api"))]
use std::time::Duration;

#[async_trait]
pub trait Transport: Send + Sync {
    async fn get_json(&self, request: &ApiRequest) -> Result<Value, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn get_json(&self, request: &ApiRequest) -> Result<Value, TransportError> {
        (**self).get_json(request).await
    }
}

/// reqwest-backed transport for a live backend.
#[cfg(feature = "api")]
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

#[cfg(feature = "api")]
impl HttpTransport {
    /// `base_url` is the API root, e.g. `http://localhost:8000/api/v1`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(feature = "api")]
#[async_trait]
impl Transport for HttpTransport {
    async fn get_json(&self, request: &ApiRequest) -> Result<Value, TransportError> {
        let url = request.url(&self.base_url);
        log::debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Http(status.as_u16()));
        }
        response
            .json::<Value>()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))
    }
}

#[cfg(any(test, feature = "testing"))]
struct Reply {
    delay: Option<Duration>,
    result: Result<Value, TransportError>,
}

#[cfg(any(test, feature = "testing"))]
#[derive(Default)]
struct ReplayInner {
    replies: HashMap<Endpoint, VecDeque<Reply>>,
    requests: Vec<ApiRequest>,
}

/// In-memory transport that answers each endpoint from a queue of canned
/// replies, in order, and records every request it receives.
///
/// Clones share the same queues. An endpoint with no queued reply answers
/// with a network error.
#[cfg(any(test, feature = "testing"))]
#[derive(Clone, Default)]
pub struct ReplayTransport {
    inner: Arc<Mutex<ReplayInner>>,
}

#[cfg(any(test, feature = "testing"))]
impl ReplayTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, ReplayInner> {
        match self.inner.lock() {
            Ok(inner) => inner,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    pub fn push(&self, endpoint: Endpoint, result: Result<Value, TransportError>) -> &Self {
        self.push_reply(endpoint, Reply { delay: None, result })
    }

    /// Queue a reply that is only delivered after `delay`.
    pub fn push_delayed(
        &self,
        endpoint: Endpoint,
        delay: Duration,
        result: Result<Value, TransportError>,
    ) -> &Self {
        self.push_reply(
            endpoint,
            Reply {
                delay: Some(delay),
                result,
            },
        )
    }

    fn push_reply(&self, endpoint: Endpoint, reply: Reply) -> &Self {
        self.lock()
            .replies
            .entry(endpoint)
            .or_default()
            .push_back(reply);
        self
    }

    /// Every request received so far, in arrival order.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.lock().requests.clone()
    }
}

#[cfg(any(test, feature = "testing"))]
#[async_trait]
impl Transport for ReplayTransport {
    async fn get_json(&self, request: &ApiRequest) -> Result<Value, TransportError> {
        let reply = {
            let mut inner = self.lock();
            inner.requests.push(request.clone());
            inner
                .replies
                .get_mut(&request.endpoint)
                .and_then(VecDeque::pop_front)
        };
        let Some(reply) = reply else {
            return Err(TransportError::Network(format!(
                "no reply queued for {}",
                request.endpoint
            )));
        };
        if let Some(delay) = reply.delay {
            tokio::time::sleep(delay).await;
        }
        reply.result
    }
}
