//! Upstream HTTP client with outcome classification.
//!
//! # Responsibilities
//! - Perform exactly one round trip to the upstream API per call
//! - Attach the API-key and accept-JSON headers on every request
//! - Drop absent optional query parameters before transmission
//! - Classify the outcome (transport error, upstream error, bad JSON)
//! - Emit one observability event per call
//!
//! # Design Decisions
//! - Single attempt, no retries: each call is best-effort
//! - The client never raises; callers always get a classified result
//! - One shared reqwest client, safe for concurrent use via its pool

use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::{header, Method};
use serde_json::Value;
use url::Url;

use crate::config::{ApiKey, UpstreamConfig};
use crate::observability::events::{CallEvent, CallObserver, TracingObserver};
use crate::upstream::types::{UpstreamError, UpstreamResult};

/// Client for the upstream cryptocurrency-data API.
#[derive(Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: ApiKey,
    observer: Arc<dyn CallObserver>,
}

impl UpstreamClient {
    /// Build a client from upstream configuration and the credential.
    ///
    /// The per-call timeout lives here (on the pooled reqwest client); no
    /// retry or backoff policy exists anywhere downstream of it.
    pub fn new(config: &UpstreamConfig, api_key: ApiKey) -> Result<Self, UpstreamError> {
        let base_url: Url = config.base_url.parse().map_err(|e| {
            UpstreamError::Transport(format!(
                "invalid upstream base URL '{}': {}",
                config.base_url, e
            ))
        })?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            api_key,
            observer: Arc::new(TracingObserver),
        })
    }

    /// Replace the default tracing-backed observer. Tests inject a
    /// recording sink here.
    pub fn with_observer(mut self, observer: Arc<dyn CallObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// GET against an upstream path. `query` entries with a `None` value are
    /// dropped before transmission, never sent as empty strings.
    pub async fn get(
        &self,
        operation: &'static str,
        path: &str,
        query: &[(&str, Option<String>)],
    ) -> UpstreamResult {
        self.call(operation, Method::GET, path, query, None).await
    }

    /// POST a JSON body to an upstream path.
    pub async fn post(&self, operation: &'static str, path: &str, body: &Value) -> UpstreamResult {
        self.call(operation, Method::POST, path, &[], Some(body))
            .await
    }

    /// Perform one upstream round trip and classify its outcome.
    ///
    /// `operation` is the logical name the route layer gave this call; it
    /// only feeds the observability event, never the wire request.
    pub async fn call(
        &self,
        operation: &'static str,
        method: Method,
        path: &str,
        query: &[(&str, Option<String>)],
        body: Option<&Value>,
    ) -> UpstreamResult {
        let url = build_url(&self.base_url, path, query);
        let started = Instant::now();

        let outcome = match self.execute(method.clone(), url, body).await {
            Ok((status, payload)) => UpstreamResult::Success { status, payload },
            Err(err) => err.into_failure(),
        };

        self.observer.on_call(&CallEvent {
            operation,
            method: &method,
            path,
            status: outcome.status(),
            duration: started.elapsed(),
        });

        outcome
    }

    async fn execute(
        &self,
        method: Method,
        url: Url,
        body: Option<&Value>,
    ) -> Result<(u16, Value), UpstreamError> {
        let mut request = self
            .http
            .request(method.clone(), url)
            .header("X-API-KEY", self.api_key.expose())
            .header(header::ACCEPT, "application/json");

        // Bodies only travel on POST; GET callers pass None by construction.
        if method == Method::POST {
            if let Some(body) = body {
                request = request.json(body);
            }
        }

        let response = request
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        if status >= 400 {
            // Pass the body through verbatim, JSON or not.
            return Err(UpstreamError::Upstream {
                status,
                message: text,
            });
        }

        let payload: Value = serde_json::from_str(&text)
            .map_err(|e| UpstreamError::MalformedResponse(e.to_string()))?;
        Ok((status, payload))
    }
}

/// Join the fixed base (which may carry a path prefix like `/v2`) with an
/// operation path, appending only the query pairs that have a value.
fn build_url(base: &Url, path: &str, query: &[(&str, Option<String>)]) -> Url {
    let mut url = base.clone();
    let joined = format!("{}{}", base.path().trim_end_matches('/'), path);
    url.set_path(&joined);
    for (key, value) in query {
        if let Some(value) = value {
            url.query_pairs_mut().append_pair(key, value);
        }
    }
    url
}
