//! HTTP transport seam. The fetcher talks to this trait so tests can script responses.

use {async_trait::async_trait, thiserror::Error};

#[cfg(not(target_arch = "wasm32"))]
use {crate::config::SERVICES, std::time::Duration};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("could not read response body: {0}")]
    Body(String),
}

/// Raw response: status code plus undecoded body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Query parameters in request order. Values are already formatted.
pub type Query<'a> = [(&'a str, String)];

/// A GET-only HTTP client.
///
/// Futures are `Send` on native targets (they run inside a tokio runtime) and
/// `?Send` in the browser where everything lives on the main thread.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait HttpGet {
    async fn get(
        &self,
        url: &str,
        query: &Query<'_>,
        headers: &[(&str, &str)],
    ) -> Result<HttpResponse, TransportError>;
}

/// `reqwest`-backed client (tokio on native, `fetch` in the browser).
#[derive(Clone)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    pub fn new() -> Result<Self, TransportError> {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_millis(SERVICES.client.timeout_ms));
        let client = builder
            .build()
            .map_err(|e| TransportError::Request(e.without_url().to_string()))?;
        Ok(Self { client })
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl HttpGet for ReqwestClient {
    async fn get(
        &self,
        url: &str,
        query: &Query<'_>,
        headers: &[(&str, &str)],
    ) -> Result<HttpResponse, TransportError> {
        let mut request = self.client.get(url).query(query);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        // reqwest errors embed the full URL, query string included. Strip it: the
        // prayer request carries the API key.
        let response = request
            .send()
            .await
            .map_err(|e| TransportError::Request(e.without_url().to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Body(e.without_url().to_string()))?;

        Ok(HttpResponse {
            status,
            body: body.to_vec(),
        })
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub(crate) mod fake {
    //! Scripted client for fetcher tests.
    use super::*;
    use std::{
        collections::HashMap,
        sync::Mutex,
        time::Duration,
    };

    #[derive(Clone)]
    pub(crate) enum Scripted {
        Respond(HttpResponse),
        Fail(TransportError),
    }

    #[derive(Debug, Clone)]
    pub(crate) struct RecordedRequest {
        pub url: String,
        pub query: Vec<(String, String)>,
        pub headers: Vec<(String, String)>,
    }

    /// Answers by URL, optionally after a simulated latency.
    #[derive(Default)]
    pub(crate) struct FakeHttp {
        routes: HashMap<String, (Scripted, Duration)>,
        pub requests: Mutex<Vec<RecordedRequest>>,
    }

    impl FakeHttp {
        pub fn route(mut self, url: &str, reply: Scripted) -> Self {
            self.routes.insert(url.to_owned(), (reply, Duration::ZERO));
            self
        }

        pub fn route_after(mut self, url: &str, reply: Scripted, latency: Duration) -> Self {
            self.routes.insert(url.to_owned(), (reply, latency));
            self
        }

        pub fn json(status: u16, body: &str) -> Scripted {
            Scripted::Respond(HttpResponse {
                status,
                body: body.as_bytes().to_vec(),
            })
        }

        pub fn request_to(&self, url: &str) -> Option<RecordedRequest> {
            self.requests
                .lock()
                .unwrap()
                .iter()
                .find(|r| r.url == url)
                .cloned()
        }
    }

    #[async_trait]
    impl HttpGet for FakeHttp {
        async fn get(
            &self,
            url: &str,
            query: &Query<'_>,
            headers: &[(&str, &str)],
        ) -> Result<HttpResponse, TransportError> {
            self.requests.lock().unwrap().push(RecordedRequest {
                url: url.to_owned(),
                query: query
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.clone()))
                    .collect(),
                headers: headers
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            });

            let Some((reply, latency)) = self.routes.get(url).cloned() else {
                return Err(TransportError::Request(format!("no route for {url}")));
            };
            if !latency.is_zero() {
                tokio::time::sleep(latency).await;
            }
            match reply {
                Scripted::Respond(response) => Ok(response),
                Scripted::Fail(err) => Err(err),
            }
        }
    }
}
