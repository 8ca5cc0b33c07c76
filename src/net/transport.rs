//! Raw HTTP transport seam under the REST client.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ApiClient` builds fully resolved requests and hands them to a `Transport`.
//! In the browser (`hydrate`) that is `FetchTransport` over `gloo-net`; on the
//! server and in native builds the same type reports a network failure, since
//! these endpoints are only meaningful from the browser.

#![allow(clippy::unused_async)]

use std::future::Future;

/// HTTP verbs used by the REST client.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
        }
    }
}

/// A fully resolved outbound request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    /// Absolute URL including the base path.
    pub url: String,
    /// Header pairs in send order; names are unique case-insensitively.
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Status and raw body of a response that reached the client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request never produced a response (DNS, CORS, offline, aborted).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportError(pub String);

/// Sends one request and yields the response or a transport failure.
///
/// Futures are not required to be `Send`: everything runs on the browser's
/// single-threaded event loop.
pub trait Transport {
    fn send(&self, request: HttpRequest) -> impl Future<Output = Result<HttpResponse, TransportError>>;
}

/// Browser `fetch` transport backed by `gloo-net`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::{Method as GlooMethod, RequestBuilder};

            let method = match request.method {
                Method::Get => GlooMethod::GET,
                Method::Post => GlooMethod::POST,
                Method::Put => GlooMethod::PUT,
            };
            let mut builder = RequestBuilder::new(&request.url).method(method);
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            let prepared = match request.body {
                Some(body) => builder.body(body),
                None => builder.build(),
            }
            .map_err(|e| TransportError(e.to_string()))?;
            let resp = prepared.send().await.map_err(|e| TransportError(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| TransportError(e.to_string()))?;
            Ok(HttpResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(TransportError("not available on server".to_owned()))
        }
    }
}
