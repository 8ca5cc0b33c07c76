//! REST client for the gateway's user/auth router.
//!
//! Every request is resolved against `{base_url}/api/v1/users`, sent as JSON,
//! and carries the bearer token from durable storage when one is saved.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as `ApiError`: `Network` when nothing was received,
//! `Http` with the gateway's `detail` message otherwise. The client never
//! touches session state; the auth store interprets outcomes.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::transport::{HttpRequest, Method, Transport, TransportError};
use super::types::{AuthResponse, LoginRequest, ProfileFields, RegisterRequest, User, UserProfile};
use crate::config::ApiConfig;
use crate::util::storage::{KeyValueStore, TOKEN_KEY};

/// Per-call request shape. Headers here override the JSON default.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    /// Request with a JSON-encoded body.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Encode` if `body` cannot be serialized.
    pub fn json<B: Serialize>(method: Method, body: &B) -> Result<Self, ApiError> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(Self {
            method,
            headers: Vec::new(),
            body: Some(body),
        })
    }

    #[must_use]
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }
}

pub struct ApiClient<T> {
    config: ApiConfig,
    transport: Rc<T>,
    storage: Rc<dyn KeyValueStore>,
}

impl<T> Clone for ApiClient<T> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            transport: Rc::clone(&self.transport),
            storage: Rc::clone(&self.storage),
        }
    }
}

fn set_header(headers: &mut Vec<(String, String)>, name: &str, value: &str) {
    match headers.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(name)) {
        Some(slot) => slot.1 = value.to_owned(),
        None => headers.push((name.to_owned(), value.to_owned())),
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(config: ApiConfig, transport: T, storage: Rc<dyn KeyValueStore>) -> Self {
        Self {
            config,
            transport: Rc::new(transport),
            storage,
        }
    }

    #[cfg(test)]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn storage(&self) -> &Rc<dyn KeyValueStore> {
        &self.storage
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.config.users_base())
    }

    /// Resolve URL and headers for `endpoint` without sending anything.
    pub fn build_request(&self, endpoint: &str, options: RequestOptions) -> HttpRequest {
        let mut headers = vec![("Content-Type".to_owned(), "application/json".to_owned())];
        for (name, value) in &options.headers {
            set_header(&mut headers, name, value);
        }
        if let Some(token) = self.storage.get_item(TOKEN_KEY).filter(|t| !t.is_empty()) {
            set_header(&mut headers, "Authorization", &format!("Bearer {token}"));
        }
        HttpRequest {
            method: options.method,
            url: self.endpoint_url(endpoint),
            headers,
            body: options.body,
        }
    }

    /// Send a request and decode a JSON success body into `R`.
    ///
    /// # Errors
    ///
    /// `Network` if no response arrived, `Http` for non-2xx statuses, and
    /// `Decode` when a 2xx body does not match `R`.
    pub async fn request<R: DeserializeOwned>(&self, endpoint: &str, options: RequestOptions) -> Result<R, ApiError> {
        let request = self.build_request(endpoint, options);
        let method = request.method;
        let resp = self
            .transport
            .send(request)
            .await
            .map_err(|TransportError(reason)| {
                leptos::logging::warn!("{} {endpoint} failed: {reason}", method.as_str());
                ApiError::Network(reason)
            })?;
        if !resp.is_success() {
            return Err(ApiError::from_response(resp.status, &resp.body));
        }
        serde_json::from_str(&resp.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// `POST /login`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let body = LoginRequest {
            email: email.to_owned(),
            password: password.to_owned(),
        };
        self.request("/login", RequestOptions::json(Method::Post, &body)?)
            .await
    }

    /// `POST /register`. Returns the created user; no token is issued.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn register(&self, data: &RegisterRequest) -> Result<User, ApiError> {
        self.request("/register", RequestOptions::json(Method::Post, data)?)
            .await
    }

    /// `GET /me`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.request("/me", RequestOptions::get()).await
    }

    /// `GET /me/profile`. A user without a profile yields a 404 `Http` error.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn user_profile(&self) -> Result<UserProfile, ApiError> {
        self.request("/me/profile", RequestOptions::get()).await
    }

    /// `PUT /me/profile` with only the fields set in `fields`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn update_user_profile(&self, fields: &ProfileFields) -> Result<UserProfile, ApiError> {
        self.request("/me/profile", RequestOptions::json(Method::Put, fields)?)
            .await
    }

    /// `POST /me/profile`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn create_user_profile(&self, fields: &ProfileFields) -> Result<UserProfile, ApiError> {
        self.request("/me/profile", RequestOptions::json(Method::Post, fields)?)
            .await
    }
}
