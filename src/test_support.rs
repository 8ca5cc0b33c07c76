//! Shared fixtures for unit tests: a scripted transport and sample payloads.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::config::ApiConfig;
use crate::net::api::ApiClient;
use crate::net::transport::{HttpRequest, HttpResponse, Method, Transport, TransportError};
use crate::net::types::{User, UserProfile};
use crate::util::storage::{KeyValueStore, MemoryStorage};

pub const BASE: &str = "http://api.test";

type Reply = Result<HttpResponse, TransportError>;

/// Transport answering by `(method, path)` and recording every request.
///
/// Paths are relative to the users router, e.g. `"/login"`. Unscripted routes
/// answer 404 with a gateway-style body.
#[derive(Default)]
pub struct MockTransport {
    replies: RefCell<HashMap<(Method, String), Reply>>,
    sent: RefCell<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, method: Method, path: &str, status: u16, body: serde_json::Value) -> Self {
        self.replies.borrow_mut().insert(
            (method, path.to_owned()),
            Ok(HttpResponse {
                status,
                body: body.to_string(),
            }),
        );
        self
    }

    pub fn reply_raw(self, method: Method, path: &str, status: u16, body: &str) -> Self {
        self.replies.borrow_mut().insert(
            (method, path.to_owned()),
            Ok(HttpResponse {
                status,
                body: body.to_owned(),
            }),
        );
        self
    }

    pub fn fail(self, method: Method, path: &str) -> Self {
        self.replies
            .borrow_mut()
            .insert((method, path.to_owned()), Err(TransportError("connection refused".to_owned())));
        self
    }

    pub fn sent(&self) -> Vec<HttpRequest> {
        self.sent.borrow().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.borrow().len()
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let prefix = format!("{BASE}/api/v1/users");
        let path = request.url.strip_prefix(&prefix).unwrap_or(&request.url).to_owned();
        let method = request.method;
        self.sent.borrow_mut().push(request);
        self.replies
            .borrow()
            .get(&(method, path))
            .cloned()
            .unwrap_or_else(|| {
                Ok(HttpResponse {
                    status: 404,
                    body: r#"{"detail":"Not Found"}"#.to_owned(),
                })
            })
    }
}

pub fn client(transport: MockTransport, storage: &MemoryStorage) -> ApiClient<MockTransport> {
    let storage: Rc<dyn KeyValueStore> = Rc::new(storage.clone());
    ApiClient::new(ApiConfig::new(BASE), transport, storage)
}

pub fn sample_user() -> User {
    User {
        id: "u1".to_owned(),
        email: "a@b.com".to_owned(),
        first_name: Some("Ada".to_owned()),
        last_name: Some("Byron".to_owned()),
        phone: None,
        is_active: true,
        email_verified: false,
        subscription_tier: "free".to_owned(),
        last_login_at: None,
        created_at: "2024-01-01T00:00:00Z".to_owned(),
        updated_at: "2024-01-01T00:00:00Z".to_owned(),
    }
}

pub fn sample_user_json() -> serde_json::Value {
    serde_json::json!({
        "id": "u1",
        "email": "a@b.com",
        "first_name": "Ada",
        "last_name": "Byron",
        "phone": null,
        "is_active": true,
        "email_verified": false,
        "subscription_tier": "free",
        "last_login_at": null,
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z"
    })
}

pub fn login_ok_json(token: &str) -> serde_json::Value {
    serde_json::json!({
        "access_token": token,
        "token_type": "bearer",
        "user": sample_user_json(),
    })
}

pub fn sample_profile_json() -> serde_json::Value {
    serde_json::json!({
        "id": "p1",
        "user_id": "u1",
        "linkedin_url": "https://linkedin.com/in/ada",
        "location_city": "London",
        "willing_to_relocate": true,
        "years_experience": 7,
        "current_title": "Engineer",
        "target_salary_min": 100000,
        "target_salary_max": 150000,
        "preferred_work_type": "remote",
        "created_at": "2024-01-02T00:00:00Z",
        "updated_at": "2024-01-02T00:00:00Z"
    })
}

pub fn sample_profile() -> UserProfile {
    serde_json::from_value(sample_profile_json()).expect("profile fixture")
}
