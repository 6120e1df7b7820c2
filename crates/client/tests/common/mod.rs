//! Common test utilities for integration tests.
//!
//! This module provides shared helper functions and re-exports commonly used
//! types for testing the Kibana client against a `wiremock` server.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - The in-memory store only answers requests that carry `kbn-xsrf: true`
//!
//! # What this does NOT handle
//! - Elasticsearch proxy documents (mock those routes directly in tests)
//! - Test-specific assertions or test logic

use serde_json::{Map, Value, json};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use wiremock::matchers::{header, path_regex};
use wiremock::{Request, Respond};

#[allow(unused_imports)]
pub use kibana_client::testing::load_fixture;
#[allow(unused_imports)]
pub use kibana_client::{Config, KibanaClient};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

const SAVED_OBJECTS_PREFIX: &str = "/api/saved_objects/";

/// Client for a vanilla deployment at `server` running `version`.
#[allow(dead_code)]
pub fn client_for(server: &MockServer, version: &str) -> KibanaClient {
    KibanaClient::new(Config::new(server.uri(), version)).expect("client builds")
}

/// A saved objects API backed by a map, keyed by `(type, id)`.
///
/// Every request body the store receives is recorded so tests can inspect
/// what went over the wire.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct SavedObjectStore {
    objects: Arc<Mutex<HashMap<(String, String), Value>>>,
    bodies: Arc<Mutex<Vec<Value>>>,
    next_id: Arc<AtomicU64>,
}

#[allow(dead_code)]
impl SavedObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount the store on `server` for every saved objects route.
    pub async fn mount(&self, server: &MockServer) {
        Mock::given(path_regex("^/api/saved_objects/"))
            .and(header("kbn-xsrf", "true"))
            .respond_with(self.clone())
            .mount(server)
            .await;
    }

    /// Request bodies received so far, in arrival order.
    pub fn bodies(&self) -> Vec<Value> {
        self.bodies.lock().unwrap().clone()
    }

    pub fn last_body(&self) -> Value {
        self.bodies().pop().expect("no request body recorded")
    }

    pub fn len(&self) -> usize {
        self.objects.lock().unwrap().len()
    }

    /// Seed an object as if a previous session had created it.
    pub fn insert(&self, object_type: &str, id: &str, attributes: Value, references: Value) {
        let object = stored(object_type, id, attributes, Some(references));
        self.objects
            .lock()
            .unwrap()
            .insert((object_type.to_string(), id.to_string()), object);
    }

    fn write(
        &self,
        object_type: &str,
        id: String,
        body: &Value,
        previous_references: Option<Value>,
    ) -> ResponseTemplate {
        let object = stored(
            object_type,
            &id,
            body.get("attributes").cloned().unwrap_or_else(|| json!({})),
            body.get("references").cloned().or(previous_references),
        );
        self.objects
            .lock()
            .unwrap()
            .insert((object_type.to_string(), id), object.clone());
        ResponseTemplate::new(200).set_body_json(object)
    }

    fn find(&self, request: &Request) -> ResponseTemplate {
        let mut object_type = None;
        let mut per_page = 20usize;
        let mut page = 1usize;
        for (key, value) in request.url.query_pairs() {
            match key.as_ref() {
                "type" => object_type = Some(value.to_string()),
                "per_page" => per_page = value.parse().unwrap_or(20),
                "page" => page = value.parse().unwrap_or(1),
                _ => {}
            }
        }

        let objects = self.objects.lock().unwrap();
        let mut matching: Vec<&Value> = objects
            .iter()
            .filter(|((t, _), _)| object_type.as_deref().is_none_or(|wanted| wanted == t))
            .map(|(_, object)| object)
            .collect();
        matching.sort_by_key(|o| o["id"].as_str().unwrap_or_default().to_string());
        let total = matching.len();
        let objects: Vec<Value> = matching
            .into_iter()
            .skip(page.saturating_sub(1) * per_page)
            .take(per_page)
            .cloned()
            .collect();

        ResponseTemplate::new(200).set_body_json(json!({
            "page": page,
            "per_page": per_page,
            "total": total,
            "saved_objects": objects,
        }))
    }
}

fn stored(object_type: &str, id: &str, attributes: Value, references: Option<Value>) -> Value {
    let mut object = Map::new();
    object.insert("id".to_string(), json!(id));
    object.insert("type".to_string(), json!(object_type));
    object.insert("version".to_string(), json!("WzEsMV0="));
    object.insert("attributes".to_string(), attributes);
    if let Some(references) = references {
        object.insert("references".to_string(), references);
    }
    Value::Object(object)
}

fn not_found(object_type: &str, id: &str) -> ResponseTemplate {
    ResponseTemplate::new(404).set_body_json(json!({
        "statusCode": 404,
        "error": "Not Found",
        "message": format!("Saved object [{object_type}/{id}] not found"),
    }))
}

impl Respond for SavedObjectStore {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let rest = request
            .url
            .path()
            .strip_prefix(SAVED_OBJECTS_PREFIX)
            .unwrap_or_default();
        let segments: Vec<&str> = rest.split('/').filter(|s| !s.is_empty()).collect();
        let body: Value = serde_json::from_slice(&request.body).unwrap_or(Value::Null);
        if !body.is_null() {
            self.bodies.lock().unwrap().push(body.clone());
        }

        match (request.method.as_str(), segments.as_slice()) {
            ("GET", []) | ("GET", ["_find"]) => self.find(request),
            ("POST", [object_type]) => {
                let id = format!("generated-{}", self.next_id.fetch_add(1, Ordering::SeqCst));
                self.write(object_type, id, &body, None)
            }
            ("POST", [object_type, id]) => self.write(object_type, id.to_string(), &body, None),
            ("PUT", [object_type, id]) => {
                let key = (object_type.to_string(), id.to_string());
                let previous = self.objects.lock().unwrap().get(&key).cloned();
                match previous {
                    // Omitted references are kept, as Kibana does.
                    Some(object) => {
                        self.write(object_type, id.to_string(), &body, object.get("references").cloned())
                    }
                    None => not_found(object_type, id),
                }
            }
            ("GET", [object_type, id]) => {
                let key = (object_type.to_string(), id.to_string());
                match self.objects.lock().unwrap().get(&key) {
                    Some(object) => ResponseTemplate::new(200).set_body_json(object),
                    None => not_found(object_type, id),
                }
            }
            ("DELETE", [object_type, id]) => {
                let key = (object_type.to_string(), id.to_string());
                match self.objects.lock().unwrap().remove(&key) {
                    Some(_) => ResponseTemplate::new(200).set_body_json(json!({})),
                    None => not_found(object_type, id),
                }
            }
            _ => ResponseTemplate::new(400).set_body_string("unexpected saved objects route"),
        }
    }
}
