//! Shared fixture transport for the behaviour tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use dexgate_core::{
    FavoritesStore, Gateway, HttpClient, HttpError, HttpRequest, HttpResponse, PokeApiAdapter,
    UpstreamConfig,
};
use parking_lot::Mutex;

pub const BASE_URL: &str = "https://upstream.test/api";

/// Canned upstream: answers by exact URL, 404 for anything unknown.
#[derive(Debug, Default)]
pub struct FixtureHttpClient {
    routes: Mutex<HashMap<String, Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
    stall: bool,
}

impl FixtureHttpClient {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// A transport that never answers.
    pub fn stalled() -> Arc<Self> {
        Arc::new(Self {
            stall: true,
            ..Self::default()
        })
    }

    pub fn respond(&self, path: &str, response: Result<HttpResponse, HttpError>) {
        self.routes.lock().insert(format!("{BASE_URL}{path}"), response);
    }

    pub fn respond_json(&self, path: &str, body: impl Into<String>) {
        self.respond(path, Ok(HttpResponse::ok_json(body)));
    }

    pub fn respond_status(&self, path: &str, status: u16) {
        self.respond(path, Ok(HttpResponse::new(status, "")));
    }

    /// Serves `creature_json` for both the numeric id and the name.
    pub fn with_creature(&self, id: u32, name: &str) {
        self.respond_json(&format!("/creature/{id}"), creature_json(id, name));
        self.respond_json(&format!("/creature/{name}"), creature_json(id, name));
    }

    pub fn recorded_urls(&self) -> Vec<String> {
        self.requests
            .lock()
            .iter()
            .map(|request| request.url.clone())
            .collect()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }
}

impl HttpClient for FixtureHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        let response = self
            .routes
            .lock()
            .get(&request.url)
            .cloned()
            .unwrap_or_else(|| Ok(HttpResponse::new(404, "Not Found")));
        self.requests.lock().push(request);

        if self.stall {
            return Box::pin(std::future::pending::<Result<HttpResponse, HttpError>>());
        }
        Box::pin(async move { response })
    }
}

pub fn fixture_config() -> UpstreamConfig {
    UpstreamConfig::default()
        .with_base_url(BASE_URL)
        .with_resource("creature")
}

pub fn adapter(client: Arc<FixtureHttpClient>) -> PokeApiAdapter {
    PokeApiAdapter::with_http_client(client, fixture_config()).expect("fixture config is valid")
}

pub fn gateway(client: Arc<FixtureHttpClient>) -> Gateway {
    Gateway::new(Arc::new(adapter(client)), Arc::new(FavoritesStore::new()))
}

pub fn item_url(id: u32) -> String {
    format!("{BASE_URL}/creature/{id}/")
}

pub fn page_json(count: u64, items: &[(&str, u32)]) -> String {
    let results: Vec<serde_json::Value> = items
        .iter()
        .map(|(name, id)| serde_json::json!({ "name": name, "url": item_url(*id) }))
        .collect();

    serde_json::json!({
        "count": count,
        "next": null,
        "previous": null,
        "results": results,
    })
    .to_string()
}

pub fn creature_json(id: u32, name: &str) -> String {
    serde_json::json!({
        "id": id,
        "name": name,
        "height": 4,
        "weight": 60,
        "base_experience": 112,
        "sprites": {
            "front_default": format!("https://img.test/{id}.png"),
            "front_shiny": null,
            "back_default": null,
            "back_shiny": null,
            "other": { "official-artwork": { "front_default": format!("https://img.test/art/{id}.png") } }
        },
        "types": [
            { "slot": 1, "type": { "name": "electric", "url": "https://upstream.test/api/type/13/" } }
        ],
        "abilities": [
            { "ability": { "name": "static", "url": "https://upstream.test/api/ability/9/" }, "is_hidden": false, "slot": 1 }
        ],
        "stats": [
            { "base_stat": 35, "effort": 0, "stat": { "name": "hp", "url": "https://upstream.test/api/stat/1/" } }
        ],
        "species": { "name": name, "url": format!("https://upstream.test/api/creature-species/{id}/") }
    })
    .to_string()
}
