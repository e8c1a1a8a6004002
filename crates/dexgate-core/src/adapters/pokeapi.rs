use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::{ConfigError, UpstreamConfig};
use crate::data_source::{
    CreatureSource, PageRequest, SourceFuture, UpstreamError, SEARCH_CEILING,
};
use crate::http_client::{HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient};
use crate::normalize::{
    normalize_creature, normalize_list_item, normalize_page, IdExtractor, UpstreamCreature,
    UpstreamPage,
};
use crate::{Creature, CreatureList, CreatureListItem};

const LIST_CONTEXT: &str = "failed to fetch creature list";
const SEARCH_CONTEXT: &str = "failed to search creatures";

/// PokeAPI-style REST adapter: `GET {base}/{resource}` pages and
/// `GET {base}/{resource}/{identifier}` details.
#[derive(Clone)]
pub struct PokeApiAdapter {
    http_client: Arc<dyn HttpClient>,
    config: UpstreamConfig,
    ids: IdExtractor,
}

impl PokeApiAdapter {
    /// Builds an adapter that talks to the network through reqwest.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `config` fails validation.
    pub fn new(config: UpstreamConfig) -> Result<Self, ConfigError> {
        let http_client = Arc::new(ReqwestHttpClient::new(&config.user_agent));
        Self::with_http_client(http_client, config)
    }

    /// # Errors
    ///
    /// Returns [`ConfigError`] if `config` fails validation.
    pub fn with_http_client(
        http_client: Arc<dyn HttpClient>,
        config: UpstreamConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let ids = IdExtractor::new(&config.resource).map_err(|error| {
            ConfigError::InvalidResource {
                resource: config.resource.clone(),
                message: error.to_string(),
            }
        })?;

        Ok(Self {
            http_client,
            config,
            ids,
        })
    }

    pub fn config(&self) -> &UpstreamConfig {
        &self.config
    }

    /// Numeric id carried by a resource URL of this upstream, 0 if none.
    pub fn extract_id(&self, url: &str) -> u32 {
        self.ids.extract(url)
    }

    fn collection_url(&self) -> String {
        format!("{}/{}", self.config.base_url(), self.config.resource)
    }

    async fn execute(&self, url: String, context: &str) -> Result<HttpResponse, UpstreamError> {
        let request = HttpRequest::get(url)
            .with_header("accept", "application/json")
            .with_timeout_ms(self.config.timeout_ms);
        let budget = request.timeout();
        debug!(url = %request.url, timeout_ms = self.config.timeout_ms, "upstream request");

        let outcome = tokio::time::timeout(budget, self.http_client.execute(request))
            .await
            .unwrap_or_else(|_| Err(HttpError::timeout(budget)));

        outcome.map_err(|error| {
            warn!(error = %error, "{context}: no response from upstream");
            UpstreamError::no_response(context, &error)
        })
    }

    fn status_error(response: &HttpResponse, context: &str) -> UpstreamError {
        warn!(status = response.status, "{context}: unexpected upstream status");
        UpstreamError::status(context, response.status, response.reason())
    }

    async fn fetch_page(
        &self,
        page: PageRequest,
        context: &str,
    ) -> Result<UpstreamPage, UpstreamError> {
        let url = format!(
            "{}?limit={}&offset={}",
            self.collection_url(),
            page.limit,
            page.offset
        );
        let response = self.execute(url, context).await?;
        if !response.is_success() {
            return Err(Self::status_error(&response, context));
        }

        serde_json::from_str(&response.body).map_err(|error| UpstreamError::decode(context, &error))
    }

    async fn fetch_creature(&self, identifier: &str) -> Result<Option<Creature>, UpstreamError> {
        let context = format!("failed to fetch creature '{identifier}'");
        let url = format!(
            "{}/{}",
            self.collection_url(),
            urlencoding::encode(identifier.trim())
        );

        let response = self.execute(url, &context).await?;
        if response.is_not_found() {
            debug!(identifier, "creature not found upstream");
            return Ok(None);
        }
        if !response.is_success() {
            return Err(Self::status_error(&response, &context));
        }

        let raw: UpstreamCreature = serde_json::from_str(&response.body)
            .map_err(|error| UpstreamError::decode(&context, &error))?;
        Ok(Some(normalize_creature(raw)))
    }

    async fn search(&self, query: &str) -> Result<Vec<CreatureListItem>, UpstreamError> {
        let needle = query.trim().to_lowercase();
        let page = self
            .fetch_page(PageRequest::new(SEARCH_CEILING, 0), SEARCH_CONTEXT)
            .await?;

        Ok(page
            .results
            .into_iter()
            .filter(|item| item.name.to_lowercase().contains(&needle))
            .map(|item| normalize_list_item(item, &self.ids))
            .collect())
    }
}

impl CreatureSource for PokeApiAdapter {
    fn list_creatures(&self, page: PageRequest) -> SourceFuture<'_, CreatureList> {
        Box::pin(async move {
            let raw = self.fetch_page(page, LIST_CONTEXT).await?;
            Ok(normalize_page(raw, &self.ids))
        })
    }

    fn get_creature<'a>(&'a self, identifier: &'a str) -> SourceFuture<'a, Option<Creature>> {
        Box::pin(self.fetch_creature(identifier))
    }

    fn search_creatures<'a>(&'a self, query: &'a str) -> SourceFuture<'a, Vec<CreatureListItem>> {
        Box::pin(self.search(query))
    }
}
