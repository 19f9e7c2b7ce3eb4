use anyhow::{anyhow, Context};
use async_trait::async_trait;
use hyper::{Body, Client, Request, Uri};
use hyper::body::to_bytes;
use hyper::client::HttpConnector;
use hyper::header::{ACCEPT, USER_AGENT};
use hyper_tls::HttpsConnector;
use tracing::{debug, trace};

use crate::nexus::query::SearchQuery;
use crate::nexus::search_response::SearchNgResponse;

pub const LUCENE_SEARCH_SERVICE_PATH: &str = "service/local/lucene/search";

/// Sends a search query to a Nexus server.
///
/// `Ok(None)` means the server answered without a body, which is not the same as an empty
///  result list.
#[async_trait]
pub trait SearchTransport: Send + Sync {
    async fn search(&self, query: &SearchQuery) -> anyhow::Result<Option<SearchNgResponse>>;
}

/// Queries the Lucene search service below a fixed base URI.
///
/// Instances do HTTP connection caching internally, so keeping them alive has performance benefits.
pub struct HyperSearchTransport {
    client: Client<HttpsConnector<HttpConnector>>,
    search_uri: String,
}
impl HyperSearchTransport {
    pub fn new(base_uri: &str) -> anyhow::Result<HyperSearchTransport> {
        let mut search_uri = base_uri.to_string();
        if !search_uri.ends_with('/') {
            search_uri.push('/');
        }
        search_uri.push_str(LUCENE_SEARCH_SERVICE_PATH);

        // check that the base URI is valid
        Uri::try_from(search_uri.clone())
            .with_context(|| format!("invalid repository base URL {:?}", base_uri))?;

        Ok(HyperSearchTransport {
            client: Client::builder()
                .build::<_, Body>(HttpsConnector::new()),
            search_uri,
        })
    }

    pub fn search_uri(&self) -> &str {
        &self.search_uri
    }

    fn request_uri(&self, query: &SearchQuery) -> anyhow::Result<Uri> {
        let uri = if query.is_empty() {
            self.search_uri.clone()
        }
        else {
            format!("{}?{}", self.search_uri, query.to_query_string())
        };
        Ok(Uri::try_from(uri)?)
    }
}

#[async_trait]
impl SearchTransport for HyperSearchTransport {
    async fn search(&self, query: &SearchQuery) -> anyhow::Result<Option<SearchNgResponse>> {
        let request = Request::builder()
            .method("GET")
            .uri(self.request_uri(query)?)
            .header(ACCEPT, "application/xml")
            .header(USER_AGENT, concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .body(Body::empty())?;

        trace!("querying {:?}", request);

        let response = self.client.request(request)
            .await
            .with_context(|| format!("search request to {} failed", self.search_uri))?;

        if !response.status().is_success() {
            return Err(anyhow!("search request to {} failed: {}", self.search_uri, response.status()));
        }

        let body = to_bytes(response.into_body()).await?;
        let body = std::str::from_utf8(&body)
            .context("search response is not valid UTF-8")?;
        if body.trim().is_empty() {
            debug!("search response from {} has no body", self.search_uri);
            return Ok(None);
        }

        let parsed = SearchNgResponse::parse_xml(body)
            .with_context(|| format!("malformed search response from {}", self.search_uri))?;
        Ok(Some(parsed))
    }
}
