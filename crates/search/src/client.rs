//! HTTP gateway to the Elasticsearch persons index.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::StatusCode;

use crate::endpoint::EsConfig;
use crate::error::SearchError;
use crate::model::{Person, SearchResponse};
use crate::{parse, template};

const INDEX: &str = "persons";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Stateless gateway over a shared connection pool; the only persistent
/// state is the immutable [`EsConfig`] captured at construction.
#[derive(Clone)]
pub struct EsClient {
    client: reqwest::Client,
    config: EsConfig,
}

impl EsClient {
    pub fn new(config: EsConfig) -> Result<Self, SearchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client, config })
    }

    /// Render the named search template with `query` and POST it to the
    /// persons `_search` API. A non-success status is surfaced with the
    /// backend's payload instead of being mis-parsed as an empty result.
    pub async fn search(
        &self,
        template_name: &str,
        query: &str,
    ) -> Result<SearchResponse, SearchError> {
        let params = HashMap::from([("query", query)]);
        let body = template::render(template_name, &params);
        let url = format!("{}/{}/_search", self.config.base_url, INDEX);

        let response = self.with_headers(self.client.post(&url)).body(body).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, "search rejected by Elasticsearch");
            return Err(SearchError::SearchFailed { status, body });
        }

        let bytes = response.bytes().await?;
        Ok(parse::search_response(&bytes)?)
    }

    /// Render the person template and POST it to the persons `_doc` API.
    /// 201 Created is the only success status; anything else is surfaced
    /// with the observed status code and the backend's error payload.
    pub async fn index(&self, person: &Person) -> Result<(), SearchError> {
        let params = HashMap::from([
            ("firstName", person.first_name.as_str()),
            ("lastName", person.last_name.as_str()),
            ("employer", person.employer.as_str()),
        ]);
        let body = template::render("person", &params);
        let url = format!("{}/{}/_doc/", self.config.base_url, INDEX);

        let response = self.with_headers(self.client.post(&url)).body(body).send().await?;
        let status = response.status();
        if status != StatusCode::CREATED {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, "indexing rejected by Elasticsearch");
            return Err(SearchError::IndexingFailed { status, body });
        }
        Ok(())
    }

    fn with_headers(&self, mut request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        for (name, value) in &self.config.headers {
            request = request.header(name.as_str(), value.as_str());
        }
        request
    }
}
