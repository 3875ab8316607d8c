//! Elasticsearch endpoint and credential resolution.
//!
//! A cloud identifier takes precedence over a direct URL, and an API key
//! over a username/password pair. The result is an immutable [`EsConfig`]
//! shared read-only by every request.

use std::collections::HashMap;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::error::SearchError;

/// Resolved connection settings for the Elasticsearch backend.
///
/// `base_url` never ends with a slash; `headers` always carry a
/// Content-Type.
#[derive(Debug, Clone)]
pub struct EsConfig {
    pub base_url: String,
    pub headers: HashMap<String, String>,
}

impl EsConfig {
    /// Resolve endpoint and credentials from the environment.
    ///
    /// Reads `ELASTICSEARCH_CLOUD_ID`, `ELASTICSEARCH_URL`,
    /// `ELASTICSEARCH_API_KEY` and the `ELASTICSEARCH_USERNAME` /
    /// `ELASTICSEARCH_PASSWORD` pair. Missing both endpoint variables is a
    /// configuration error.
    pub fn from_env() -> Result<Self, SearchError> {
        let cloud_id = std::env::var("ELASTICSEARCH_CLOUD_ID").ok();
        let url = std::env::var("ELASTICSEARCH_URL").ok();
        let api_key = std::env::var("ELASTICSEARCH_API_KEY").ok();
        let username = std::env::var("ELASTICSEARCH_USERNAME").ok();
        let password = std::env::var("ELASTICSEARCH_PASSWORD").ok();

        Self::resolve(
            cloud_id.as_deref(),
            url.as_deref(),
            api_key.as_deref(),
            username.as_deref(),
            password.as_deref(),
        )
    }

    /// Pure resolution step, split from [`EsConfig::from_env`] so it can be
    /// exercised without touching process environment.
    pub fn resolve(
        cloud_id: Option<&str>,
        url: Option<&str>,
        api_key: Option<&str>,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<Self, SearchError> {
        let base_url = match (cloud_id, url) {
            (Some(cloud_id), _) => decode_cloud_id(cloud_id)?,
            (None, Some(url)) => url.strip_suffix('/').unwrap_or(url).to_owned(),
            (None, None) => {
                return Err(SearchError::Config(
                    "missing Elasticsearch endpoint: set ELASTICSEARCH_CLOUD_ID or ELASTICSEARCH_URL"
                        .to_owned(),
                ))
            }
        };

        let mut headers = HashMap::new();
        if let Some(key) = api_key {
            headers.insert(
                "Authorization".to_owned(),
                format!("ApiKey {}", BASE64.encode(key)),
            );
        } else if let (Some(user), Some(pass)) = (username, password) {
            headers.insert(
                "Authorization".to_owned(),
                format!("Basic {}", BASE64.encode(format!("{user}:{pass}"))),
            );
        }
        headers
            .entry("Content-Type".to_owned())
            .or_insert_with(|| "application/json".to_owned());

        Ok(Self { base_url, headers })
    }
}

/// Decode a cloud identifier into an https base URL.
///
/// The identifier may carry a human-readable label before the first colon.
/// The remainder base64-decodes to `domain[:port]$es-id$kibana-id`; the
/// kibana segment is unused and the port defaults to 443.
pub fn decode_cloud_id(cloud_id: &str) -> Result<String, SearchError> {
    let encoded = match cloud_id.find(':') {
        Some(pos) if pos == cloud_id.len() - 1 => {
            return Err(SearchError::Config(format!(
                "cloud id {cloud_id} has a label but no payload after the colon"
            )))
        }
        Some(pos) => &cloud_id[pos + 1..],
        None => cloud_id,
    };

    let decoded = BASE64
        .decode(encoded)
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok())
        .ok_or_else(|| {
            SearchError::Config(format!("cloud id {cloud_id} is not base64-encoded text"))
        })?;

    let parts: Vec<&str> = decoded.split('$').collect();
    if parts.len() != 3 {
        return Err(SearchError::Config(format!(
            "cloud id {cloud_id} did not decode to a cluster identifier"
        )));
    }

    let (domain, port) = match parts[0].split_once(':') {
        Some((domain, port)) => {
            let port: u16 = port.parse().map_err(|_| {
                SearchError::Config(format!("cloud id {cloud_id} carries an invalid port"))
            })?;
            (domain, port)
        }
        None => (parts[0], 443),
    };

    Ok(format!("https://{}.{}:{}", parts[1], domain, port))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(decoded: &str) -> String {
        BASE64.encode(decoded)
    }

    #[test]
    fn decodes_cloud_id_with_label() {
        let cloud_id = format!("my-cluster:{}", encode("host.example.com$deadbeef$kibana"));
        let url = decode_cloud_id(&cloud_id).expect("should decode");
        assert_eq!(url, "https://deadbeef.host.example.com:443");
    }

    #[test]
    fn decodes_cloud_id_without_label() {
        let cloud_id = encode("host.example.com$deadbeef$kibana");
        let url = decode_cloud_id(&cloud_id).expect("should decode");
        assert_eq!(url, "https://deadbeef.host.example.com:443");
    }

    #[test]
    fn explicit_port_is_honored() {
        let cloud_id = encode("host.example.com:9243$deadbeef$kibana");
        let url = decode_cloud_id(&cloud_id).expect("should decode");
        assert_eq!(url, "https://deadbeef.host.example.com:9243");
    }

    #[test]
    fn trailing_colon_is_malformed() {
        let err = decode_cloud_id("label-without-payload:").expect_err("should fail");
        assert!(matches!(err, SearchError::Config(_)));
    }

    #[test]
    fn wrong_segment_count_is_malformed() {
        let err = decode_cloud_id(&encode("host.example.com$only-two")).expect_err("should fail");
        assert!(matches!(err, SearchError::Config(_)));

        let err =
            decode_cloud_id(&encode("host$es$kibana$extra")).expect_err("should fail");
        assert!(matches!(err, SearchError::Config(_)));
    }

    #[test]
    fn non_numeric_port_is_malformed() {
        let err =
            decode_cloud_id(&encode("host.example.com:ninety$es$kibana")).expect_err("should fail");
        assert!(matches!(err, SearchError::Config(_)));
    }

    #[test]
    fn garbage_base64_is_malformed() {
        let err = decode_cloud_id("label:!!!not-base64!!!").expect_err("should fail");
        assert!(matches!(err, SearchError::Config(_)));
    }

    #[test]
    fn cloud_id_wins_over_url() {
        let cloud_id = encode("host.example.com$es$kibana");
        let config = EsConfig::resolve(
            Some(&cloud_id),
            Some("http://ignored:9200"),
            None,
            None,
            None,
        )
        .expect("should resolve");
        assert_eq!(config.base_url, "https://es.host.example.com:443");
    }

    #[test]
    fn direct_url_loses_trailing_slash() {
        let config = EsConfig::resolve(None, Some("http://localhost:9200/"), None, None, None)
            .expect("should resolve");
        assert_eq!(config.base_url, "http://localhost:9200");
    }

    #[test]
    fn missing_endpoint_is_a_config_error() {
        let err = EsConfig::resolve(None, None, None, None, None).expect_err("should fail");
        let message = err.to_string();
        assert!(message.contains("ELASTICSEARCH_CLOUD_ID"));
        assert!(message.contains("ELASTICSEARCH_URL"));
    }

    #[test]
    fn api_key_wins_over_basic_auth() {
        let config = EsConfig::resolve(
            None,
            Some("http://localhost:9200"),
            Some("the-key"),
            Some("user"),
            Some("pass"),
        )
        .expect("should resolve");
        assert_eq!(
            config.headers.get("Authorization").map(String::as_str),
            Some(format!("ApiKey {}", BASE64.encode("the-key")).as_str())
        );
    }

    #[test]
    fn basic_auth_encodes_user_colon_password() {
        let config = EsConfig::resolve(
            None,
            Some("http://localhost:9200"),
            None,
            Some("user"),
            Some("pass"),
        )
        .expect("should resolve");
        // base64("user:pass")
        assert_eq!(
            config.headers.get("Authorization").map(String::as_str),
            Some("Basic dXNlcjpwYXNz")
        );
    }

    #[test]
    fn no_credentials_means_no_authorization_header() {
        let config = EsConfig::resolve(None, Some("http://localhost:9200"), None, None, None)
            .expect("should resolve");
        assert!(!config.headers.contains_key("Authorization"));
    }

    #[test]
    fn content_type_is_always_present() {
        let config = EsConfig::resolve(None, Some("http://localhost:9200"), None, None, None)
            .expect("should resolve");
        assert_eq!(
            config.headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
    }
}
