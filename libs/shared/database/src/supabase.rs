use anyhow::{Result, anyhow};
use reqwest::{
    Client,
    header::{HeaderMap, HeaderValue, CONTENT_TYPE, AUTHORIZATION},
};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use shared_config::AppConfig;

/// Thin PostgREST client. Every call forwards the caller's bearer token so
/// row-level security applies to the authenticated user.
#[derive(Clone)]
pub struct SupabaseClient {
    client: Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.supabase_url.trim_end_matches('/').to_string(),
            anon_key: config.supabase_anon_key.clone(),
        }
    }

    fn get_headers(&self, auth_token: &str) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        headers.insert("apikey", HeaderValue::from_str(&self.anon_key)?);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", auth_token))?,
        );

        Ok(headers)
    }

    /// `GET /rest/v1/{table}` with `params` encoded into the query string,
    /// returning the decoded rows.
    pub async fn select<T>(&self, table: &str, params: &[(&str, String)], auth_token: &str) -> Result<Vec<T>>
    where T: DeserializeOwned {
        let url = format!("{}/rest/v1/{}", self.base_url, table);
        debug!("Selecting from {} with {} filters", url, params.len());

        let response = self.client.get(&url)
            .headers(self.get_headers(auth_token)?)
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await?;
            error!("API error ({}): {}", status, error_text);

            return Err(match status.as_u16() {
                401 | 403 => anyhow!("Authentication error: {}", error_text),
                404 => anyhow!("Resource not found: {}", error_text),
                _ => anyhow!("API error ({}): {}", status, error_text),
            });
        }

        Ok(response.json::<Vec<T>>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use wiremock::{MockServer, Mock, ResponseTemplate};
    use wiremock::matchers::{method, path, header, query_param};

    #[tokio::test]
    async fn test_select_encodes_filter_values() {
        let mock_server = MockServer::start().await;
        let config = AppConfig::with_database(&format!("{}/", mock_server.uri()), "anon", "secret");
        let client = SupabaseClient::new(&config);

        Mock::given(method("GET"))
            .and(path("/rest/v1/users"))
            .and(query_param("id", "eq.a&b=c d"))
            .and(query_param("select", "id,activity_level"))
            .and(header("apikey", "anon"))
            .and(header("Authorization", "Bearer token-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "a&b=c d"}])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let params = [
            ("id", "eq.a&b=c d".to_string()),
            ("select", "id,activity_level".to_string()),
        ];
        let rows: Vec<Value> = client.select("users", &params, "token-1").await.unwrap();

        assert_eq!(rows, vec![json!({"id": "a&b=c d"})]);
    }

    #[tokio::test]
    async fn test_select_error_status_is_an_error() {
        let mock_server = MockServer::start().await;
        let config = AppConfig::with_database(&mock_server.uri(), "anon", "secret");
        let client = SupabaseClient::new(&config);

        Mock::given(method("GET"))
            .and(path("/rest/v1/health_data"))
            .respond_with(ResponseTemplate::new(401).set_body_string("JWT expired"))
            .mount(&mock_server)
            .await;

        let result: Result<Vec<Value>> = client.select("health_data", &[], "token-1").await;

        let message = result.unwrap_err().to_string();
        assert!(message.starts_with("Authentication error"), "{}", message);
    }

    #[test]
    fn test_headers_include_bearer_token() {
        let config = AppConfig::with_database("http://localhost:54321", "anon", "secret");
        let client = SupabaseClient::new(&config);

        let headers = client.get_headers("abc").unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer abc");
        assert_eq!(headers.get("apikey").unwrap(), "anon");
    }

    #[test]
    fn test_invalid_anon_key_is_an_error() {
        let config = AppConfig::with_database("http://localhost:54321", "bad\nkey", "secret");
        let client = SupabaseClient::new(&config);

        assert!(client.get_headers("abc").is_err());
    }
}
