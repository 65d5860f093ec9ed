use crate::api::error::ApiError;
use crate::api::query::QueryPairs;
use crate::config::ClientConfig;
use crate::types::feature::FeatureCollection;
use log::{info, warn};
use reqwest::{Client, Request};
use serde::de::DeserializeOwned;

const API_KEY_PARAM: &str = "api-key";

/// Performs single GET requests against the metObs collections and decodes the
/// GeoJSON feature collections they return.
pub(crate) struct ApiLoader {
    config: ClientConfig,
    http_client: Client,
}

impl ApiLoader {
    pub fn new(config: ClientConfig) -> Result<ApiLoader, ApiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build().map_err(ApiError::ClientBuild)?;
        Ok(ApiLoader {
            config,
            http_client,
        })
    }

    /// Builds the GET request for one page of `collection`, appending the API key
    /// when one is configured.
    fn build_request(
        &self,
        collection: &str,
        mut query: QueryPairs,
    ) -> Result<(String, Request), ApiError> {
        let url = self.config.items_url(collection);
        info!("Requesting {} with {:?}", url, query);
        if let Some(api_key) = &self.config.api_key {
            query.push((API_KEY_PARAM, api_key.clone()));
        }
        let request = self
            .http_client
            .get(&url)
            .query(&query)
            .build()
            .map_err(|e| ApiError::NetworkRequest(url.clone(), e))?;
        Ok((url, request))
    }

    /// Fetches one page of `collection` and returns its features.
    pub async fn get_features<T: DeserializeOwned>(
        &self,
        collection: &str,
        query: QueryPairs,
    ) -> Result<Vec<T>, ApiError> {
        let (url, request) = self.build_request(collection, query)?;
        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|e| ApiError::NetworkRequest(url.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(if let Some(status) = e.status() {
                    ApiError::HttpStatus {
                        url,
                        status,
                        source: e,
                    }
                } else {
                    ApiError::NetworkRequest(url, e)
                });
            }
        };

        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::NetworkRequest(url.clone(), e))?;
        let collection =
            decode_collection::<T>(&body).map_err(|e| ApiError::JsonParse(url.clone(), e))?;
        info!(
            "Received {} features from {} (numberReturned: {:?}, timeStamp: {:?})",
            collection.features.len(),
            url,
            collection.number_returned,
            collection.time_stamp
        );
        Ok(collection.features)
    }
}

fn decode_collection<T: DeserializeOwned>(
    body: &[u8],
) -> Result<FeatureCollection<T>, serde_json::Error> {
    serde_json::from_slice(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::observation::Observation;
    use crate::types::station::Station;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves `response` verbatim to the first connection and returns the base URL.
    async fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn local_loader(base_url: String) -> ApiLoader {
        ApiLoader {
            config: ClientConfig::builder()
                .base_url(base_url)
                .timeout(Duration::from_secs(5))
                .build(),
            http_client: Client::builder()
                .no_proxy()
                .timeout(Duration::from_secs(5))
                .build()
                .unwrap(),
        }
    }

    #[test]
    fn test_decode_station_page() {
        let body = br#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "geometry": {"coordinates": [12.6503, 55.6178], "type": "Point"},
                    "id": "a",
                    "properties": {"stationId": "06180", "name": "Koebenhavns Lufthavn", "parameterId": ["temp_dry"]}
                },
                {
                    "type": "Feature",
                    "geometry": {"coordinates": [11.6044, 55.7156], "type": "Point"},
                    "id": "b",
                    "properties": {"stationId": "06156", "name": "Holbaek"}
                }
            ],
            "numberReturned": 2
        }"#;
        let collection = decode_collection::<Station>(body).unwrap();
        let ids: Vec<_> = collection
            .features
            .iter()
            .map(|s| s.station_id())
            .collect();
        assert_eq!(ids, ["06180", "06156"]);
    }

    #[test]
    fn test_decode_rejects_malformed_observation() {
        // `value` must be numeric.
        let body = br#"{
            "type": "FeatureCollection",
            "features": [{
                "id": "a",
                "properties": {"observed": "2020-12-20T00:00:00Z", "parameterId": "temp_dry", "stationId": "06180", "value": "warm"}
            }]
        }"#;
        assert!(decode_collection::<Observation>(body).is_err());
    }

    #[test]
    fn test_new_with_timeout() {
        let config = ClientConfig::builder()
            .timeout(Duration::from_secs(5))
            .build();
        assert!(ApiLoader::new(config).is_ok());
    }

    #[test]
    fn test_request_carries_api_key_when_configured() {
        let config = ClientConfig::builder().api_key("secret").build();
        let loader = ApiLoader::new(config).unwrap();
        let (url, request) = loader
            .build_request("station", vec![("limit", "10".to_string())])
            .unwrap();
        assert_eq!(url, "https://dmigw.govcloud.dk/v2/metObs/collections/station/items");
        assert_eq!(request.url().path(), "/v2/metObs/collections/station/items");
        assert_eq!(request.url().query(), Some("limit=10&api-key=secret"));
    }

    #[test]
    fn test_request_without_api_key() {
        let loader = ApiLoader::new(ClientConfig::default()).unwrap();
        let (_, request) = loader
            .build_request("observation", vec![("parameterId", "temp_dry".to_string())])
            .unwrap();
        let query = request.url().query().unwrap_or_default();
        assert_eq!(query, "parameterId=temp_dry");
        assert!(!query.contains("api-key"));
    }

    #[tokio::test]
    async fn test_error_status_is_http_status() {
        let base_url = serve_once(
            "HTTP/1.1 503 Service Unavailable\r\ncontent-length: 0\r\nconnection: close\r\n\r\n",
        )
        .await;
        let result = local_loader(base_url)
            .get_features::<Station>("station", vec![("limit", "1".to_string())])
            .await;
        match result {
            Err(ApiError::HttpStatus { status, url, .. }) => {
                assert_eq!(status, reqwest::StatusCode::SERVICE_UNAVAILABLE);
                assert!(url.ends_with("/collections/station/items"));
            }
            other => panic!("Expected HttpStatus, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_undecodable_body_is_json_parse() {
        let base_url = serve_once(
            "HTTP/1.1 200 OK\r\ncontent-type: application/geo+json\r\ncontent-length: 15\r\nconnection: close\r\n\r\n{\"features\": 5}",
        )
        .await;
        let result = local_loader(base_url)
            .get_features::<Observation>("observation", vec![])
            .await;
        assert!(
            matches!(result, Err(ApiError::JsonParse(..))),
            "Expected JsonParse, got {:?}",
            result
        );
    }

    #[tokio::test]
    async fn test_successful_page_is_decoded() {
        let base_url = serve_once(
            "HTTP/1.1 200 OK\r\ncontent-length: 39\r\nconnection: close\r\n\r\n{\"features\": [], \"numberReturned\": 0}  ",
        )
        .await;
        let stations = local_loader(base_url)
            .get_features::<Station>("station", vec![])
            .await
            .unwrap();
        assert!(stations.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_an_error() {
        // Nothing listens on the discard port; a proxy, if configured, answers with an error status.
        let config = ClientConfig::builder()
            .base_url("http://127.0.0.1:9")
            .timeout(Duration::from_secs(5))
            .build();
        let loader = ApiLoader::new(config).unwrap();
        let result = loader
            .get_features::<Station>("station", vec![("limit", "1".to_string())])
            .await;
        assert!(matches!(
            result,
            Err(ApiError::NetworkRequest(..) | ApiError::HttpStatus { .. })
        ));
    }
}
