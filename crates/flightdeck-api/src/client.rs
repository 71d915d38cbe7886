// Async HTTP client for the flight board REST API.
//
// Base path: `{base_url}/flights`
// Endpoints: GET (list, filtered), POST (create), DELETE /{flightNumber}

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;
use crate::types::{CreateFlightRequest, FlightResponse, ListFlightsQuery};

const COLLECTION: &str = "flights";

// ── Error response shape ─────────────────────────────────────────────

#[derive(serde::Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    message: Option<String>,
}

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the `/flights` collection.
///
/// Cheap to share behind an `Arc`; `reqwest::Client` pools connections
/// internally.
#[derive(Debug, Clone)]
pub struct FlightsClient {
    http: reqwest::Client,
    base_url: Url,
}

impl FlightsClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from a base URL (e.g. `http://localhost:8080/api`) and a
    /// transport config.
    pub fn new(base_url: &str, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Self::from_reqwest(base_url, http)
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidBaseUrl {
                url: base_url.to_string(),
            });
        }
        Ok(Self { http, base_url })
    }

    /// The API root every endpoint is resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Append path segments to the base URL. Segments are percent-encoded,
    /// so flight numbers containing `/` or spaces stay a single segment.
    fn url(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::InvalidBaseUrl {
                url: self.base_url.to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    async fn get_with_params<T: DeserializeOwned>(
        &self,
        url: Url,
        params: &[(&str, String)],
    ) -> Result<T, Error> {
        debug!("GET {url} params={params:?}");

        let resp = self.http.get(url).query(params).send().await?;
        self.handle_response(resp).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        url: Url,
        body: &B,
    ) -> Result<T, Error> {
        debug!("POST {url}");

        let resp = self.http.post(url).json(body).send().await?;
        self.handle_response(resp).await
    }

    async fn delete(&self, url: Url) -> Result<(), Error> {
        debug!("DELETE {url}");

        let resp = self.http.delete(url).send().await?;
        self.handle_empty(resp).await
    }

    // ── Response handling ────────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                let preview: String = body.chars().take(200).collect();
                Error::Deserialization {
                    message: format!("{e} (body preview: {preview:?})"),
                    body,
                }
            })
        } else {
            Err(self.parse_error(status, resp).await)
        }
    }

    async fn handle_empty(&self, resp: reqwest::Response) -> Result<(), Error> {
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(self.parse_error(status, resp).await)
        }
    }

    async fn parse_error(&self, status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
        let raw = resp.text().await.unwrap_or_default();
        let reason = || {
            status
                .canonical_reason()
                .map_or_else(|| status.to_string(), str::to_owned)
        };

        let message = match serde_json::from_str::<ErrorResponse>(&raw) {
            Ok(ErrorResponse { message: Some(m) }) if !m.is_empty() => m,
            Ok(_) => reason(),
            Err(_) if raw.trim().is_empty() => reason(),
            Err(_) => raw,
        };

        Error::Http {
            status: status.as_u16(),
            message,
        }
    }

    // ━━ Public API ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    /// `GET /flights` with optional `status` / `destinationCity` filters.
    ///
    /// Records come back in server order.
    pub async fn list_flights(&self, query: &ListFlightsQuery) -> Result<Vec<FlightResponse>, Error> {
        let url = self.url(&[COLLECTION])?;
        self.get_with_params(url, &query.params()).await
    }

    /// `POST /flights`. Returns the server's canonical record, including
    /// the status it assigned.
    pub async fn create_flight(&self, req: &CreateFlightRequest) -> Result<FlightResponse, Error> {
        let url = self.url(&[COLLECTION])?;
        debug!(flight_number = %req.flight_number, "creating flight");
        self.post(url, req).await
    }

    /// `DELETE /flights/{flightNumber}`. Any response body is ignored.
    pub async fn delete_flight(&self, flight_number: &str) -> Result<(), Error> {
        let url = self.url(&[COLLECTION, flight_number])?;
        self.delete(url).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn client(base: &str) -> FlightsClient {
        FlightsClient::from_reqwest(base, reqwest::Client::new()).unwrap()
    }

    #[test]
    fn collection_url_under_base_path() {
        let c = client("http://localhost:8080/api");
        assert_eq!(
            c.url(&[COLLECTION]).unwrap().as_str(),
            "http://localhost:8080/api/flights"
        );
    }

    #[test]
    fn trailing_slash_on_base_is_tolerated() {
        let c = client("http://localhost:8080/api/");
        assert_eq!(
            c.url(&[COLLECTION, "AB123"]).unwrap().as_str(),
            "http://localhost:8080/api/flights/AB123"
        );
    }

    #[test]
    fn bare_host_base() {
        let c = client("http://localhost:8080");
        assert_eq!(
            c.url(&[COLLECTION]).unwrap().as_str(),
            "http://localhost:8080/flights"
        );
    }

    #[test]
    fn flight_number_is_percent_encoded() {
        let c = client("http://localhost/api");
        assert_eq!(
            c.url(&[COLLECTION, "AB 1/2"]).unwrap().as_str(),
            "http://localhost/api/flights/AB%201%2F2"
        );
    }

    #[test]
    fn rejects_non_base_url() {
        let err = FlightsClient::from_reqwest("mailto:ops@example.com", reqwest::Client::new())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidBaseUrl { .. }));
    }

    #[test]
    fn rejects_garbage_url() {
        let err = FlightsClient::from_reqwest("not a url", reqwest::Client::new()).unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }
}
