// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP.
// Todas las requests llevan la cookie de sesión (credentials: include).
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::RequestCredentials;

use crate::config::CONFIG;
use crate::error::{ApiError, ApiResult};
use crate::models::{
    Coordinates, Dog, GeoBoundingBox, Location, LocationSearchRequest, LocationSearchResponse, LoginRequest,
    SearchCursor, SearchPage, SearchQuery,
};
use crate::services::traits::DogApi;
use crate::utils::constants::{DETAIL_BATCH_LIMIT, LOCATION_SEARCH_SIZE};

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.api_base_url())
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn get(&self, path: &str) -> RequestBuilder {
        Request::get(&self.url(path)).credentials(RequestCredentials::Include)
    }

    fn post(&self, path: &str) -> RequestBuilder {
        Request::post(&self.url(path)).credentials(RequestCredentials::Include)
    }

    async fn send(request: Request) -> ApiResult<Response> {
        request.send().await.map_err(|e| ApiError::Network {
            message: e.to_string(),
        })
    }

    fn with_json<B: Serialize + ?Sized>(builder: RequestBuilder, body: &B) -> ApiResult<Request> {
        builder.json(body).map_err(|e| ApiError::Serialization {
            message: e.to_string(),
        })
    }

    async fn expect_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        if !response.ok() {
            return Err(ApiError::Status {
                status: response.status(),
                status_text: response.status_text(),
            });
        }
        response.json::<T>().await.map_err(|e| ApiError::Parse {
            message: e.to_string(),
        })
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = Self::with_json(self.post(path), body)?;
        let response = Self::send(request).await?;
        Self::expect_json(response).await
    }

    async fn get_search(&self, builder: RequestBuilder) -> ApiResult<SearchPage> {
        let request = builder.build().map_err(|e| ApiError::Serialization {
            message: e.to_string(),
        })?;
        let response = Self::send(request).await?;
        let page = Self::expect_json::<SearchPage>(response).await?;
        log::debug!(
            "📡 [API] Búsqueda: {} ids, next: {:?}",
            page.result_ids.len(),
            page.next.as_ref().map(SearchCursor::as_str)
        );
        Ok(page)
    }
}

#[async_trait(?Send)]
impl DogApi for ApiClient {
    async fn login(&self, name: &str, email: &str) -> ApiResult<bool> {
        let body = LoginRequest::new(name, email);
        log::info!("🔐 [API] Login para: {}", email);

        let request = Self::with_json(self.post("/auth/login"), &body)?;
        let response = Self::send(request).await?;

        if !response.ok() {
            log::error!("❌ [API] Login rechazado: HTTP {}", response.status());
            return Ok(false);
        }

        if let Ok(text) = response.text().await {
            log::debug!("📡 [API] Respuesta login: {}", text);
        }
        Ok(true)
    }

    async fn logout(&self) -> ApiResult<()> {
        let request = self.post("/auth/logout").build().map_err(|e| ApiError::Serialization {
            message: e.to_string(),
        })?;
        let response = Self::send(request).await?;
        if response.ok() {
            log::info!("👋 [API] Logout completado");
        } else {
            log::warn!("⚠️ [API] Logout devolvió HTTP {}", response.status());
        }
        Ok(())
    }

    async fn fetch_search_page(&self, query: &SearchQuery) -> ApiResult<SearchPage> {
        let pairs = query.to_pairs();
        let builder = self
            .get("/dogs/search")
            .query(pairs.iter().map(|(key, value)| (*key, value.as_str())));
        self.get_search(builder).await
    }

    async fn fetch_search_cursor(&self, cursor: &SearchCursor) -> ApiResult<SearchPage> {
        log::info!("📡 [API] Siguiente página: {}", cursor.as_str());
        self.get_search(self.get(cursor.as_str())).await
    }

    async fn fetch_details(&self, ids: &[String]) -> ApiResult<Vec<Dog>> {
        let batch = &ids[..ids.len().min(DETAIL_BATCH_LIMIT)];
        if batch.len() < ids.len() {
            log::warn!("⚠️ [API] {} ids recortados al límite de {}", ids.len(), DETAIL_BATCH_LIMIT);
        }
        log::debug!("📡 [API] Detalles para {} perros", batch.len());
        self.post_json("/dogs", batch).await
    }

    async fn resolve_zip(&self, zip_code: &str) -> ApiResult<Coordinates> {
        let locations: Vec<Option<Location>> = self.post_json("/locations", &[zip_code]).await?;
        locations
            .into_iter()
            .flatten()
            .next()
            .map(|location| location.coordinates())
            .ok_or_else(|| ApiError::ZipNotFound {
                zip_code: zip_code.to_string(),
            })
    }

    async fn search_zips_in_radius(&self, bounding_box: &GeoBoundingBox) -> ApiResult<Vec<String>> {
        let body = LocationSearchRequest {
            geo_bounding_box: *bounding_box,
            size: LOCATION_SEARCH_SIZE,
        };
        let response: LocationSearchResponse = self.post_json("/locations/search", &body).await?;
        log::debug!(
            "📍 [API] {} ZIPs en el área (total {})",
            response.results.len(),
            response.total
        );
        Ok(response.results.into_iter().map(|location| location.zip_code).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_paths_onto_base_url() {
        let client = ApiClient::with_base_url("https://example.test/");
        assert_eq!(client.url("/dogs/search"), "https://example.test/dogs/search");
        assert_eq!(client.url("dogs"), "https://example.test/dogs");
    }

    #[test]
    fn absolute_cursor_urls_pass_through() {
        let client = ApiClient::with_base_url("https://example.test");
        assert_eq!(
            client.url("https://other.test/dogs/search?from=25"),
            "https://other.test/dogs/search?from=25"
        );
        assert_eq!(
            client.url("/dogs/search?size=25&from=25"),
            "https://example.test/dogs/search?size=25&from=25"
        );
    }
}
