use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{Coordinates, Dog, GeoBoundingBox, SearchCursor, SearchPage, SearchQuery};

/// Remote dog search service
///
/// One request per call: no retry, batching or backoff. Futures are `?Send`
/// because the browser implementation holds JS handles.
#[async_trait(?Send)]
pub trait DogApi {
    /// `Ok(false)` on a non-2xx answer; `Err` only when the request did not complete
    async fn login(&self, name: &str, email: &str) -> ApiResult<bool>;

    async fn logout(&self) -> ApiResult<()>;

    async fn fetch_search_page(&self, query: &SearchQuery) -> ApiResult<SearchPage>;

    /// Follows the `next` path of a previous page
    async fn fetch_search_cursor(&self, cursor: &SearchCursor) -> ApiResult<SearchPage>;

    /// At most `DETAIL_BATCH_LIMIT` ids; callers dedupe first
    async fn fetch_details(&self, ids: &[String]) -> ApiResult<Vec<Dog>>;

    /// `ApiError::ZipNotFound` when the service knows no such ZIP
    async fn resolve_zip(&self, zip_code: &str) -> ApiResult<Coordinates>;

    async fn search_zips_in_radius(&self, bounding_box: &GeoBoundingBox) -> ApiResult<Vec<String>>;
}
