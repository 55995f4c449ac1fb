/// Default base URL of the dog search service
/// Overridable at compile time via API_BASE_URL (see build.rs / .env)
pub const DEFAULT_API_BASE_URL: &str = "https://frontend-take-home-service.fetch.com";

/// Ids requested per remote search page
pub const REMOTE_PAGE_SIZE: u32 = 25;

/// Rows shown per table page (sliced locally)
pub const LOCAL_PAGE_SIZE: usize = 5;

/// Max ids accepted by `POST /dogs`
pub const DETAIL_BATCH_LIMIT: usize = 100;

/// Max ZIPs returned by one location search
pub const LOCATION_SEARCH_SIZE: u32 = 1000;

/// Radius choices offered next to the ZIP filter (miles)
pub const RADIUS_OPTIONS_MILES: [u32; 5] = [10, 25, 50, 100, 200];

/// Cookie set by `POST /auth/login`
pub const SESSION_COOKIE_NAME: &str = "fetch-access-token";
