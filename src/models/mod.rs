pub mod auth;
pub mod dog;
pub mod location;
pub mod search;

pub use auth::{LoginOutcome, LoginRequest};
pub use dog::Dog;
pub use location::{Coordinates, GeoBoundingBox, GeoPoint, Location, LocationSearchRequest, LocationSearchResponse};
pub use search::{SearchCriteria, SearchCursor, SearchPage, SearchQuery, SortOrder};
