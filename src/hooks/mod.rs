pub mod use_dog_search;
pub mod use_route;
pub mod use_session;

pub use use_dog_search::{use_dog_search, UseDogSearchHandle};
pub use use_route::{use_route, UseRouteHandle};
pub use use_session::{use_session, use_session_provider, SessionContext};
