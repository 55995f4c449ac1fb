pub mod api_client;
pub mod geo;
pub mod traits;

#[cfg(test)]
pub mod mock;

pub use api_client::ApiClient;
pub use traits::DogApi;
