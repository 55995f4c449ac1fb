use serde::{Deserialize, Serialize};

/// Location record from `/locations` and `/locations/search`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub zip_code: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub county: Option<String>,
}

impl Location {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// Coordenadas geográficas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<(f64, f64)> for Coordinates {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self { latitude, longitude }
    }
}

/// Corner point in the shape the location search expects
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBoundingBox {
    pub bottom_left: GeoPoint,
    pub top_right: GeoPoint,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationSearchRequest {
    #[serde(rename = "geoBoundingBox")]
    pub geo_bounding_box: GeoBoundingBox,
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LocationSearchResponse {
    #[serde(default)]
    pub results: Vec<Location>,
    #[serde(default)]
    pub total: u64,
}
