// ============================================================================
// GEO - Radio en millas → caja de coordenadas
// ============================================================================
// Aproximación lineal plana (grados = millas × 0.01), NO geodésica.
// Un grado de latitud son ~69 millas, así que la caja queda más pequeña que
// el radio pedido, y en longitud la diferencia cambia con la latitud.
// ============================================================================

use crate::models::{Coordinates, GeoBoundingBox, GeoPoint};

/// Degrees added per mile of radius (flat approximation)
pub const DEGREES_PER_MILE: f64 = 0.01;

pub fn radius_to_degrees(radius_miles: u32) -> f64 {
    f64::from(radius_miles) * DEGREES_PER_MILE
}

/// Box of `center ± radius` degrees, clamped to valid coordinates
pub fn bounding_box(center: &Coordinates, radius_miles: u32) -> GeoBoundingBox {
    let delta = radius_to_degrees(radius_miles);
    GeoBoundingBox {
        bottom_left: GeoPoint {
            lat: (center.latitude - delta).max(-90.0),
            lon: (center.longitude - delta).max(-180.0),
        },
        top_right: GeoPoint {
            lat: (center.latitude + delta).min(90.0),
            lon: (center.longitude + delta).min(180.0),
        },
    }
}
